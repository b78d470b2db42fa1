//! Logging setup
//!
//! Human-readable or JSON events on stderr, filtered by `RUST_LOG` or a
//! verbosity-derived default.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_logging};
