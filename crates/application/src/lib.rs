//! Application layer - Use cases and orchestration
//!
//! Contains the form controller (debounced search and selection flow), the
//! ride link builder, and the port definitions adapters implement.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
