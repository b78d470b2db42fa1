//! Terminal clipboard - Implements ClipboardPort with the OSC 52 escape sequence
//!
//! Most terminal emulators (and tmux with `set-clipboard on`) forward the
//! payload to the system clipboard, which also works over SSH.

use std::io::{self, Write};

use application::error::ApplicationError;
use application::ports::ClipboardPort;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use parking_lot::Mutex;
use tracing::debug;

/// Build the escape sequence that sets the clipboard to `text`
#[must_use]
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Clipboard that writes OSC 52 sequences to a terminal stream
pub struct Osc52Clipboard {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for Osc52Clipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Osc52Clipboard").finish_non_exhaustive()
    }
}

impl Default for Osc52Clipboard {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Osc52Clipboard {
    /// Write sequences to the process's stdout
    #[must_use]
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Write sequences to any stream
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl ClipboardPort for Osc52Clipboard {
    fn copy(&self, text: &str) -> Result<(), ApplicationError> {
        let sequence = osc52_sequence(text);
        let mut writer = self.writer.lock();
        writer
            .write_all(sequence.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| ApplicationError::ExternalService(format!("Clipboard write failed: {e}")))?;

        debug!(bytes = text.len(), "Clipboard sequence written");
        Ok(())
    }
}
