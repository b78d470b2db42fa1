//! Clipboard port

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for writing text to the system clipboard
#[cfg_attr(test, automock)]
pub trait ClipboardPort: Send + Sync {
    /// Write `text` verbatim to the clipboard
    fn copy(&self, text: &str) -> Result<(), ApplicationError>;
}
