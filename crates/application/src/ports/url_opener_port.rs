//! URL opener port
//!
//! Used by the share action to hand the pre-filled messaging link to the
//! platform's browser.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for opening a URL in a new browsing context
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UrlOpenerPort: Send + Sync {
    /// Open `url`, resolving once the launcher has reported back
    async fn open(&self, url: &str) -> Result<(), ApplicationError>;
}
