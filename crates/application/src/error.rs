//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Both fields must be confirmed before a link can be built
    #[error("Origin and destination must both be confirmed")]
    SelectionIncomplete,

    /// Copy or share requested before any link was generated
    #[error("No link has been generated yet")]
    NoLinkGenerated,

    /// External service error (clipboard, URL opener)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}
