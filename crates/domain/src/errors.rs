//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Unknown ride-hailing provider name
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Unknown address field name
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Candidate index outside the current list
    #[error("No candidate at position {index} (list has {len})")]
    CandidateOutOfRange { index: usize, len: usize },

    /// Operation not valid in the field's current state
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

impl DomainError {
    /// Create an out-of-range candidate error
    pub const fn out_of_range(index: usize, len: usize) -> Self {
        Self::CandidateOutOfRange { index, len }
    }
}
