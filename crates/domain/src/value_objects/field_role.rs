//! Field role - Which of the two address fields an event targets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// The two address fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    /// Where the ride starts (pickup)
    Origin,
    /// Where the ride ends (dropoff)
    Destination,
}

impl FieldRole {
    /// Both roles in render order
    pub const ALL: [Self; 2] = [Self::Origin, Self::Destination];

    /// Parameter prefix used by the ride apps for this role
    #[must_use]
    pub const fn link_prefix(&self) -> &'static str {
        match self {
            Self::Origin => "pickup",
            Self::Destination => "dropoff",
        }
    }

    /// Parse a user-supplied field name, accepting English and Portuguese
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "o" | "origem" | "origin" | "pickup" | "de" => Some(Self::Origin),
            "d" | "destino" | "destination" | "dropoff" | "para" => Some(Self::Destination),
            _ => None,
        }
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Origin => write!(f, "origin"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

impl FromStr for FieldRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}
