//! Ride-hailing provider - Identifies the app a generated link opens

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Supported ride-hailing apps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Provider {
    /// 99 (99app), the default selection
    #[default]
    #[serde(rename = "99")]
    NinetyNine,
    /// Uber
    #[serde(rename = "uber")]
    Uber,
}

impl Provider {
    /// Both providers in toggle order
    pub const ALL: [Self; 2] = [Self::NinetyNine, Self::Uber];

    /// Get the display name shown to the user and in share messages
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::NinetyNine => "99",
            Self::Uber => "Uber",
        }
    }

    /// Get the config key for this provider
    #[must_use]
    pub const fn config_key(&self) -> &'static str {
        match self {
            Self::NinetyNine => "99",
            Self::Uber => "uber",
        }
    }

    /// Parse from config string (case-insensitive)
    #[must_use]
    pub fn from_config(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "99" | "99app" | "noventa e nove" => Some(Self::NinetyNine),
            "uber" => Some(Self::Uber),
            _ => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Provider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_config(s).ok_or_else(|| DomainError::UnknownProvider(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_returns_correct_values() {
        assert_eq!(Provider::NinetyNine.display_name(), "99");
        assert_eq!(Provider::Uber.display_name(), "Uber");
    }

    #[test]
    fn from_config_is_case_insensitive() {
        assert_eq!(Provider::from_config("UBER"), Some(Provider::Uber));
        assert_eq!(Provider::from_config(" 99 "), Some(Provider::NinetyNine));
        assert_eq!(Provider::from_config("99App"), Some(Provider::NinetyNine));
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "lyft".parse::<Provider>().unwrap_err();
        assert!(err.to_string().contains("lyft"));
    }

    #[test]
    fn default_is_ninety_nine() {
        assert_eq!(Provider::default(), Provider::NinetyNine);
    }

    #[test]
    fn serde_uses_config_keys() {
        assert_eq!(serde_json::to_string(&Provider::NinetyNine).unwrap(), "\"99\"");
        assert_eq!(serde_json::to_string(&Provider::Uber).unwrap(), "\"uber\"");
        assert_eq!(
            serde_json::from_str::<Provider>("\"uber\"").unwrap(),
            Provider::Uber
        );
    }

    #[test]
    fn all_lists_toggle_order() {
        assert_eq!(Provider::ALL, [Provider::NinetyNine, Provider::Uber]);
    }
}
