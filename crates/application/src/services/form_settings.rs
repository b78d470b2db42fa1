//! Form behaviour settings

use std::time::Duration;

use domain::Provider;
use serde::{Deserialize, Serialize};

/// What to do with a search response that arrives after a newer search
/// for the same field was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponsePolicy {
    /// Tag each request with a per-field sequence number and drop responses
    /// that are not the latest
    #[default]
    LatestOnly,
    /// Apply responses in arrival order; the last one to arrive wins
    LastResponseWins,
}

/// Timings and policies for the form controller
///
/// Unknown keys are rejected so a misplaced setting fails at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormSettings {
    /// Idle time after the last keystroke before searching
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// How long the "copied" acknowledgement stays visible
    #[serde(default = "default_copied_reset_ms")]
    pub copied_reset_ms: u64,

    /// Minimum characters before a search is issued
    ///
    /// Not read from config: it follows `geocoding.min_query_chars`.
    #[serde(skip, default = "default_min_query_chars")]
    pub min_query_chars: usize,

    /// Provider selected at start
    #[serde(default)]
    pub default_provider: Provider,

    /// Handling of out-of-order search responses
    #[serde(default)]
    pub stale_responses: StaleResponsePolicy,
}

const fn default_debounce_ms() -> u64 {
    500
}

const fn default_copied_reset_ms() -> u64 {
    2000
}

const fn default_min_query_chars() -> usize {
    3
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            copied_reset_ms: default_copied_reset_ms(),
            min_query_chars: default_min_query_chars(),
            default_provider: Provider::default(),
            stale_responses: StaleResponsePolicy::default(),
        }
    }
}

impl FormSettings {
    /// Debounce delay as a `Duration`
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Copied-flag lifetime as a `Duration`
    #[must_use]
    pub const fn copied_reset(&self) -> Duration {
        Duration::from_millis(self.copied_reset_ms)
    }
}
