//! Address search configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Nominatim address search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimConfig {
    /// Base URL for the Nominatim API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of candidates per search
    #[serde(default = "default_result_limit")]
    pub result_limit: u8,

    /// Country code filter (comma-separated ISO 3166-1 alpha-2)
    #[serde(default = "default_country_codes")]
    pub country_codes: String,

    /// Queries shorter than this (in characters) never reach the network
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,

    /// User-Agent sent with every request (required by the usage policy)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Cache TTL in minutes (0 to disable caching)
    #[serde(default)]
    pub cache_ttl_minutes: u32,

    /// Minimum spacing between requests in milliseconds (0 to disable)
    #[serde(default = "default_min_request_interval_ms")]
    pub min_request_interval_ms: u64,
}

fn default_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_result_limit() -> u8 {
    5
}

fn default_country_codes() -> String {
    "br".to_string()
}

const fn default_min_query_chars() -> usize {
    3
}

fn default_user_agent() -> String {
    concat!("RideLink/", env!("CARGO_PKG_VERSION")).to_string()
}

const fn default_min_request_interval_ms() -> u64 {
    1000
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            result_limit: default_result_limit(),
            country_codes: default_country_codes(),
            min_query_chars: default_min_query_chars(),
            user_agent: default_user_agent(),
            cache_ttl_minutes: 0,
            min_request_interval_ms: default_min_request_interval_ms(),
        }
    }
}

impl NominatimConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            cache_ttl_minutes: 0,
            min_request_interval_ms: 0,
            ..Default::default()
        }
    }

    /// Check if caching is enabled
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_minutes > 0
    }

    /// The `/search` endpoint derived from the base URL
    #[must_use]
    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        url::Url::parse(&self.base_url).map_err(|e| format!("base_url is not a valid URL: {e}"))?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.result_limit == 0 {
            return Err("result_limit must be greater than 0".to_string());
        }

        if self.result_limit > 10 {
            return Err("result_limit must be 10 or less".to_string());
        }

        Ok(())
    }
}
