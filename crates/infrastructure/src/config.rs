//! Application configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `RIDELINK_*` environment variables (`__` separates nested
//! keys, e.g. `RIDELINK_FORM__DEBOUNCE_MS=300`).

use std::path::Path;

use application::FormSettings;
use integration_nominatim::NominatimConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "ridelink";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "RIDELINK";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Address search service
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Form timings and policies
    #[serde(default)]
    pub form: FormSettings,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the environment
    ///
    /// With `path` set the file must exist; otherwise `ridelink.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("form.debounce_ms", 500)?
            .set_default("form.copied_reset_ms", 2000)?
            .set_default("logging.format", "text")?
            .add_source(file)
            // Strings from the environment are converted when deserialized,
            // so "99" stays a provider name instead of becoming a number.
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Check every section, returning the first problem found
    pub fn validate(&self) -> Result<(), String> {
        self.geocoding
            .validate()
            .map_err(|e| format!("geocoding: {e}"))?;

        if self.form.debounce_ms == 0 {
            return Err("form: debounce_ms must be greater than 0".to_string());
        }
        if self.form.copied_reset_ms == 0 {
            return Err("form: copied_reset_ms must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Form settings with the search threshold taken from the geocoding
    /// section, so the controller and the client agree on it
    #[must_use]
    pub fn form_settings(&self) -> FormSettings {
        FormSettings {
            min_query_chars: self.geocoding.min_query_chars,
            ..self.form.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use application::StaleResponsePolicy;
    use domain::Provider;

    use super::*;
    use crate::telemetry::LogFormat;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.form.debounce_ms, 500);
        assert_eq!(config.geocoding.result_limit, 5);
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
            [geocoding]
            base_url = "http://localhost:8080"
            result_limit = 3
            cache_ttl_minutes = 15

            [form]
            debounce_ms = 250
            default_provider = "uber"
            stale_responses = "last_response_wins"

            [logging]
            format = "json"
            "#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.geocoding.base_url, "http://localhost:8080");
        assert_eq!(config.geocoding.result_limit, 3);
        assert_eq!(config.geocoding.cache_ttl_minutes, 15);
        assert_eq!(config.geocoding.country_codes, "br");
        assert_eq!(config.form.debounce_ms, 250);
        assert_eq!(config.form.copied_reset_ms, 2000);
        assert_eq!(config.form.default_provider, Provider::Uber);
        assert_eq!(
            config.form.stale_responses,
            StaleResponsePolicy::LastResponseWins
        );
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_quoted_numeric_provider() {
        let file = write_config("[form]\ndefault_provider = \"99\"\n");
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.form.default_provider, Provider::NinetyNine);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_validation_reports_section() {
        let mut config = AppConfig::default();
        config.geocoding.result_limit = 0;
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("geocoding:"));

        let mut config = AppConfig::default();
        config.form.debounce_ms = 0;
        assert!(config.validate().unwrap_err().contains("debounce_ms"));
    }

    #[test]
    fn test_form_settings_use_geocoding_threshold() {
        let mut config = AppConfig::default();
        config.geocoding.min_query_chars = 4;
        config.form.debounce_ms = 300;

        let settings = config.form_settings();
        assert_eq!(settings.min_query_chars, 4);
        assert_eq!(settings.debounce_ms, 300);
    }

    #[test]
    fn test_threshold_is_only_read_from_geocoding() {
        let file = write_config("[form]\nmin_query_chars = 5\n");
        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("min_query_chars"));

        let file = write_config("[geocoding]\nmin_query_chars = 5\n");
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.form_settings().min_query_chars, 5);
    }
}
