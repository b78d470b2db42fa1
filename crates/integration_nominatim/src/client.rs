//! Nominatim address search client
//!
//! Issues one `GET /search` per query and returns the candidates in the
//! order the service ranked them. Short queries never reach the network.
//!
//! Optional result caching and request spacing keep usage within the
//! public instance's policy.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use reqwest::Client;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::config::NominatimConfig;
use crate::error::NominatimError;
use crate::models::NominatimPlace;

/// Trait for address search clients
#[async_trait]
pub trait AddressSearchClient: Send + Sync {
    /// Search for addresses matching a free-form query
    async fn search(&self, query: &str) -> Result<Vec<NominatimPlace>, NominatimError>;
}

/// Nominatim-based address search with optional caching and request spacing
#[derive(Debug)]
pub struct NominatimClient {
    client: Client,
    config: NominatimConfig,
    cache: Option<Cache<String, Vec<NominatimPlace>>>,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl NominatimClient {
    /// Create a new Nominatim client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, NominatimError> {
        config
            .validate()
            .map_err(NominatimError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| NominatimError::ConnectionFailed(e.to_string()))?;

        let cache = config.caching_enabled().then(|| {
            Cache::builder()
                .max_capacity(500)
                .time_to_live(Duration::from_secs(u64::from(config.cache_ttl_minutes) * 60))
                .build()
        });

        Ok(Self {
            client,
            config: config.clone(),
            cache,
            last_request: Arc::new(Mutex::new(None)),
        })
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &NominatimConfig {
        &self.config
    }

    /// Space requests at least `min_request_interval_ms` apart
    async fn rate_limit(&self) {
        if self.config.min_request_interval_ms == 0 {
            return;
        }
        let interval = Duration::from_millis(self.config.min_request_interval_ms);

        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < interval {
                let wait = interval.saturating_sub(elapsed);
                debug!(?wait, "Spacing address search request");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }

    fn cache_key(query: &str) -> String {
        query.trim().to_lowercase()
    }

    fn query_params(&self, query: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", query.to_string()),
            ("format", "json".to_string()),
            ("limit", self.config.result_limit.to_string()),
            ("addressdetails", "1".to_string()),
        ];

        if !self.config.country_codes.is_empty() {
            params.push(("countrycodes", self.config.country_codes.clone()));
        }

        params
    }

    fn parse_response(body: &str) -> Result<Vec<NominatimPlace>, NominatimError> {
        serde_json::from_str(body).map_err(|e| NominatimError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl AddressSearchClient for NominatimClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<NominatimPlace>, NominatimError> {
        if query.chars().count() < self.config.min_query_chars {
            debug!("Query too short, skipping address search");
            return Ok(Vec::new());
        }

        let cache_key = Self::cache_key(query);
        if let Some(cache) = &self.cache {
            if let Some(places) = cache.get(&cache_key).await {
                debug!(count = places.len(), "Address search cache hit");
                return Ok(places);
            }
        }

        self.rate_limit().await;

        let response = self
            .client
            .get(self.config.search_url())
            .query(&self.query_params(query))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NominatimError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    NominatimError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NominatimError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| NominatimError::ParseError(e.to_string()))?;
        let places = Self::parse_response(&body)?;

        debug!(count = places.len(), "Address search completed");

        if let Some(cache) = &self.cache {
            cache.insert(cache_key, places.clone()).await;
        }

        Ok(places)
    }
}
