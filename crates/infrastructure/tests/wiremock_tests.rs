//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - Address search adapter against a mocked geocoding service
//! - Configuration feeding the adapter

use std::time::Duration;

use application::AddressSearchPort;
use infrastructure::{AppConfig, NominatimSearchAdapter};
use integration_nominatim::NominatimConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter_for(server: &MockServer) -> NominatimSearchAdapter {
    let config = NominatimConfig {
        base_url: server.uri(),
        ..NominatimConfig::for_testing()
    };
    NominatimSearchAdapter::new(&config).unwrap()
}

fn tiradentes_body() -> serde_json::Value {
    serde_json::json!([
        {
            "place_id": 1,
            "lat": "-23.9",
            "lon": "-46.3",
            "display_name": "Rua Tiradentes, Santos",
            "address": { "road": "Rua Tiradentes", "suburb": "Centro", "city": "Santos" },
            "boundingbox": []
        }
    ])
}

// ============================================================================
// Address Search Adapter Tests
// ============================================================================

mod address_search_tests {
    use super::*;

    #[tokio::test]
    async fn returns_candidates_from_service() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Rua Tiradentes 100, Santos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tiradentes_body()))
            .expect(1)
            .mount(&server)
            .await;

        let candidates = adapter_for(&server)
            .search("Rua Tiradentes 100, Santos")
            .await;

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].place_id, 1);
        assert_eq!(candidates[0].display_name, "Rua Tiradentes, Santos");
        assert_eq!(candidates[0].subtitle(), "Centro - Santos");
    }

    #[tokio::test]
    async fn rejected_request_yields_no_candidates() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        assert!(adapter_for(&server).search("Rua Tiradentes").await.is_empty());
    }

    #[tokio::test]
    async fn malformed_body_yields_no_candidates() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
            .mount(&server)
            .await;

        assert!(adapter_for(&server).search("Rua Tiradentes").await.is_empty());
    }

    #[tokio::test]
    async fn timeout_yields_no_candidates() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(tiradentes_body())
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = NominatimConfig {
            base_url: server.uri(),
            timeout_secs: 1,
            ..NominatimConfig::for_testing()
        };
        let adapter = NominatimSearchAdapter::new(&config).unwrap();

        assert!(adapter.search("Rua Tiradentes").await.is_empty());
    }

    #[tokio::test]
    async fn unreachable_service_yields_no_candidates() {
        let config = NominatimConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..NominatimConfig::for_testing()
        };
        let adapter = NominatimSearchAdapter::new(&config).unwrap();

        assert!(adapter.search("Rua Tiradentes").await.is_empty());
    }

    #[tokio::test]
    async fn short_query_never_reaches_service() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tiradentes_body()))
            .expect(0)
            .mount(&server)
            .await;

        assert!(adapter_for(&server).search("Ru").await.is_empty());
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod config_tests {
    use super::*;

    #[tokio::test]
    async fn geocoding_section_drives_the_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("limit", "3"))
            .and(query_param("countrycodes", "pt"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tiradentes_body()))
            .expect(1)
            .mount(&server)
            .await;

        let mut config = AppConfig::default();
        config.geocoding.base_url = server.uri();
        config.geocoding.result_limit = 3;
        config.geocoding.country_codes = "pt".to_string();
        config.geocoding.min_request_interval_ms = 0;
        assert!(config.validate().is_ok());

        let adapter = NominatimSearchAdapter::new(&config.geocoding).unwrap();
        assert_eq!(adapter.search("Rua Augusta").await.len(), 1);
    }
}
