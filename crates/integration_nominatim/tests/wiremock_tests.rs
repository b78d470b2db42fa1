//! Integration tests for the address search client (wiremock-based)

use std::time::Duration;

use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_nominatim::{AddressSearchClient, NominatimClient, NominatimConfig, NominatimError};

fn config_for_mock(base_url: &str) -> NominatimConfig {
    NominatimConfig {
        base_url: base_url.to_string(),
        ..NominatimConfig::for_testing()
    }
}

const fn sample_places_json() -> &'static str {
    r#"[
        {
            "place_id": 1,
            "licence": "Data © OpenStreetMap contributors, ODbL 1.0.",
            "osm_type": "way",
            "osm_id": 27451234,
            "lat": "-23.9",
            "lon": "-46.3",
            "display_name": "Rua Tiradentes, Santos",
            "address": { "road": "Rua Tiradentes", "suburb": "Jabaquara", "city": "Santos" },
            "boundingbox": ["-23.91", "-23.89", "-46.31", "-46.29"]
        },
        {
            "place_id": 2,
            "lat": "-23.95",
            "lon": "-46.33",
            "display_name": "Rua Tiradentes, Vila Belmiro, Santos",
            "address": { "road": "Rua Tiradentes", "neighbourhood": "Vila Belmiro" },
            "boundingbox": []
        }
    ]"#
}

#[tokio::test]
async fn test_search_sends_expected_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Rua Tiradentes 100, Santos"))
        .and(query_param("format", "json"))
        .and(query_param("limit", "5"))
        .and(query_param("addressdetails", "1"))
        .and(query_param("countrycodes", "br"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_places_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = NominatimClient::new(&config_for_mock(&server.uri())).unwrap();
    let places = client.search("Rua Tiradentes 100, Santos").await.unwrap();

    assert_eq!(places.len(), 2);
}

#[tokio::test]
async fn test_search_preserves_service_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_places_json()))
        .mount(&server)
        .await;

    let client = NominatimClient::new(&config_for_mock(&server.uri())).unwrap();
    let places = client.search("Rua Tiradentes").await.unwrap();

    let ids: Vec<u64> = places.iter().map(|p| p.place_id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(places[0].address.suburb.as_deref(), Some("Jabaquara"));
    assert_eq!(places[1].address.neighbourhood.as_deref(), Some("Vila Belmiro"));
}

#[tokio::test]
async fn test_short_query_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_places_json()))
        .expect(0)
        .mount(&server)
        .await;

    let client = NominatimClient::new(&config_for_mock(&server.uri())).unwrap();

    assert!(client.search("").await.unwrap().is_empty());
    assert!(client.search("Ru").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_server_error_is_typed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = NominatimClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.search("Rua Tiradentes").await.unwrap_err();

    assert!(matches!(err, NominatimError::RequestFailed { status: 503 }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"error\": \"oops\"}"))
        .mount(&server)
        .await;

    let client = NominatimClient::new(&config_for_mock(&server.uri())).unwrap();
    let err = client.search("Rua Tiradentes").await.unwrap_err();

    assert!(matches!(err, NominatimError::ParseError(_)));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = NominatimConfig {
        timeout_secs: 1,
        ..config_for_mock(&server.uri())
    };
    let client = NominatimClient::new(&config).unwrap();
    let err = client.search("Rua Tiradentes").await.unwrap_err();

    assert!(matches!(err, NominatimError::Timeout { timeout_secs: 1 }));
}

#[tokio::test]
async fn test_cache_avoids_second_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_places_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = NominatimConfig {
        cache_ttl_minutes: 10,
        ..config_for_mock(&server.uri())
    };
    let client = NominatimClient::new(&config).unwrap();

    let first = client.search("Rua Tiradentes").await.unwrap();
    let second = client.search("  rua tiradentes ").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_result_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let client = NominatimClient::new(&config_for_mock(&server.uri())).unwrap();
    assert!(client.search("Rua Inexistente").await.unwrap().is_empty());
}
