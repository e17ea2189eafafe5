//! Integration tests for the Nominatim search client (wiremock-based)

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_geocoding::{GeocodingClient, NominatimConfig, NominatimSearchClient};

fn config_for_mock(base_url: &str) -> NominatimConfig {
    NominatimConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        cache_ttl_minutes: 0,
        ..NominatimConfig::default()
    }
}

const fn sample_results_json() -> &'static str {
    r#"[
        {
            "lat": "41.2646",
            "lon": "69.2163",
            "display_name": "Tashkent railway station, Turkiston Street, Tashkent, Uzbekistan"
        },
        {
            "lat": "41.3111",
            "lon": "69.2401",
            "display_name": "Tashkent, Uzbekistan"
        }
    ]"#
}

#[tokio::test]
async fn test_search_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Tash"))
        .and(query_param("format", "json"))
        .and(query_param("addressdetails", "1"))
        .and(query_param("limit", "5"))
        .and(query_param("countrycodes", "uz"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_results_json()))
        .mount(&server)
        .await;

    let client = NominatimSearchClient::new(&config_for_mock(&server.uri())).unwrap();

    let candidates = client.search("Tash", 5).await.unwrap();
    assert_eq!(candidates.len(), 2);
    assert!(candidates[0].label.contains("railway station"));
    assert!((candidates[0].location.longitude() - 69.2163).abs() < 1e-9);
    assert!((candidates[0].location.latitude() - 41.2646).abs() < 1e-9);
}

#[tokio::test]
async fn test_search_no_matches() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let client = NominatimSearchClient::new(&config_for_mock(&server.uri())).unwrap();

    let candidates = client.search("zzzzzz", 5).await.unwrap();
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_search_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = NominatimSearchClient::new(&config_for_mock(&server.uri())).unwrap();

    let result = client.search("Tash", 5).await;
    assert!(result.is_err());
    assert!(result.unwrap_err().is_retryable());
}

#[tokio::test]
async fn test_search_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = NominatimSearchClient::new(&config_for_mock(&server.uri())).unwrap();

    let result = client.search("Tash", 5).await;
    assert!(result.is_err());
    assert!(!result.unwrap_err().is_retryable());
}

#[tokio::test]
async fn test_search_cache_hit_skips_second_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_results_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = NominatimConfig {
        cache_ttl_minutes: 5,
        ..config_for_mock(&server.uri())
    };
    let client = NominatimSearchClient::new(&config).unwrap();

    let first = client.search("Tash", 5).await.unwrap();
    let second = client.search("Tash", 5).await.unwrap();
    assert_eq!(first, second);
}
