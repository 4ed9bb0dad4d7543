//! Integration tests for the geocoding client using WireMock

use integration_geocoding::{GeocodingClient, GeocodingConfig, GeocodingError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn test_config(base_url: &str) -> GeocodingConfig {
    GeocodingConfig {
        base_url: base_url.to_string(),
        api_key: Some("test_api_key".to_string()),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn geocode_returns_first_result_coordinates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .and(query_param("address", "1 Main St, Springfield"))
        .and(query_param("key", "test_api_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "results": [
                {"geometry": {"location": {"lat": 39.7817, "lng": -89.6501}}},
                {"geometry": {"location": {"lat": 0.0, "lng": 0.0}}}
            ]
        })))
        .mount(&server)
        .await;

    let client = GeocodingClient::new(&test_config(&server.uri())).expect("client creation");
    let coords = client
        .geocode("1 Main St, Springfield")
        .await
        .expect("geocode")
        .expect("coordinates");

    assert!((coords.latitude - 39.7817).abs() < f64::EPSILON);
    assert!((coords.longitude + 89.6501).abs() < f64::EPSILON);
}

#[tokio::test]
async fn zero_results_returns_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "ZERO_RESULTS", "results": []})),
        )
        .mount(&server)
        .await;

    let client = GeocodingClient::new(&test_config(&server.uri())).expect("client creation");
    let coords = client.geocode("nowhere at all").await.expect("geocode");

    assert!(coords.is_none());
}

#[tokio::test]
async fn request_denied_maps_to_authentication_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "REQUEST_DENIED", "results": []})),
        )
        .mount(&server)
        .await;

    let client = GeocodingClient::new(&test_config(&server.uri())).expect("client creation");
    let result = client.geocode("1 Main St").await;

    assert!(matches!(
        result,
        Err(GeocodingError::AuthenticationFailed(_))
    ));
}

#[tokio::test]
async fn server_error_maps_to_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = GeocodingClient::new(&test_config(&server.uri())).expect("client creation");
    let result = client.geocode("1 Main St").await;

    assert!(matches!(result, Err(GeocodingError::ServiceUnavailable(_))));
}

#[tokio::test]
async fn slow_response_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/maps/api/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "OK"}))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = test_config(&server.uri());
    config.timeout_secs = 1;
    let client = GeocodingClient::new(&config).expect("client creation");
    let result = client.geocode("1 Main St").await;

    assert!(matches!(
        result,
        Err(GeocodingError::Timeout { timeout_secs: 1 })
    ));
}
