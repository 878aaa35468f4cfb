//! Integration tests for `GeocoderClient` using wiremock HTTP mocks.

use tourneymap_geocoder::{Geocode, GeocodeError, GeocoderClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> GeocoderClient {
    GeocoderClient::new(
        &format!("{}/search", server.uri()),
        "us",
        30,
        "tourneymap-test/0.1",
    )
    .expect("client construction should not fail")
}

#[tokio::test]
async fn search_returns_first_place() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        {
            "place_id": 297_459_370,
            "lat": "30.2711286",
            "lon": "-97.7436995",
            "display_name": "Austin, Travis County, Texas, United States"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Austin, TX"))
        .and(query_param("format", "json"))
        .and(query_param("limit", "1"))
        .and(query_param("countrycodes", "us"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let coordinate = client.search("Austin, TX").await.expect("should geocode");

    assert!((coordinate.latitude - 30.271_128_6).abs() < 1e-9);
    assert!((coordinate.longitude + 97.743_699_5).abs() < 1e-9);
}

#[tokio::test]
async fn query_is_trimmed_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("q", "Dallas"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{ "lat": "32.78", "lon": "-96.80" }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let coordinate = client.resolve("  Dallas \n").await.expect("should geocode");
    assert!((coordinate.latitude - 32.78).abs() < 1e-9);
}

#[tokio::test]
async fn empty_results_return_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.search("Atlantis").await.unwrap_err();

    assert!(
        matches!(err, GeocodeError::NotFound { ref query } if query == "Atlantis"),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn blank_query_never_hits_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.search("   ").await.unwrap_err();
    assert!(matches!(err, GeocodeError::NotFound { .. }));
}

#[tokio::test]
async fn server_error_returns_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.search("Austin").await.unwrap_err();

    assert!(
        matches!(err, GeocodeError::Unavailable(ref msg) if msg.contains("503")),
        "expected Unavailable with status, got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_body_returns_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.search("Austin").await.unwrap_err();
    assert!(matches!(err, GeocodeError::Unavailable(_)), "got: {err:?}");
}

#[tokio::test]
async fn unparseable_coordinates_return_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{ "lat": "", "lon": "-97.7" }])),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.search("Austin").await.unwrap_err();
    assert!(matches!(err, GeocodeError::Unavailable(_)), "got: {err:?}");
}

#[tokio::test]
async fn unreachable_service_returns_unavailable() {
    let server = MockServer::start().await;
    let uri = format!("{}/search", server.uri());
    drop(server);

    let client = GeocoderClient::new(&uri, "us", 2, "tourneymap-test/0.1")
        .expect("client construction should not fail");
    let err = client.search("Austin").await.unwrap_err();
    assert!(matches!(err, GeocodeError::Unavailable(_)), "got: {err:?}");
}
