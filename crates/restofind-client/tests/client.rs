//! Integration tests for `RestaurantClient` using wiremock HTTP mocks.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use restofind_client::{ClientError, FetchLifecycle, FetchState, RestaurantClient};

fn test_client(base_url: &str) -> RestaurantClient {
    RestaurantClient::with_base_url(base_url, 5, "restofind-test/0.1")
        .expect("client construction should not fail")
}

#[tokio::test]
async fn search_by_location_returns_records() {
    let server = MockServer::start().await;

    let body = json!([
        {
            "restaurant": {
                "name": "Cafe X",
                "featured_image": "https://img.example.com/cafe-x.jpg",
                "location": { "address": "100 Feet Road, Indiranagar" },
                "user_rating": { "aggregate_rating": 4.2 }
            }
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/location"))
        .and(query_param("lat", "12.9716"))
        .and(query_param("lng", "77.5946"))
        .and(query_param("radius", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client
        .search_by_location("12.9716", "77.5946", "5")
        .await
        .expect("should parse location results");

    assert_eq!(results.len(), 1);
    let r = &results[0].restaurant;
    assert_eq!(r.name(), "Cafe X");
    assert_eq!(r.address(), Some("100 Feet Road, Indiranagar"));
    assert_eq!(r.rating().map(ToString::to_string).as_deref(), Some("4.2"));
}

#[tokio::test]
async fn search_by_location_empty_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/location"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client
        .search_by_location("0", "0", "1")
        .await
        .expect("empty array should parse");
    assert!(results.is_empty());
}

#[tokio::test]
async fn get_restaurant_returns_detail() {
    let server = MockServer::start().await;

    let body = json!({
        "name": "Cafe X",
        "featured_image": null,
        "location": { "locality": "Indiranagar", "address": "100 Feet Road" },
        "cuisines": "Cafe",
        "average_cost_for_two": 700,
        "user_rating": { "aggregate_rating": "4.2" }
    });

    Mock::given(method("GET"))
        .and(path("/api/restaurants/18382360"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let r = client
        .get_restaurant("18382360")
        .await
        .expect("should parse restaurant");

    assert_eq!(r.name(), "Cafe X");
    assert_eq!(r.locality(), Some("Indiranagar"));
    assert!(r.featured_image().is_none());
    assert!(r.phone_numbers().is_none());
}

#[tokio::test]
async fn get_restaurant_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/restaurants/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_restaurant("missing").await.unwrap_err();
    assert!(
        matches!(err, ClientError::NotFound { ref url } if url.ends_with("/api/restaurants/missing")),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/restaurants/42"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.get_restaurant("42").await.unwrap_err();
    assert!(
        matches!(err, ClientError::Status { status: 503, .. }),
        "expected Status(503), got: {err:?}"
    );
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/location"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.search_by_location("1", "2", "3").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn malformed_body_maps_to_deserialize() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/location"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.search_by_location("1", "2", "3").await.unwrap_err();
    assert!(
        matches!(err, ClientError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn search_restaurants_without_query_sends_no_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/restaurants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Cafe X" },
            { "id": 2, "name": "Dosa Point" }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let list = client.search_restaurants(None).await.expect("should parse list");
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].name(), "Dosa Point");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn search_restaurants_forwards_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/restaurants"))
        .and(query_param("query", "masala dosa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "7", "name": "Dosa Point" }
        ])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let list = client
        .search_restaurants(Some("masala dosa"))
        .await
        .expect("should parse list");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id().as_deref(), Some("7"));
}

#[tokio::test]
async fn lifecycle_records_error_for_failed_detail_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/restaurants/42"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut lifecycle = FetchLifecycle::new();
    let applied = lifecycle
        .run("42".to_string(), |id| async move { client.get_restaurant(&id).await })
        .await;

    assert!(applied);
    assert!(
        matches!(lifecycle.state(), FetchState::Error(msg) if msg.contains("500")),
        "expected error state, got: {:?}",
        lifecycle.state()
    );
}
