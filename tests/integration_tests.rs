//! Integration tests for the EcoScan HTTP API

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use ecoscan::api::{AppState, ErrorBody, GeocodeResponse, HealthResponse};
use ecoscan::models::LocationSource;
use ecoscan::{LocationCache, LocationResolver, web};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

fn test_app() -> Router {
    let state = AppState::new(LocationResolver::new(LocationCache::new(16)));
    web::app(state, "static")
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app.oneshot(request).await.expect("request failed");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    (status, body)
}

fn parse<T: DeserializeOwned>(body: &Bytes) -> T {
    serde_json::from_slice(body).expect("response was not the expected JSON")
}

fn geocode_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/geocode")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Known city resolves to its predefined entry
#[tokio::test]
async fn test_geocode_known_city() {
    let request = geocode_request(r#"{"location": "Greater Mumbai Region"}"#);
    let (status, body) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let response: GeocodeResponse = parse(&body);
    assert_eq!(response.location_input, "Greater Mumbai Region");
    assert_eq!(response.resolved_name, "Mumbai, Maharashtra, India");
    assert_eq!(response.source, LocationSource::Predefined);
    assert_eq!(response.coordinates.lat, 19.0760);
    assert_eq!(response.coordinates.lon, 72.8777);
    assert!((0.0..=100.0).contains(&response.scores.ehs));
    assert_eq!(response.temperature.unit, "°C");
    assert!(response.note.contains("demonstration data"));
}

/// Unknown place falls back to reproducible estimated coordinates
#[tokio::test]
async fn test_geocode_unknown_place_is_reproducible() {
    let app = test_app();
    let first_request = geocode_request(r#"{"location": "Zorblaxia"}"#);
    let second_request = geocode_request(r#"{"location": "  Zorblaxia  "}"#);
    let (first_status, first_body) = send(app.clone(), first_request).await;
    let (second_status, second_body) = send(app, second_request).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    let first: GeocodeResponse = parse(&first_body);
    let second: GeocodeResponse = parse(&second_body);

    assert_eq!(first.source, LocationSource::Estimated);
    assert_eq!(first.resolved_name, "Zorblaxia");
    assert_eq!(first.coordinates.lat, 64.5759);
    assert_eq!(first.coordinates.lon, -71.4902);
    assert_eq!(first.coordinates, second.coordinates);
    assert_eq!(first.scores.ehs, second.scores.ehs);
    assert_eq!(
        first.scores.details.population_density,
        second.scores.details.population_density
    );
    assert_eq!(first.descriptions, second.descriptions);
}

/// Scores are identical regardless of case and padding
#[tokio::test]
async fn test_geocode_scores_ignore_case() {
    let (_, lower) = send(test_app(), geocode_request(r#"{"location": "delhi"}"#)).await;
    let (_, upper) = send(test_app(), geocode_request(r#"{"location": " DELHI "}"#)).await;

    let lower: GeocodeResponse = parse(&lower);
    let upper: GeocodeResponse = parse(&upper);
    assert_eq!(lower.scores.ehs, 55.9);
    assert_eq!(lower.scores.ehs, upper.scores.ehs);
    assert_eq!(lower.scores.land, upper.scores.land);
    assert_eq!(lower.scores.details.population_density, "447/km²");
    assert_eq!(lower.temperature, upper.temperature);
}

/// Short locations are rejected with a validation error
#[tokio::test]
async fn test_geocode_rejects_short_location() {
    for body in [r#"{"location": "a"}"#, r#"{"location": "   "}"#, r#"{}"#] {
        let (status, response) = send(test_app(), geocode_request(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        let error: ErrorBody = parse(&response);
        assert!(!error.success);
        assert_eq!(error.error, "Valid location required");
        assert_eq!(error.message, "Enter a city, region, or country name");
    }
}

/// Non-JSON requests are rejected before validation
#[tokio::test]
async fn test_geocode_rejects_non_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/geocode")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("location=delhi"))
        .unwrap();
    let (status, body) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorBody = parse(&body);
    assert_eq!(error.error, "Please send JSON data");

    let (status, _) = send(test_app(), geocode_request("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Health endpoint reports service identity
#[tokio::test]
async fn test_health_check() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(test_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = parse(&body);
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "EcoImpactScanner");
    assert_eq!(health.version, ecoscan::VERSION);
}
