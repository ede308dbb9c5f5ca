use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::header::CONTENT_TYPE;
use tower::ServiceExt;

use super::*;
use crate::config::RateLimitConfig;
use crate::routes::api_routes;
use crate::state::test_helpers;

fn contact_request(body: &serde_json::Value, from: IpAddr) -> Request<Body> {
    let mut request = Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::new(from, 40_000)));
    request
}

fn localhost() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

#[test]
fn contact_error_to_status_maps_validation_to_422() {
    let missing = ContactServiceError::Invalid(eexplo_content::ContactError::MissingField(
        eexplo_content::ContactField::Message,
    ));
    assert_eq!(contact_error_to_status(&missing), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(contact_error_to_status(&ContactServiceError::InvalidEmail), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn contact_error_to_status_maps_storage_to_500() {
    let err = ContactServiceError::Database(sqlx::Error::PoolTimedOut);
    assert_eq!(contact_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn blank_name_is_unprocessable() {
    let app = api_routes(test_helpers::test_app_state());
    let body = serde_json::json!({ "name": "", "email": "jane@example.com", "message": "Hello" });
    let response = app.oneshot(contact_request(&body, localhost())).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_email_is_unprocessable() {
    let app = api_routes(test_helpers::test_app_state());
    let body = serde_json::json!({ "name": "Jane", "email": "jane.example.com", "message": "Hello" });
    let response = app.oneshot(contact_request(&body, localhost())).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_json_field_is_unprocessable() {
    let app = api_routes(test_helpers::test_app_state());
    let body = serde_json::json!({ "name": "Jane", "email": "jane@example.com" });
    let response = app.oneshot(contact_request(&body, localhost())).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn repeated_submissions_are_rate_limited_per_address() {
    let state = test_helpers::test_app_state_with_limit(RateLimitConfig { limit: 1, window: Duration::from_secs(60) });
    let app = api_routes(state);
    let body = serde_json::json!({ "name": "", "email": "", "message": "" });
    let first = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 7));
    let second = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 8));

    let response = app.clone().oneshot(contact_request(&body, first)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app.clone().oneshot(contact_request(&body, first)).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let response = app.oneshot(contact_request(&body, second)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
