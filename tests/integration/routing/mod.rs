//! Routing, auth gate and CORS tests that never reach the database

use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use recipebox_auth::{issue_token, TokenSecret};
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::offline();
    let response = app.request(Method::GET, "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "OK");
}

#[tokio::test]
async fn test_protected_routes_reject_missing_token() {
    let app = TestApp::offline();
    let routes = [
        (Method::POST, "/v1/recipes"),
        (Method::PUT, "/v1/recipes/1"),
        (Method::DELETE, "/v1/recipes/1"),
        (Method::POST, "/v1/ingredients"),
        (Method::DELETE, "/v1/ingredients/1"),
        (Method::GET, "/v1/meal-plans"),
        (Method::POST, "/v1/meal-plans"),
        (Method::DELETE, "/v1/meal-plans/1"),
    ];

    for (method, uri) in routes {
        let response = app.request(method.clone(), uri, None, Some(json!({}))).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        assert_eq!(response.body["error"]["code"], "MISSING_TOKEN");
    }
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::offline();
    let other = TokenSecret::new("some-other-secret").unwrap();
    let token = issue_token(1, "cook@example.com", &other, Utc::now());

    let response = app
        .request(Method::GET, "/v1/meal-plans", Some(token.as_str()), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    let app = TestApp::offline();
    let secret = TokenSecret::new(&app.config.jwt_secret).unwrap();
    let issued_long_ago = Utc::now() - Duration::days(8);
    let token = issue_token(1, "cook@example.com", &secret, issued_long_ago);

    let response = app
        .request(Method::GET, "/v1/meal-plans", Some(token.as_str()), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_auth_endpoint_validates_before_lookup() {
    let app = TestApp::offline();

    let response = app
        .request(
            Method::POST,
            "/v1/auth",
            None,
            Some(json!({
                "action": "register",
                "email": "not-an-email",
                "password": "pw",
                "name": "Ann"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");

    let response = app
        .request(
            Method::POST,
            "/v1/auth",
            None,
            Some(json!({"action": "verify", "token": "a.b.c"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::offline();
    let response = app.request(Method::GET, "/v1/unknown", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
