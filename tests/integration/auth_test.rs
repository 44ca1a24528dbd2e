//! Integration tests for signup, login, logout, and the session guards.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;

use venuehub_api::AppState;
use venuehub_core::config::AppConfig;
use venuehub_database::{MemoryStore, Store};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_signup_short_password_rejected() {
    let app = TestApp::new();

    let response = app.signup("short@example.com", "1234567").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], true);
}

#[tokio::test]
async fn test_signup_creates_account_without_session() {
    let app = TestApp::new();

    let response = app.signup("new@example.com", "password123").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["error"], false);
    assert_eq!(response.body["message"], "user created");
    assert!(response.set_cookie.is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    let app = TestApp::new();
    app.signup("dup@example.com", "password123").await;

    let response = app.signup("Dup@Example.com", "password123").await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let app = TestApp::new();
    app.signup("login@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/v1/login",
            Some(json!({ "email": "login@example.com", "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "logged in as Test User");
    let cookie = response.set_cookie.expect("Set-Cookie header");
    assert!(cookie.starts_with("user_jwt="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = TestApp::new();
    app.signup("known@example.com", "password123").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/v1/login",
            Some(json!({ "email": "known@example.com", "password": "wrongpass" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/api/v1/login",
            Some(json!({ "email": "ghost@example.com", "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["message"], unknown_email.body["message"]);
    assert!(wrong_password.set_cookie.is_none());
}

#[tokio::test]
async fn test_no_auth_routes_reject_valid_session() {
    let app = TestApp::new();
    let cookie = app.standard_session("twice@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/v1/login",
            Some(json!({ "email": "twice@example.com", "password": "password123" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request(
        "POST",
        "/api/v1/signup",
        Some(json!({
            "firstName": "Again",
            "lastName": "User",
            "email": "again@example.com",
            "password": "password123",
        })),
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_no_auth_routes_ignore_invalid_token() {
    let app = TestApp::new();
    app.signup("stale@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/v1/login",
            Some(json!({ "email": "stale@example.com", "password": "password123" })),
            Some("user_jwt=not.a.token"),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_protected_route_requires_valid_cookie() {
    let app = TestApp::new();
    let body = json!({ "title": "Nope", "type": "cafe" });

    let missing = app
        .request("POST", "/api/v1/venues", Some(body.clone()), None)
        .await;
    let garbage = app
        .request("POST", "/api/v1/venues", Some(body), Some("user_jwt=garbage"))
        .await;

    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.body["error"], true);
}

#[tokio::test]
async fn test_protected_route_rejects_expired_and_orphaned_tokens() {
    let app = TestApp::new();
    let cookie = app.standard_session("stale@example.com").await;
    let created = app
        .request(
            "POST",
            "/api/v1/venues",
            Some(json!({ "title": "Mine", "type": "bar" })),
            Some(&cookie),
        )
        .await;
    let owner_id = created.body["data"]["owner_id"].as_i64().expect("owner id");

    let expired = app.cookie_for(owner_id, Utc::now() - Duration::days(15));
    let orphaned = app.cookie_for(owner_id + 1000, Utc::now());
    let body = json!({ "title": "Nope", "type": "cafe" });

    for cookie in [expired.as_str(), orphaned.as_str()] {
        let response = app
            .request("POST", "/api/v1/venues", Some(body.clone()), Some(cookie))
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["message"], "unauthorized");
    }

    let login = app
        .request(
            "POST",
            "/api/v1/login",
            Some(json!({ "email": "stale@example.com", "password": "password123" })),
            Some(&expired),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
}

#[test]
fn test_state_rejects_out_of_range_lifetimes() {
    let mut config = AppConfig::default();
    config.auth.token_ttl_days = 1_000_000_000;
    assert!(AppState::new(config, Store::memory(MemoryStore::new())).is_err());

    let mut config = AppConfig::default();
    config.auth.cookie_max_age_days = 0;
    assert!(AppState::new(config, Store::memory(MemoryStore::new())).is_err());
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new();
    let cookie = app.standard_session("bye@example.com").await;

    let response = app
        .request("POST", "/api/v1/logout", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let cleared = response.set_cookie.expect("Set-Cookie header");
    assert!(cleared.starts_with("user_jwt=;"));
    assert!(cleared.contains("Max-Age=-1"));

    let anonymous = app.request("POST", "/api/v1/logout", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .raw_request("POST", "/api/v1/signup", "{not json".to_string(), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], true);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/v1/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}
