//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use tower::ServiceExt;

use venuehub_api::{AppState, build_router};
use venuehub_auth::jwt::JwtEncoder;
use venuehub_core::config::{AppConfig, Argon2Config, BootstrapAdminConfig};
use venuehub_core::types::AccountId;
use venuehub_database::{MemoryStore, Store};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Wired state, for setup that has no HTTP route
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.store.provider = "memory".to_string();
        config.auth.argon2 = Argon2Config {
            memory_kib: 256,
            iterations: 1,
            parallelism: 1,
        };

        let store = Store::memory(MemoryStore::new());
        let state = AppState::new(config, store).expect("Failed to build state");
        let router = build_router(state.clone());

        Self { router, state }
    }

    /// Sign up a standard account with a fixed name
    pub async fn signup(&self, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/v1/signup",
            Some(json!({
                "firstName": "Test",
                "lastName": "User",
                "email": email,
                "password": password,
            })),
            None,
        )
        .await
    }

    /// Log in and return the `Cookie` header value for the session
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/login",
                Some(json!({ "email": email, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .set_cookie
            .as_deref()
            .and_then(|c| c.split(';').next())
            .expect("No session cookie in login response")
            .to_string()
    }

    /// Sign up and log in a standard account
    pub async fn standard_session(&self, email: &str) -> String {
        let response = self.signup(email, "password123").await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        self.login(email, "password123").await
    }

    /// Bootstrap an elevated account and log it in
    pub async fn elevated_session(&self, email: &str) -> String {
        self.state
            .accounts
            .ensure_bootstrap_admin(&BootstrapAdminConfig {
                email: email.to_string(),
                password: "adminpassword".to_string(),
                first_name: "Site".to_string(),
                last_name: "Admin".to_string(),
            })
            .await
            .expect("Failed to bootstrap admin");
        self.login(email, "adminpassword").await
    }

    /// Session cookie for `account_id` signed with the app's secret at `issued_at`
    pub fn cookie_for(&self, account_id: i64, issued_at: DateTime<Utc>) -> String {
        let issued = JwtEncoder::new(&self.state.config.auth)
            .issue(AccountId::new(account_id), issued_at)
            .expect("Failed to issue token");
        format!("user_jwt={}", issued.token)
    }

    /// Create a venue and return its id
    pub async fn create_venue(&self, cookie: &str, title: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/v1/venues",
                Some(json!({
                    "title": title,
                    "type": "restaurant",
                    "description": "Home cooking",
                    "address": "1 Sahaidachnoho St",
                    "phone": "+380441112233",
                })),
                Some(cookie),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"].as_i64().expect("venue id")
    }

    /// Create a catalog and return its id
    pub async fn create_catalog(&self, cookie: &str, venue_id: i64, title: &str) -> i64 {
        let response = self
            .request(
                "POST",
                &format!("/api/v1/venues/{venue_id}/catalogs"),
                Some(json!({ "title": title })),
                Some(cookie),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"].as_i64().expect("catalog id")
    }

    /// Create an item and return its id
    pub async fn create_item(
        &self,
        cookie: &str,
        venue_id: i64,
        catalog_id: i64,
        title: &str,
    ) -> i64 {
        let response = self
            .request(
                "POST",
                &format!("/api/v1/venues/{venue_id}/catalogs/{catalog_id}/items"),
                Some(json!({ "title": title, "price_uah": 120 })),
                Some(cookie),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"].as_i64().expect("item id")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str, cookie).await
    }

    /// Make an HTTP request with a raw body
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        body: String,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            set_cookie,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// Raw `Set-Cookie` header, if any
    pub set_cookie: Option<String>,
}
