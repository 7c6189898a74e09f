//! Shared test helpers for integration tests.

use std::sync::{Arc, LazyLock};

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use studio_api::AppState;
use studio_auth::hash_password;
use studio_core::config::AppConfig;
use studio_core::traits::ManualClock;

/// Fixed start instant for every test clock.
pub const T0: i64 = 1_700_000_000;

/// Admin password accepted by [`TestApp::new`].
pub const ADMIN_PASSWORD: &str = "shalom-studio-2024";

/// Session lifetime used by test apps.
pub const TTL: u64 = 3600;

// Argon2 is slow in debug builds; hash once per test binary.
static ADMIN_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password(ADMIN_PASSWORD).expect("hash admin password"));

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Clock shared with the issuer and verifier
    pub clock: ManualClock,
    /// Application config
    pub config: AppConfig,
}

/// Captured response
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body (`Null` for non-JSON bodies)
    pub body: Value,
}

impl TestResponse {
    /// The `Set-Cookie` header value, if any.
    pub fn set_cookie(&self) -> Option<&str> {
        self.headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
    }

    /// The `Location` header value, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

/// Base configuration with login fully enabled.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.session_secret = "test-secret".to_string();
    config.auth.session_ttl_seconds = TTL;
    config.auth.cookie_secure = false;
    config.auth.admin_password_hash = ADMIN_HASH.clone();
    config
}

impl TestApp {
    /// Create a new test application with login enabled
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application from an explicit config
    pub fn with_config(config: AppConfig) -> Self {
        let clock = ManualClock::new(T0);
        let state = AppState::with_clock(config.clone(), Arc::new(clock.clone()))
            .expect("Failed to build app state");

        Self {
            router: studio_api::build_router(state),
            clock,
            config,
        }
    }

    /// Send a request, optionally with a JSON body and a raw `Cookie` header.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        cookie: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Log in with the admin password and return a `Cookie` header value.
    pub async fn login(&self) -> String {
        let response = self
            .request(
                "POST",
                "/api/admin/login",
                Some(serde_json::json!({ "password": ADMIN_PASSWORD })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::OK, "login failed");
        cookie_pair(response.set_cookie().expect("Set-Cookie missing"))
    }
}

/// Reduces a `Set-Cookie` value to the `name=value` pair a browser sends back.
pub fn cookie_pair(set_cookie: &str) -> String {
    set_cookie
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
