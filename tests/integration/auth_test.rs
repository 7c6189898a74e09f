//! Integration tests for admin login, logout, and session status.

use http::StatusCode;
use serde_json::json;

use studio_auth::{SessionSecret, issue_token};
use studio_core::traits::ManualClock;

use crate::helpers::{self, ADMIN_PASSWORD, T0, TTL, TestApp};

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["admin_login_enabled"], true);
}

#[tokio::test]
async fn test_login_success_sets_cookie() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/admin/login",
            Some(json!({ "password": ADMIN_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["expires_at"], T0 + TTL as i64);

    let set_cookie = response.set_cookie().expect("Set-Cookie missing");
    assert!(set_cookie.starts_with(&format!("{}=", app.config.auth.cookie_name)));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(set_cookie.contains("Path=/"));
    assert!(set_cookie.contains("Max-Age=3600"));
    assert!(!set_cookie.contains("Secure"));
}

#[tokio::test]
async fn test_login_secure_cookie_when_configured() {
    let mut config = helpers::test_config();
    config.auth.cookie_secure = true;
    let app = TestApp::with_config(config);

    let response = app
        .request(
            "POST",
            "/api/admin/login",
            Some(json!({ "password": ADMIN_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.set_cookie().expect("Set-Cookie").contains("Secure"));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/admin/login",
            Some(json!({ "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert!(response.set_cookie().is_none());
}

#[tokio::test]
async fn test_login_malformed_body_uses_error_envelope() {
    let app = TestApp::new();

    let bodies = [
        Some(json!({ "passphrase": ADMIN_PASSWORD })),
        Some(json!("not an object")),
        None,
    ];

    for body in bodies {
        let response = app.request("POST", "/api/admin/login", body, None).await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
        assert!(response.body["message"].is_string());
        assert!(response.set_cookie().is_none());
    }
}

#[tokio::test]
async fn test_login_disabled_without_secret() {
    let mut config = helpers::test_config();
    config.auth.session_secret = String::new();
    let app = TestApp::with_config(config);

    let response = app
        .request(
            "POST",
            "/api/admin/login",
            Some(json!({ "password": ADMIN_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.set_cookie().is_none());
}

#[tokio::test]
async fn test_login_disabled_without_password_hash() {
    let mut config = helpers::test_config();
    config.auth.admin_password_hash = String::new();
    let app = TestApp::with_config(config);

    let response = app
        .request(
            "POST",
            "/api/admin/login",
            Some(json!({ "password": "" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_session_with_valid_cookie() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let response = app
        .request("GET", "/api/admin/session", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["authenticated"], true);
    assert_eq!(response.body["data"]["expires_at"], T0 + TTL as i64);
}

#[tokio::test]
async fn test_session_without_cookie() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/admin/session", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_with_garbage_cookie() {
    let app = TestApp::new();

    for cookie in [
        "admin_session=",
        "admin_session=garbage-no-dot",
        "admin_session=a.b",
        "admin_session=....",
    ] {
        let response = app
            .request("GET", "/api/admin/session", None, Some(cookie))
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "cookie {cookie}");
    }
}

#[tokio::test]
async fn test_session_expires() {
    let app = TestApp::new();
    let cookie = app.login().await;

    app.clock.advance(TTL as i64 - 1);
    let response = app
        .request("GET", "/api/admin/session", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    app.clock.advance(2);
    let response = app
        .request("GET", "/api/admin/session", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_from_other_secret_rejected() {
    let app = TestApp::new();
    let forged = issue_token(
        &SessionSecret::from("not-the-server-secret"),
        TTL,
        std::sync::Arc::new(ManualClock::new(T0)),
    )
    .expect("issue");

    let response = app
        .request(
            "GET",
            "/api/admin/session",
            None,
            Some(&format!("admin_session={forged}")),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_secret_rotation_invalidates_sessions() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let mut rotated = helpers::test_config();
    rotated.auth.session_secret = "rotated-secret".to_string();
    let rotated_app = TestApp::with_config(rotated);

    let response = rotated_app
        .request("GET", "/api/admin/session", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let response = app
        .request("POST", "/api/admin/logout", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let set_cookie = response.set_cookie().expect("Set-Cookie missing");
    assert!(set_cookie.starts_with("admin_session=;"));
    assert!(set_cookie.contains("Max-Age=0"));
}
