//! Integration tests for the admin page guard.

use http::StatusCode;

use crate::helpers::{TTL, TestApp};

#[tokio::test]
async fn test_admin_page_redirects_without_cookie() {
    let app = TestApp::new();

    let response = app.request("GET", "/admin", None, None).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/admin/login"));
}

#[tokio::test]
async fn test_nested_admin_page_redirects_without_cookie() {
    let app = TestApp::new();

    let response = app.request("GET", "/admin/packages/edit", None, None).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/admin/login"));
}

#[tokio::test]
async fn test_login_page_is_open() {
    let app = TestApp::new();

    let response = app.request("GET", "/admin/login", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_page_with_valid_cookie() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let response = app.request("GET", "/admin", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/admin/portfolio", None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_page_redirects_after_expiry() {
    let app = TestApp::new();
    let cookie = app.login().await;

    app.clock.advance(TTL as i64);

    let response = app.request("GET", "/admin", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_custom_login_path() {
    let mut config = crate::helpers::test_config();
    config.auth.login_path = "/he/admin/login".to_string();
    let app = TestApp::with_config(config);

    let response = app.request("GET", "/admin", None, None).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/he/admin/login"));

    let response = app.request("GET", "/he/admin/login", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_path_under_admin_is_open() {
    let mut config = crate::helpers::test_config();
    config.auth.login_path = "/admin/signin".to_string();
    let app = TestApp::with_config(config);

    let response = app.request("GET", "/admin", None, None).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/admin/signin"));

    let response = app.request("GET", "/admin/signin", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.location(), None);

    // The default path is just another guarded page now.
    let response = app.request("GET", "/admin/login", None, None).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/admin/signin"));
}

#[test]
fn test_login_path_on_guarded_root_rejected() {
    let mut config = crate::helpers::test_config();
    config.auth.login_path = "/admin".to_string();

    let clock = studio_core::traits::ManualClock::new(crate::helpers::T0);
    let result = studio_api::AppState::with_clock(config, std::sync::Arc::new(clock));

    assert!(result.is_err());
}
