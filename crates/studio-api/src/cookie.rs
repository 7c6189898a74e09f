//! Admin session cookie construction.
//!
//! The token layer knows nothing about cookies; attributes are decided here.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use studio_core::config::AuthConfig;

/// Builds the `HttpOnly` cookie that carries a freshly issued token.
pub fn session_cookie(config: &AuthConfig, token: String, ttl_seconds: i64) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(ttl_seconds))
        .build()
}

/// Builds a cookie that clears the session cookie in the browser.
pub fn removal_cookie(config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), ""))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::ZERO)
        .build()
}

/// Reads the session token from the request cookies, if present.
pub fn session_token<'a>(jar: &'a CookieJar, config: &AuthConfig) -> Option<&'a str> {
    jar.get(&config.cookie_name).map(|c| c.value())
}
