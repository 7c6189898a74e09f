//! `AdminSession` extractor: pulls the session cookie and verifies it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use studio_core::error::AppError;

use crate::cookie::session_token;
use crate::error::ApiError;
use crate::state::AppState;

/// Proof that the request carries a valid admin session.
///
/// Admin API handlers take this as an argument; a missing, forged, or
/// expired cookie rejects the request with `401` before the handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminSession {
    /// Expiry of the presented token (Unix seconds).
    pub expires_at: i64,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(&jar, &state.config.auth);

        match state.verifier.verified_expiry(token)? {
            Some(expires_at) => Ok(AdminSession { expires_at }),
            None => Err(AppError::authentication("Invalid or expired admin session").into()),
        }
    }
}
