//! Admin auth handlers: login, logout, session status.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum_extra::extract::cookie::CookieJar;

use studio_core::error::AppError;

use crate::cookie::{removal_cookie, session_cookie};
use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, SessionResponse};
use crate::error::ApiError;
use crate::extractors::AdminSession;
use crate::state::AppState;

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    if !state.login_enabled() {
        return Err(AppError::service_unavailable("Admin login is not configured").into());
    }

    let Json(req) = body?;

    // Argon2 is deliberately slow; keep it off the async workers.
    let password = Arc::clone(&state.admin_password);
    let matched = tokio::task::spawn_blocking(move || password.verify(&req.password))
        .await
        .map_err(|e| AppError::internal(format!("Password check task failed: {e}")))??;

    if !matched {
        tracing::warn!("Admin login failed: wrong password");
        return Err(AppError::authentication("Invalid password").into());
    }

    let token = state.issuer.issue()?;
    let cookie = session_cookie(&state.config.auth, token.value, state.issuer.ttl_seconds());

    tracing::info!(expires_at = token.expires_at, "Admin logged in");

    Ok((
        jar.add(cookie),
        Json(ApiResponse::ok(LoginResponse {
            expires_at: token.expires_at,
        })),
    ))
}

/// POST /api/admin/logout
///
/// Stateless tokens cannot be revoked; this only clears the browser cookie.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    (
        jar.add(removal_cookie(&state.config.auth)),
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out".to_string(),
        })),
    )
}

/// GET /api/admin/session
pub async fn session(session: AdminSession) -> Json<ApiResponse<SessionResponse>> {
    Json(ApiResponse::ok(SessionResponse {
        authenticated: true,
        expires_at: session.expires_at,
    }))
}
