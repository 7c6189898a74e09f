//! Route guard for admin pages.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::cookie::session_token;
use crate::error::ApiError;
use crate::state::AppState;

/// Lets requests with a valid admin session through unmodified and
/// redirects everyone else to the login page.
///
/// Browsers navigating to `/admin/...` get a `303 See Other`, never an error
/// body. A failure of the signing primitive surfaces as `500` rather than
/// being treated as either outcome.
pub async fn require_admin(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let token = session_token(&jar, &state.config.auth);

    match state.verifier.verify(token) {
        Ok(true) => next.run(request).await,
        Ok(false) => {
            tracing::debug!(path = %request.uri().path(), "Redirecting unauthenticated admin request");
            Redirect::to(&state.config.auth.login_path).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}
