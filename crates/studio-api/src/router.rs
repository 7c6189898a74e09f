//! Route definitions.
//!
//! JSON endpoints are mounted under `/api`. Admin pages live under `/admin`
//! behind the redirecting guard; the configured login path stays open.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(admin_api_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(admin_page_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Admin auth endpoints: login, logout, session status
fn admin_api_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(handlers::auth::login))
        .route("/admin/logout", post(handlers::auth::logout))
        .route("/admin/session", get(handlers::auth::session))
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Admin pages guarded by session cookie, plus the open login page
///
/// The login page is mounted at `auth.login_path`, the same place the guard
/// redirects to. A static route outranks the `/admin/{*rest}` wildcard, so a
/// login path under `/admin/` is never guarded.
fn admin_page_routes(state: AppState) -> Router<AppState> {
    let login_path = state.config.auth.login_path.clone();

    let guarded = Router::new()
        .route("/admin", get(handlers::pages::dashboard))
        .route("/admin/{*rest}", get(handlers::pages::dashboard))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::admin_guard::require_admin,
        ));

    let open = Router::new().route(&login_path, get(handlers::pages::login_page));

    guarded.merge(open)
}
