//! Admin page entry points.
//!
//! Page rendering lives in the frontend; these routes only exist so the
//! guard has something to protect and the login redirect has a target.

use axum::response::Html;

/// GET `auth.login_path` (default `/admin/login`)
pub async fn login_page() -> Html<&'static str> {
    Html("<!doctype html><title>Admin login</title><div id=\"admin-login\"></div>")
}

/// GET /admin, /admin/{*rest}
pub async fn dashboard() -> Html<&'static str> {
    Html("<!doctype html><title>Admin</title><div id=\"admin-root\"></div>")
}
