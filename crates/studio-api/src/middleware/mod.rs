//! Axum middleware stack.

pub mod admin_guard;
pub mod logging;
