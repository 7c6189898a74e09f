//! # studio-api
//!
//! HTTP layer for the studio admin area built on Axum.
//!
//! Provides the admin login/logout endpoints that mint and clear the signed
//! session cookie, the route guard that protects `/admin` pages, the
//! `AdminSession` extractor for admin API routes, and error mapping.

pub mod cookie;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
