//! # studio-core
//!
//! Core crate for the studio admin gate. Contains configuration schemas,
//! the injectable wall clock, and the unified error system.
//!
//! This crate has **no** internal dependencies on other studio crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
