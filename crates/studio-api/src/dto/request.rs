//! Request DTOs.

use serde::Deserialize;

/// Admin login request.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// The administrator password.
    pub password: String,
}
