//! # studio-auth
//!
//! Authentication primitives for the studio admin area.
//!
//! ## Modules
//!
//! - `token`: stateless HMAC-SHA256 signed session tokens (issue + verify)
//! - `password`: Argon2id admin password hashing and verification
//!
//! There is exactly one privileged role. A token carries only its expiry:
//! holding a valid signature is the authorization.

pub mod password;
pub mod token;

pub use password::{AdminPassword, hash_password};
pub use token::{
    IssuedToken, SessionIssuer, SessionSecret, SessionVerifier, issue_token, verify_token,
};
