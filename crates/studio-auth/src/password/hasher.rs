//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use studio_core::error::AppError;
use studio_core::result::AppResult;

/// Hashes a plaintext password using Argon2id with a random salt.
///
/// The output is a PHC string suitable for `auth.admin_password_hash`.
pub fn hash_password(password: &str) -> AppResult<String> {
    if password.is_empty() {
        return Err(AppError::validation("Password must not be empty"));
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    Ok(hash.to_string())
}

/// The configured administrator password.
///
/// There is a single admin credential; an empty hash disables login.
#[derive(Clone)]
pub struct AdminPassword {
    /// Stored Argon2id PHC string, validated at construction.
    hash: Option<String>,
}

impl std::fmt::Debug for AdminPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminPassword")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl AdminPassword {
    /// Wraps a PHC hash string. An empty string disables login.
    ///
    /// Returns a configuration error if the string is not a parseable hash.
    pub fn from_hash(hash: &str) -> AppResult<Self> {
        if hash.is_empty() {
            return Ok(Self { hash: None });
        }

        PasswordHash::new(hash).map_err(|e| {
            AppError::configuration(format!("auth.admin_password_hash is not a valid hash: {e}"))
        })?;

        Ok(Self {
            hash: Some(hash.to_string()),
        })
    }

    /// Whether an admin password is configured.
    pub fn is_configured(&self) -> bool {
        self.hash.is_some()
    }

    /// Verifies a candidate password.
    ///
    /// Returns `Ok(true)` on match, `Ok(false)` on mismatch or when no
    /// password is configured.
    pub fn verify(&self, candidate: &str) -> AppResult<bool> {
        let Some(hash) = self.hash.as_deref() else {
            return Ok(false);
        };

        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match Argon2::default().verify_password(candidate.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}
