//! Admin authentication configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Admin session and credential configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for signing admin session tokens (HMAC-SHA256).
    ///
    /// Empty means admin authentication is disabled: every token is rejected.
    #[serde(default)]
    pub session_secret: String,
    /// Admin session lifetime in seconds.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_seconds: u64,
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the session cookie carries the `Secure` attribute.
    #[serde(default = "default_true")]
    pub cookie_secure: bool,
    /// Where unauthenticated visitors of admin pages are redirected.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Argon2id PHC string of the admin password. Empty disables login.
    #[serde(default)]
    pub admin_password_hash: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: String::new(),
            session_ttl_seconds: default_session_ttl(),
            cookie_name: default_cookie_name(),
            cookie_secure: default_true(),
            login_path: default_login_path(),
            admin_password_hash: String::new(),
        }
    }
}

impl AuthConfig {
    /// Validates field constraints.
    pub fn validate(&self) -> AppResult<()> {
        if self.session_ttl_seconds == 0 {
            return Err(AppError::configuration(
                "auth.session_ttl_seconds must be greater than zero",
            ));
        }

        if i64::try_from(self.session_ttl_seconds).is_err() {
            return Err(AppError::configuration(
                "auth.session_ttl_seconds is out of range",
            ));
        }

        if self.cookie_name.is_empty() || !self.cookie_name.chars().all(is_cookie_name_char) {
            return Err(AppError::configuration(format!(
                "auth.cookie_name '{}' is not a valid cookie name",
                self.cookie_name
            )));
        }

        if !self.login_path.starts_with('/') {
            return Err(AppError::configuration(
                "auth.login_path must be an absolute path",
            ));
        }

        // Mounted as a literal route, next to the guarded `/admin` page and
        // the JSON API.
        if self.login_path.contains(['{', '}', '*', '?', '#'])
            || self.login_path.trim_end_matches('/') == "/admin"
            || self.login_path == "/api"
            || self.login_path.starts_with("/api/")
        {
            return Err(AppError::configuration(format!(
                "auth.login_path '{}' collides with a guarded or API route",
                self.login_path
            )));
        }

        Ok(())
    }

    /// Whether a signing secret is configured.
    pub fn is_session_secret_set(&self) -> bool {
        !self.session_secret.is_empty()
    }

    /// Returns a copy with credentials masked.
    pub fn redacted(&self) -> Self {
        Self {
            session_secret: mask(&self.session_secret),
            admin_password_hash: mask(&self.admin_password_hash),
            ..self.clone()
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.redacted();
        f.debug_struct("AuthConfig")
            .field("session_secret", &shown.session_secret)
            .field("session_ttl_seconds", &shown.session_ttl_seconds)
            .field("cookie_name", &shown.cookie_name)
            .field("cookie_secure", &shown.cookie_secure)
            .field("login_path", &shown.login_path)
            .field("admin_password_hash", &shown.admin_password_hash)
            .finish()
    }
}

fn mask(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        "****".to_string()
    }
}

// RFC 6265 token characters.
fn is_cookie_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c)
}

fn default_session_ttl() -> u64 {
    7 * 24 * 60 * 60
}

fn default_cookie_name() -> String {
    "admin_session".to_string()
}

fn default_true() -> bool {
    true
}

fn default_login_path() -> String {
    "/admin/login".to_string()
}
