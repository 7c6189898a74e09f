//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use studio_auth::{AdminPassword, SessionIssuer, SessionSecret, SessionVerifier};
use studio_core::config::AppConfig;
use studio_core::result::AppResult;
use studio_core::traits::{Clock, SystemClock};

/// Shared state injected into every handler via Axum's `State` extractor.
///
/// Everything here is immutable after startup; cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Mints admin session tokens at login.
    pub issuer: Arc<SessionIssuer>,
    /// Checks admin session tokens on protected routes.
    pub verifier: Arc<SessionVerifier>,
    /// The admin credential checked at login.
    pub admin_password: Arc<AdminPassword>,
}

impl AppState {
    /// Builds state from configuration using the system clock.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Builds state from configuration with an explicit time source.
    pub fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        config.validate()?;

        let secret = SessionSecret::from(config.auth.session_secret.as_str());
        if !secret.is_configured() {
            tracing::warn!(
                "auth.session_secret is empty; admin login is disabled and every session is rejected"
            );
        }

        let admin_password = AdminPassword::from_hash(&config.auth.admin_password_hash)?;
        if !admin_password.is_configured() {
            tracing::warn!("auth.admin_password_hash is empty; admin login is disabled");
        }

        let issuer = SessionIssuer::new(secret.clone())
            .with_ttl_seconds(config.auth.session_ttl_seconds)
            .with_clock(Arc::clone(&clock));
        let verifier = SessionVerifier::new(secret).with_clock(clock);

        Ok(Self {
            config: Arc::new(config),
            issuer: Arc::new(issuer),
            verifier: Arc::new(verifier),
            admin_password: Arc::new(admin_password),
        })
    }

    /// Whether both a signing secret and an admin password are configured.
    pub fn login_enabled(&self) -> bool {
        self.issuer.is_enabled() && self.admin_password.is_configured()
    }
}
