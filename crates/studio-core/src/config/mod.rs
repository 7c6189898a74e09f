//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::ServerConfig;
pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;
use crate::result::AppResult;

/// Prefix for environment variable overrides, e.g. `STUDIO__AUTH__SESSION_SECRET`.
pub const ENV_PREFIX: &str = "STUDIO";

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// (base file + environment overlay + `STUDIO__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Admin authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files and the environment.
    ///
    /// `config_path` is the base file (extension optional). When `env` is
    /// given, `config/<env>.toml` is layered on top if it exists. Variables
    /// prefixed with `STUDIO__` win over both.
    pub fn load(config_path: &str, env: Option<&str>) -> AppResult<Self> {
        Self::load_with_vars(config_path, env, None)
    }

    /// Like [`AppConfig::load`], reading overrides from `vars` instead of the
    /// process environment when given.
    ///
    /// Override values stay strings until deserialization so that numeric
    /// secrets keep every digit; typed fields are converted by serde.
    pub fn load_with_vars(
        config_path: &str,
        env: Option<&str>,
        vars: Option<config::Map<String, String>>,
    ) -> AppResult<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false));

        if let Some(env) = env {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{env}")).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .source(vars),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints that serde defaults cannot express.
    pub fn validate(&self) -> AppResult<()> {
        self.auth.validate()
    }

    /// Returns a copy safe to print: credentials are masked.
    pub fn redacted(&self) -> Self {
        Self {
            auth: self.auth.redacted(),
            ..self.clone()
        }
    }
}
