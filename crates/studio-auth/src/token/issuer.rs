//! Session token creation.

use std::sync::Arc;

use studio_core::result::AppResult;
use studio_core::traits::{Clock, SystemClock};

use super::encoding::encode_segment;
use super::payload::format_payload;
use super::secret::SessionSecret;
use super::signature::sign;
use super::{DEFAULT_TTL_SECONDS, DELIMITER};

/// A freshly minted token together with its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Cookie-safe token string.
    pub value: String,
    /// Expiry as Unix seconds.
    pub expires_at: i64,
}

/// Mints admin session tokens.
///
/// The issuer does not validate the secret: callers decide whether an
/// unconfigured secret disables login.
#[derive(Clone)]
pub struct SessionIssuer {
    /// HMAC key.
    secret: SessionSecret,
    /// Lifetime added to "now" for every token.
    ttl_seconds: i64,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SessionIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionIssuer")
            .field("secret", &self.secret)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl SessionIssuer {
    /// Creates an issuer with the default seven-day lifetime and the system clock.
    pub fn new(secret: SessionSecret) -> Self {
        Self {
            secret,
            ttl_seconds: ttl_to_i64(DEFAULT_TTL_SECONDS),
            clock: Arc::new(SystemClock),
        }
    }

    /// Overrides the token lifetime.
    pub fn with_ttl_seconds(mut self, ttl_seconds: u64) -> Self {
        self.ttl_seconds = ttl_to_i64(ttl_seconds);
        self
    }

    /// Overrides the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Token lifetime in seconds.
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Whether tokens minted by this issuer can ever be accepted.
    pub fn is_enabled(&self) -> bool {
        self.secret.is_configured()
    }

    /// Mints a token expiring `ttl_seconds` from now.
    ///
    /// Deterministic in (secret, ttl, current second): two calls within the
    /// same second yield byte-identical tokens.
    pub fn issue(&self) -> AppResult<IssuedToken> {
        let expires_at = self
            .clock
            .now_unix_seconds()
            .saturating_add(self.ttl_seconds);
        let payload = format_payload(expires_at);
        let mac = sign(&self.secret, &payload)?;

        let value = format!(
            "{}{}{}",
            encode_segment(payload.as_bytes()),
            DELIMITER,
            encode_segment(&mac)
        );

        tracing::debug!(expires_at, "Issued admin session token");

        Ok(IssuedToken { value, expires_at })
    }
}

/// Mints a token string for `secret` expiring `ttl_seconds` after `clock`'s now.
pub fn issue_token(
    secret: &SessionSecret,
    ttl_seconds: u64,
    clock: Arc<dyn Clock>,
) -> AppResult<String> {
    SessionIssuer::new(secret.clone())
        .with_ttl_seconds(ttl_seconds)
        .with_clock(clock)
        .issue()
        .map(|token| token.value)
}

fn ttl_to_i64(ttl_seconds: u64) -> i64 {
    i64::try_from(ttl_seconds).unwrap_or(i64::MAX)
}
