//! Session token verification.
//!
//! Every malformed, forged, or expired token is an ordinary negative result.
//! The only error path is a failure of the HMAC primitive itself, which is
//! an environment fault and must not be mistaken for either answer.

use std::sync::Arc;

use studio_core::result::AppResult;
use studio_core::traits::{Clock, SystemClock};

use super::compare::constant_time_eq;
use super::encoding::decode_segment;
use super::payload::parse_expiry;
use super::secret::SessionSecret;
use super::signature::sign;
use super::DELIMITER;

/// Why a token was turned away. Only used for debug logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    SecretUnset,
    Missing,
    Malformed,
    PayloadEncoding,
    SignatureEncoding,
    SignatureMismatch,
    NoExpiry,
    Expired,
}

impl Rejection {
    fn as_str(self) -> &'static str {
        match self {
            Self::SecretUnset => "secret_unset",
            Self::Missing => "missing",
            Self::Malformed => "malformed",
            Self::PayloadEncoding => "payload_encoding",
            Self::SignatureEncoding => "signature_encoding",
            Self::SignatureMismatch => "signature_mismatch",
            Self::NoExpiry => "no_expiry",
            Self::Expired => "expired",
        }
    }
}

/// Checks admin session tokens presented by clients.
#[derive(Clone)]
pub struct SessionVerifier {
    /// HMAC key; must equal the issuer's.
    secret: SessionSecret,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for SessionVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionVerifier")
            .field("secret", &self.secret)
            .finish()
    }
}

impl SessionVerifier {
    /// Creates a verifier reading the system clock.
    pub fn new(secret: SessionSecret) -> Self {
        Self {
            secret,
            clock: Arc::new(SystemClock),
        }
    }

    /// Overrides the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns `Ok(true)` iff `token` is well-formed, carries a valid
    /// signature, and has not expired.
    pub fn verify(&self, token: Option<&str>) -> AppResult<bool> {
        Ok(self.verified_expiry(token)?.is_some())
    }

    /// Like [`verify`](Self::verify) but yields the token's expiry on success.
    pub fn verified_expiry(&self, token: Option<&str>) -> AppResult<Option<i64>> {
        match self.check(token)? {
            Ok(expires_at) => Ok(Some(expires_at)),
            Err(reason) => {
                tracing::debug!(reason = reason.as_str(), "Rejected admin session token");
                Ok(None)
            }
        }
    }

    fn check(&self, token: Option<&str>) -> AppResult<Result<i64, Rejection>> {
        // An unset secret fails closed instead of accepting an empty-key MAC.
        if !self.secret.is_configured() {
            return Ok(Err(Rejection::SecretUnset));
        }

        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => return Ok(Err(Rejection::Missing)),
        };

        let (payload_part, signature_part) = match token.split_once(DELIMITER) {
            Some((p, s)) if !p.is_empty() && !s.is_empty() => (p, s),
            _ => return Ok(Err(Rejection::Malformed)),
        };

        let payload = match decode_segment(payload_part).and_then(|b| String::from_utf8(b).ok()) {
            Some(p) => p,
            None => return Ok(Err(Rejection::PayloadEncoding)),
        };

        let expected = sign(&self.secret, &payload)?;

        let provided = match decode_segment(signature_part) {
            Some(s) => s,
            None => return Ok(Err(Rejection::SignatureEncoding)),
        };

        if !constant_time_eq(&provided, &expected) {
            return Ok(Err(Rejection::SignatureMismatch));
        }

        let expires_at = match parse_expiry(&payload) {
            Some(exp) => exp,
            None => return Ok(Err(Rejection::NoExpiry)),
        };

        if self.clock.now_unix_seconds() < expires_at {
            Ok(Ok(expires_at))
        } else {
            Ok(Err(Rejection::Expired))
        }
    }
}

/// Verifies `token` against `secret` using `clock` for the expiry check.
pub fn verify_token(
    secret: &SessionSecret,
    token: Option<&str>,
    clock: Arc<dyn Clock>,
) -> AppResult<bool> {
    SessionVerifier::new(secret.clone())
        .with_clock(clock)
        .verify(token)
}
