//! Signed admin session tokens.
//!
//! Wire format: `<b64url(payload)>.<b64url(hmac_sha256(secret, payload))>`
//! where `payload` is the ASCII string `exp=<unix seconds>`. Both segments
//! use the URL-safe base64 alphabet without padding so the token can be
//! stored in a cookie verbatim.

pub mod compare;
pub mod encoding;
pub mod issuer;
pub mod payload;
pub mod secret;
pub mod signature;
pub mod verifier;

pub use issuer::{IssuedToken, SessionIssuer, issue_token};
pub use secret::SessionSecret;
pub use verifier::{SessionVerifier, verify_token};

/// Default session lifetime: seven days.
pub const DEFAULT_TTL_SECONDS: u64 = 7 * 24 * 60 * 60;

/// Separator between the payload and signature segments.
pub const DELIMITER: char = '.';
