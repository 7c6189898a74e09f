//! HMAC-SHA256 over the payload string.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use studio_core::error::AppError;
use studio_core::result::AppResult;

use super::secret::SessionSecret;

type HmacSha256 = Hmac<Sha256>;

/// Computes the raw MAC of `payload` keyed with `secret`.
///
/// The MAC covers the unencoded payload, not its base64 form. HMAC accepts
/// keys of any length, so the error arm only fires if the primitive itself
/// is broken; it is surfaced rather than treated as a mismatch.
pub fn sign(secret: &SessionSecret, payload: &str) -> AppResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AppError::internal(format!("Failed to initialise HMAC: {e}")))?;
    mac.update(payload.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}
