//! URL-safe base64 for token segments.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// `-`/`_` alphabet, no padding on encode, padding tolerated on decode.
const SEGMENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes raw bytes as a cookie-safe segment.
pub fn encode_segment(bytes: &[u8]) -> String {
    SEGMENT.encode(bytes)
}

/// Decodes a segment, returning `None` for anything that is not valid
/// URL-safe base64.
pub fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    SEGMENT.decode(segment).ok()
}
