//! Token payload: the `exp=<unix seconds>` string.

use std::sync::LazyLock;

use regex::Regex;

static EXPIRY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII digits only; `\d` would also accept other Unicode digit classes.
    Regex::new(r"exp=([0-9]+)").unwrap_or_else(|e| panic!("invalid expiry pattern: {e}"))
});

/// Serializes an expiry timestamp into the signed payload string.
pub fn format_payload(expires_at: i64) -> String {
    format!("exp={expires_at}")
}

/// Extracts the expiry from a payload string.
///
/// Returns `None` when no `exp=<digits>` field is present or the digits do
/// not fit in an `i64`.
pub fn parse_expiry(payload: &str) -> Option<i64> {
    EXPIRY_PATTERN
        .captures(payload)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<i64>().ok())
}
