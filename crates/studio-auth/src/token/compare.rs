//! Constant-time byte comparison.

/// Compares two byte slices without short-circuiting on the first
/// difference.
///
/// Lengths are compared first; lengths are public (every HMAC-SHA256 tag is
/// 32 bytes). For equal lengths every byte pair is XOR-ed into a single
/// accumulator and only the final value is inspected, so the running time
/// does not depend on how many leading bytes match.
#[inline(never)]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }

    std::hint::black_box(diff) == 0
}
