//! Seeded pseudo-random metric synthesis.
//!
//! The same entity id must always map to the same number, across runs,
//! processes, and client/server renderers, so dashboards never flicker
//! between page loads. The hash below is the classic polynomial rolling
//! hash over UTF-16 code units (`h = h * 31 + unit`) with explicit 32-bit
//! signed wraparound; wraparound must stay bit-exact or existing campaigns
//! change their demo numbers. Not a statistical sampler — determinism is
//! the only distribution guarantee.

/// 32-bit polynomial rolling hash of an identifier string.
///
/// `(h << 5) - h` is `h * 31`; both the shift and the adds wrap at 32 bits.
/// Iterates UTF-16 code units so non-ASCII ids hash the same as they do in
/// browser clients.
fn hash_id(id: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in id.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }
    hash
}

/// Deterministic value in `[min, max]` (inclusive) derived from `id`.
///
/// `normalized = |hash| / i32::MAX` lands in [0, 1]; the floor-map into the
/// range is clamped so the exactly-1.0 edge (|hash| == i32::MAX) cannot
/// step one past `max`.
pub fn synthesize_metric(id: &str, min: i64, max: i64) -> i64 {
    if min >= max {
        return min;
    }
    let hash = hash_id(id);
    let normalized = (hash as i64).unsigned_abs() as f64 / i32::MAX as f64;
    let span = (max - min + 1) as f64;
    min + ((normalized * span).floor() as i64).min(max - min)
}
