/// Substitute for a zero seed, which would make xorshift emit zeros forever.
pub(super) const ZERO_SEED_FALLBACK: u32 = 0x9E37_79B9;

/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Next draw scaled to `[0, 1)`.
#[inline]
pub(super) fn next_unit(state: &mut u32) -> f64 {
    xorshift32(state) as f64 / (u32::MAX as f64 + 1.0)
}
