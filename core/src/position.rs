//! Conversion between CDF values and positions in the sorted table.
//!
//! Building the index and guessing a position must agree on rounding, otherwise
//! the error bound measured at build time does not cover the guesses made at
//! lookup time. Both go through [`position`].

/// Scale a CDF value to a zero-based rank in a dataset of `len` keys.
#[inline]
pub fn scale(cdf: f64, len: usize) -> f64 {
    cdf * len as f64 - 1.0
}

/// Round a scaled CDF value to a signed position. Ties round away from zero;
/// out-of-range values saturate and NaN maps to `0`.
#[inline]
pub fn position(cdf: f64, len: usize) -> i64 {
    scale(cdf, len).round() as i64
}

/// Clamp a signed position into `[0, len - 1]`.
#[inline]
pub(crate) fn clamp(position: i64, len: usize) -> usize {
    let last = len.saturating_sub(1);
    if position <= 0 {
        0
    } else {
        (position as u64).min(last as u64) as usize
    }
}
