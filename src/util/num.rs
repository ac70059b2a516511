/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Converts a sample count to `f64`.
///
/// The conversion is exact for every count up to [`MAX_SAFE_INTEGER`], which no
/// in-memory series can exceed.
///
/// ## Example
/// ```
/// use graphcalc::util::num::usize_to_f64;
///
/// assert_eq!(usize_to_f64(14), 14.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Converts a fractional rank into an index of a slice of length `len`.
///
/// The rank is floored and clamped to `[0, len - 1]`. Negative ranks and NaN
/// map to `0`; ranks at or past the end map to the last index. `len` must be
/// non-zero.
///
/// ## Example
/// ```
/// use graphcalc::util::num::rank_to_index;
///
/// assert_eq!(rank_to_index(3.5, 14), 3);
/// assert_eq!(rank_to_index(14.0, 14), 13);
/// assert_eq!(rank_to_index(-1.0, 14), 0);
/// assert_eq!(rank_to_index(f64::NAN, 14), 0);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn rank_to_index(rank: f64, len: usize) -> usize {
    let last = len.saturating_sub(1);
    if rank.is_nan() || rank <= 0.0 {
        return 0;
    }
    // Float-to-int casts saturate, so very large ranks land on `usize::MAX`.
    (rank.floor() as usize).min(last)
}
