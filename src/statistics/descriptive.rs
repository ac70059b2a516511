use serde::Serialize;
use tracing::debug;

use crate::{
    error::StatsError,
    statistics::StatsResult,
    util::num::{rank_to_index, usize_to_f64},
};

/// Summary of a numeric series.
///
/// All fields are computed together by [`describe`] from a single sorted copy
/// of the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of samples.
    pub count:   usize,
    /// Sum of all samples.
    pub sum:     f64,
    /// Arithmetic mean.
    pub mean:    f64,
    /// Median; the average of the two central samples for an even count.
    pub median:  f64,
    /// Population standard deviation (divides by `count`, not `count - 1`).
    pub std_dev: f64,
    /// Smallest sample.
    pub min:     f64,
    /// Largest sample.
    pub max:     f64,
    /// First quartile, nearest rank.
    pub q1:      f64,
    /// Third quartile, nearest rank.
    pub q3:      f64,
}

impl Statistics {
    /// Interquartile range, `q3 - q1`.
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Spread between the extremes, `max - min`.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Computes every descriptive statistic of a series in one call.
///
/// The input is never modified; order statistics are read from a sorted
/// copy.
///
/// # Errors
/// `EmptySeries` if `series` is empty.
///
/// # Example
/// ```
/// use graphcalc::describe;
///
/// let stats = describe(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(stats.mean, 2.5);
/// assert_eq!(stats.median, 2.5);
/// assert_eq!(stats.min, 1.0);
/// assert_eq!(stats.max, 4.0);
/// ```
pub fn describe(series: &[f64]) -> StatsResult<Statistics> {
    let sorted = sorted_copy(series)?;

    let sum = sum(series)?;
    let mean = sum / usize_to_f64(series.len());

    let stats = Statistics { count: series.len(),
                             sum,
                             mean,
                             median: median_of_sorted(&sorted),
                             std_dev: std_dev_about(series, mean),
                             min: sorted[0],
                             max: sorted[sorted.len() - 1],
                             q1: quartile_of_sorted(&sorted, 0.25),
                             q3: quartile_of_sorted(&sorted, 0.75) };

    debug!(count = stats.count, mean = stats.mean, "described series");
    Ok(stats)
}

/// Sum of the samples.
///
/// # Errors
/// `EmptySeries` if `series` is empty, rather than a silent zero.
pub fn sum(series: &[f64]) -> StatsResult<f64> {
    non_empty(series)?;
    Ok(series.iter().sum())
}

/// Arithmetic mean, `sum / count`.
///
/// # Errors
/// `EmptySeries` if `series` is empty.
///
/// # Example
/// ```
/// use graphcalc::{error::StatsError, statistics::mean};
///
/// assert_eq!(mean(&[2.0, 4.0, 9.0]).unwrap(), 5.0);
/// assert_eq!(mean(&[]), Err(StatsError::EmptySeries));
/// ```
pub fn mean(series: &[f64]) -> StatsResult<f64> {
    Ok(sum(series)? / usize_to_f64(series.len()))
}

/// Smallest sample.
///
/// # Errors
/// `EmptySeries` if `series` is empty.
pub fn min(series: &[f64]) -> StatsResult<f64> {
    series.iter().copied().min_by(f64::total_cmp).ok_or(StatsError::EmptySeries)
}

/// Largest sample.
///
/// # Errors
/// `EmptySeries` if `series` is empty.
pub fn max(series: &[f64]) -> StatsResult<f64> {
    series.iter().copied().max_by(f64::total_cmp).ok_or(StatsError::EmptySeries)
}

/// Median of the samples.
///
/// For an even count the two central samples are averaged.
///
/// # Errors
/// `EmptySeries` if `series` is empty.
///
/// # Example
/// ```
/// use graphcalc::statistics::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]).unwrap(), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// ```
pub fn median(series: &[f64]) -> StatsResult<f64> {
    Ok(median_of_sorted(&sorted_copy(series)?))
}

/// Population standard deviation: the square root of the mean squared
/// deviation from the mean.
///
/// This divides by `count`, not `count - 1`, matching simple calculator
/// semantics; a single sample has a standard deviation of zero.
///
/// # Errors
/// `EmptySeries` if `series` is empty.
///
/// # Example
/// ```
/// use graphcalc::statistics::std_dev;
///
/// let s = std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(s, 2.0);
/// ```
pub fn std_dev(series: &[f64]) -> StatsResult<f64> {
    let mean = mean(series)?;
    Ok(std_dev_about(series, mean))
}

/// Nearest-rank quantile at fraction `p`.
///
/// The sample at index `floor(p * count)` of the sorted series, with the index
/// clamped to `[0, count - 1]`. No interpolation between neighbouring samples
/// takes place, so the result is always one of the samples. This differs from
/// the linear-interpolation definitions used by most spreadsheet software.
///
/// # Errors
/// `EmptySeries` if `series` is empty.
///
/// # Example
/// ```
/// use graphcalc::statistics::quartile;
///
/// let data = [12.0, 15.0, 18.0, 22.0, 25.0, 28.0, 30.0,
///             32.0, 35.0, 38.0, 40.0, 42.0, 45.0, 48.0];
///
/// // floor(0.25 * 14) = 3
/// assert_eq!(quartile(&data, 0.25).unwrap(), 22.0);
/// ```
pub fn quartile(series: &[f64], p: f64) -> StatsResult<f64> {
    Ok(quartile_of_sorted(&sorted_copy(series)?, p))
}

/// Rejects an empty series.
const fn non_empty(series: &[f64]) -> StatsResult<()> {
    if series.is_empty() {
        return Err(StatsError::EmptySeries);
    }
    Ok(())
}

/// Returns an ascending copy of a non-empty series.
fn sorted_copy(series: &[f64]) -> StatsResult<Vec<f64>> {
    non_empty(series)?;
    let mut sorted = series.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Median of a sorted, non-empty slice.
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        f64::midpoint(sorted[mid - 1], sorted[mid])
    } else {
        sorted[mid]
    }
}

/// Nearest-rank quantile of a sorted, non-empty slice.
fn quartile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    sorted[rank_to_index(p * usize_to_f64(sorted.len()), sorted.len())]
}

/// Population standard deviation about a precomputed mean.
fn std_dev_about(series: &[f64], mean: f64) -> f64 {
    let squared_deviations: f64 = series.iter().map(|v| (v - mean).powi(2)).sum();
    (squared_deviations / usize_to_f64(series.len())).sqrt()
}
