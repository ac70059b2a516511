/// Descriptive statistics over a single series.
///
/// Count, sum, mean, median, population standard deviation, extrema and
/// nearest-rank quartiles. Every statistic of an empty series is an error.
pub mod descriptive;
/// Ordinary least-squares linear regression over paired series.
///
/// Slope, intercept, coefficient of determination, correlation and the
/// rendered equation, all derived from one set of accumulated sums.
pub mod regression;

pub use descriptive::{Statistics, describe, max, mean, median, min, quartile, std_dev, sum};
pub use regression::{FitQuality, RegressionResult, regress};

use crate::error::StatsError;

/// Result type used by the statistics routines.
pub type StatsResult<T> = Result<T, StatsError>;
