use serde::Serialize;
use tracing::debug;

use crate::{error::StatsError, statistics::StatsResult, util::num::usize_to_f64};

/// Fewest points a line can be fitted through.
const MIN_POINTS: usize = 2;

/// Outcome of an ordinary least-squares fit `y = slope * x + intercept`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionResult {
    /// Slope of the fitted line.
    pub slope:       f64,
    /// Value of the line at `x = 0`.
    pub intercept:   f64,
    /// Coefficient of determination, `1 - SS_res / SS_tot`.
    pub r_squared:   f64,
    /// Pearson correlation coefficient.
    pub correlation: f64,
    /// The line rendered as `y = <slope>x + <intercept>`, four decimals each.
    pub equation:    String,
}

impl RegressionResult {
    /// Value of the fitted line at `x`.
    ///
    /// ## Example
    /// ```
    /// use graphcalc::regress;
    ///
    /// let fit = regress(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
    /// assert_eq!(fit.predict(10.0), 21.0);
    /// ```
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }

    /// Qualitative bucket of [`Self::r_squared`].
    #[must_use]
    pub fn fit_quality(&self) -> FitQuality {
        FitQuality::from_r_squared(self.r_squared)
    }
}

/// How well a fitted line explains the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FitQuality {
    /// R² above 0.9.
    Excellent,
    /// R² above 0.7.
    Good,
    /// R² above 0.5.
    Moderate,
    /// Anything else.
    Weak,
}

impl FitQuality {
    /// Buckets a coefficient of determination.
    ///
    /// ## Example
    /// ```
    /// use graphcalc::FitQuality;
    ///
    /// assert_eq!(FitQuality::from_r_squared(0.95), FitQuality::Excellent);
    /// assert_eq!(FitQuality::from_r_squared(0.9), FitQuality::Good);
    /// assert_eq!(FitQuality::from_r_squared(0.2), FitQuality::Weak);
    /// ```
    #[must_use]
    pub fn from_r_squared(r_squared: f64) -> Self {
        if r_squared > 0.9 {
            Self::Excellent
        } else if r_squared > 0.7 {
            Self::Good
        } else if r_squared > 0.5 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    /// Sentence describing the share of variation a line with this quality
    /// and the given R² explains. The percentage is truncated.
    ///
    /// ## Example
    /// ```
    /// use graphcalc::FitQuality;
    ///
    /// let r_squared = 0.7714;
    /// let quality = FitQuality::from_r_squared(r_squared);
    /// assert_eq!(quality.describe(r_squared),
    ///            "Good fit - The line explains 77% of the variation");
    /// ```
    #[must_use]
    pub fn describe(self, r_squared: f64) -> String {
        let percent = (r_squared * 100.0).trunc();
        match self {
            Self::Weak => format!("Weak fit - The line explains only {percent}% of the variation"),
            _ => format!("{self} fit - The line explains {percent}% of the variation"),
        }
    }
}

impl std::fmt::Display for FitQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
        };
        write!(f, "{name}")
    }
}

/// Means and centered sums of squares and products of a paired series.
///
/// Deviations are taken from the means, so data far from the origin (such as
/// timestamps) keeps its precision. `n * Σx² - (Σx)²` equals `n * sxx`, so the
/// textbook formulas are unchanged.
#[derive(Debug)]
struct Moments {
    mean_x: f64,
    mean_y: f64,
    sxx:    f64,
    syy:    f64,
    sxy:    f64,
}

impl Moments {
    fn accumulate(xs: &[f64], ys: &[f64]) -> Self {
        let n = usize_to_f64(xs.len());
        let mean_x = xs.iter().sum::<f64>() / n;
        let mean_y = ys.iter().sum::<f64>() / n;

        let (sxx, syy, sxy) =
            xs.iter().zip(ys).fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), (&x, &y)| {
                                 let (dx, dy) = (x - mean_x, y - mean_y);
                                 (dx.mul_add(dx, sxx), dy.mul_add(dy, syy), dx.mul_add(dy, sxy))
                             });

        Self { mean_x,
               mean_y,
               sxx,
               syy,
               sxy }
    }
}

/// A series has no variance when every sample equals the first one.
#[allow(clippy::float_cmp)]
fn is_constant(series: &[f64]) -> bool {
    series.iter().all(|&v| v == series[0])
}

/// Fits a least-squares line through the points `(xs[i], ys[i])`.
///
/// # Errors
/// Checked in this order:
/// - `LengthMismatch` if the series differ in length.
/// - `InsufficientData` with fewer than two points.
/// - `DegenerateFit` if every x is equal, then if every y is equal.
///
/// # Example
/// ```
/// use graphcalc::regress;
///
/// let fit = regress(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert_eq!(fit.equation, "y = 2.0000x + 0.0000");
/// assert!((fit.r_squared - 1.0).abs() < 1e-12);
/// ```
pub fn regress(xs: &[f64], ys: &[f64]) -> StatsResult<RegressionResult> {
    if xs.len() != ys.len() {
        return Err(StatsError::LengthMismatch { x_len: xs.len(),
                                                y_len: ys.len() });
    }
    if xs.len() < MIN_POINTS {
        return Err(StatsError::InsufficientData { got: xs.len(),
                                                  min: MIN_POINTS });
    }

    if is_constant(xs) {
        return Err(StatsError::DegenerateFit { axis: "x" });
    }
    if is_constant(ys) {
        return Err(StatsError::DegenerateFit { axis: "y" });
    }

    let m = Moments::accumulate(xs, ys);
    if m.sxx == 0.0 {
        return Err(StatsError::DegenerateFit { axis: "x" });
    }
    if m.syy == 0.0 {
        return Err(StatsError::DegenerateFit { axis: "y" });
    }

    let slope = m.sxy / m.sxx;
    let intercept = slope.mul_add(-m.mean_x, m.mean_y);
    let correlation = m.sxy / (m.sxx * m.syy).sqrt();

    let ss_res = xs.iter().zip(ys).fold(0.0, |res, (&x, &y)| {
                                      let residual = y - slope.mul_add(x - m.mean_x, m.mean_y);
                                      residual.mul_add(residual, res)
                                  });
    let r_squared = 1.0 - ss_res / m.syy;

    debug!(points = xs.len(), slope, intercept, r_squared, "fitted regression line");

    Ok(RegressionResult { slope,
                          intercept,
                          r_squared,
                          correlation,
                          equation: format_equation(slope, intercept) })
}

/// Renders `y = <slope>x + <intercept>`, folding a negative intercept into
/// the operator.
fn format_equation(slope: f64, intercept: f64) -> String {
    if intercept < 0.0 {
        format!("y = {slope:.4}x - {:.4}", intercept.abs())
    } else {
        format!("y = {slope:.4}x + {intercept:.4}")
    }
}
