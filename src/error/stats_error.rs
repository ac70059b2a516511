use crate::error::ErrorKind;

/// Precondition failures of the statistics and regression routines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// The series has no samples.
    #[error("Empty series: at least one value is required.")]
    EmptySeries,
    /// Paired series have different lengths.
    #[error("Length mismatch: {x_len} x values but {y_len} y values.")]
    LengthMismatch {
        /// Number of x values.
        x_len: usize,
        /// Number of y values.
        y_len: usize,
    },
    /// Too few points for the computation.
    #[error("Insufficient data: got {got} points, need at least {min}.")]
    InsufficientData {
        /// Number of points provided.
        got: usize,
        /// Minimum number of points required.
        min: usize,
    },
    /// The fit is undefined because one series has no variance.
    #[error("Degenerate fit: all {axis} values are equal.")]
    DegenerateFit {
        /// Which series is constant, `"x"` or `"y"`.
        axis: &'static str,
    },
}

impl StatsError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptySeries => ErrorKind::EmptySeries,
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Self::InsufficientData { .. } => ErrorKind::InsufficientData,
            Self::DegenerateFit { .. } => ErrorKind::DegenerateFit,
        }
    }
}
