/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include unrecognized characters, unknown words,
/// mismatched parentheses, dangling operators and trailing input, all detected
/// before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a parsed
/// expression: unbound variables, division by zero and domain violations.
pub mod runtime_error;
/// Statistics errors.
///
/// Precondition failures of the descriptive statistics and regression
/// routines, such as empty series or a fit with no variance.
pub mod stats_error;

use serde::Serialize;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use stats_error::StatsError;

/// Classification of every failure the engines can report.
///
/// Callers that want to give actionable messages match on the kind rather than
/// on the message text. Every error type in this crate maps to exactly one
/// kind through its `kind()` method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// An unrecognized character or unknown word in the input.
    Lex,
    /// A malformed expression.
    Parse,
    /// A free variable had no binding.
    UnboundVariable,
    /// A division (or negative power) of exactly zero.
    DivisionByZero,
    /// A function or operator was applied outside its domain.
    Domain,
    /// A statistic was requested for an empty series.
    EmptySeries,
    /// Paired series of different lengths.
    LengthMismatch,
    /// Too few points for the requested computation.
    InsufficientData,
    /// A regression with zero variance in one of the series.
    DegenerateFit,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Lex => "LexError",
            Self::Parse => "ParseError",
            Self::UnboundVariable => "UnboundVariableError",
            Self::DivisionByZero => "DivisionByZeroError",
            Self::Domain => "DomainError",
            Self::EmptySeries => "EmptySeriesError",
            Self::LengthMismatch => "LengthMismatchError",
            Self::InsufficientData => "InsufficientDataError",
            Self::DegenerateFit => "DegenerateFitError",
        };
        write!(f, "{name}")
    }
}

/// Any failure of [`crate::evaluate`]: either the text did not parse, or the
/// parsed tree could not be evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// Lexing or parsing failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl EvalError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }

    /// Returns the character position the error refers to, if known.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => Some(e.position()),
        }
    }
}
