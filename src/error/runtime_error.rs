use crate::error::ErrorKind;

/// Represents all errors that can occur while evaluating an expression tree.
///
/// Each variant records the source position of the node that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A free variable had no binding in the context.
    #[error("Unbound variable '{name}' at position {position}.")]
    UnboundVariable {
        /// The name of the variable.
        name:     String,
        /// The source position where the variable appears.
        position: usize,
    },
    /// Attempted division by zero.
    #[error("Division by zero at position {position}.")]
    DivisionByZero {
        /// The source position of the operator.
        position: usize,
    },
    /// A function or operator was applied outside of its domain.
    #[error("Domain error at position {position}: {details}.")]
    Domain {
        /// What was out of domain.
        details:  String,
        /// The source position of the operator or function.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnboundVariable { .. } => ErrorKind::UnboundVariable,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::Domain { .. } => ErrorKind::Domain,
        }
    }

    /// Returns the source position of the failing node.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnboundVariable { position, .. }
            | Self::DivisionByZero { position }
            | Self::Domain { position, .. } => *position,
        }
    }
}
