use crate::error::ErrorKind;

/// Represents all errors that can occur during lexing or parsing.
///
/// Positions are zero-based character offsets into the source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character outside the supported symbol set.
    #[error("Unrecognized character '{character}' at position {position}.")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position:  usize,
    },
    /// A word that is neither a function, a constant nor a single-letter
    /// variable.
    #[error("Unknown identifier '{name}' at position {position}.")]
    UnknownIdentifier {
        /// The unknown word.
        name:     String,
        /// Where it starts.
        position: usize,
    },
    /// A numeric literal that could not be read as a number.
    #[error("Invalid number '{literal}' at position {position}.")]
    InvalidNumber {
        /// The literal text.
        literal:  String,
        /// Where it starts.
        position: usize,
    },
    /// The input was empty or contained only whitespace.
    #[error("Empty expression.")]
    EmptyExpression,
    /// Found an unexpected token while parsing.
    #[error("Unexpected token '{token}' at position {position}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where it was found.
        position: usize,
    },
    /// Reached the end of input where an operand was required.
    #[error("Unexpected end of input at position {position}.")]
    UnexpectedEndOfInput {
        /// The length of the input.
        position: usize,
    },
    /// A `(` was never closed.
    #[error("Expected closing parenthesis ')' for '(' at position {position}.")]
    ExpectedClosingParen {
        /// Position of the unmatched opening parenthesis.
        position: usize,
    },
    /// A function name was not followed by `(`.
    #[error("Expected '(' after function '{function}' at position {position}.")]
    ExpectedOpeningParen {
        /// The function name.
        function: String,
        /// Position of the function name.
        position: usize,
    },
    /// A binary operator with no left operand.
    #[error("Operator '{operator}' at position {position} is missing its left operand.")]
    MissingOperand {
        /// The operator glyph.
        operator: String,
        /// Where the operator was found.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    #[error("Extra tokens after expression starting with '{token}' at position {position}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Where it was found.
        position: usize,
    },
}

impl ParseError {
    /// Returns [`ErrorKind::Lex`] for tokenizer failures and
    /// [`ErrorKind::Parse`] for everything else.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedCharacter { .. }
            | Self::UnknownIdentifier { .. }
            | Self::InvalidNumber { .. } => ErrorKind::Lex,
            _ => ErrorKind::Parse,
        }
    }

    /// Returns the character position of the failure, when one exists.
    ///
    /// ## Example
    /// ```
    /// use graphcalc::error::ParseError;
    ///
    /// let err = ParseError::UnrecognizedCharacter { character: '@',
    ///                                               position:  3, };
    /// assert_eq!(err.position(), Some(3));
    /// assert_eq!(ParseError::EmptyExpression.position(), None);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyExpression => None,
            Self::UnrecognizedCharacter { position, .. }
            | Self::UnknownIdentifier { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::ExpectedOpeningParen { position, .. }
            | Self::MissingOperand { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. } => Some(*position),
        }
    }
}
