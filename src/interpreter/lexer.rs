use logos::Logos;
use tracing::trace;

use crate::{
    ast::{Constant, Function},
    error::ParseError,
};

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Localized operator glyphs (`−`, `×`, `÷`) normalize to the same variant as
/// their ASCII spelling.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `3.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Builtin function names.
    #[token("sin", |_| Function::Sin)]
    #[token("cos", |_| Function::Cos)]
    #[token("tan", |_| Function::Tan)]
    #[token("ln", |_| Function::Ln)]
    #[token("sqrt", |_| Function::Sqrt)]
    Function(Function),
    /// The radical glyph `√`. Unlike spelled-out functions it may prefix a
    /// bare operand.
    #[token("√")]
    Radical,
    /// Named constants.
    #[token("π", |_| Constant::Pi)]
    #[token("pi", |_| Constant::Pi)]
    Constant(Constant),
    /// Any other run of letters. Only single letters survive tokenization,
    /// as free variables.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-` or `−`
    #[token("-")]
    #[token("−")]
    Minus,
    /// `*` or `×`
    #[token("*")]
    #[token("×")]
    Star,
    /// `/` or `÷`
    #[token("/")]
    #[token("÷")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `²`
    #[token("²")]
    Squared,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Never produced by the lexer itself; [`tokenize`] appends
    /// it after the last token.
    End,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Function(function) => write!(f, "{}", function.name()),
            Self::Constant(constant) => write!(f, "{}", constant.name()),
            Self::Radical => write!(f, "√"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Caret => write!(f, "^"),
            Self::Squared => write!(f, "²"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// A token together with the zero-based character position where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// The token.
    pub token:    Token,
    /// Character offset of the token's first character.
    pub position: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts the source text into spanned tokens terminated by
/// [`Token::End`].
///
/// Positions are reported in characters, not bytes, so that a caller can
/// point at the offending glyph in what the user typed.
///
/// # Errors
/// - `UnrecognizedCharacter` for a character outside the supported set.
/// - `UnknownIdentifier` for a multi-letter word that is not a function or
///   constant name.
/// - `InvalidNumber` for a literal that cannot be read as a number.
///
/// # Example
/// ```
/// use graphcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 × π").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|s| s.token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Number(2.0),
///                 Token::Star,
///                 Token::Constant(graphcalc::ast::Constant::Pi),
///                 Token::End]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    // Byte offsets from logos are translated to character offsets
    // incrementally, since spans only move forward.
    let mut byte_cursor = 0;
    let mut char_cursor = 0;
    let mut to_char_position = |byte: usize| {
        char_cursor += source[byte_cursor..byte].chars().count();
        byte_cursor = byte;
        char_cursor
    };

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let position = to_char_position(span.start);

        let token = match result {
            Ok(Token::Identifier(name)) if name.chars().count() > 1 => {
                return Err(ParseError::UnknownIdentifier { name, position });
            },
            Ok(token) => token,
            Err(()) => {
                // An error span may end inside a multi-byte character; only its
                // start is guaranteed to be a boundary.
                return Err(match source[span.start..].chars().next() {
                    Some(c) if c.is_ascii_digit() || c == '.' => {
                        let literal = source.get(span).unwrap_or(".").to_string();
                        ParseError::InvalidNumber { literal, position }
                    },
                    Some(character) => ParseError::UnrecognizedCharacter { character, position },
                    None => ParseError::UnexpectedEndOfInput { position },
                });
            },
        };

        tokens.push(Spanned { token, position });
    }

    let end = to_char_position(source.len());
    tokens.push(Spanned { token:    Token::End,
                          position: end, });

    trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}
