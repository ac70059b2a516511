use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{binary::parse_additive, utils::TokenCursor},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a single expression tree.
///
/// The sequence must describe exactly one expression followed by the end
/// marker. Nothing is returned on failure, never a partial tree.
///
/// # Parameters
/// - `tokens`: Spanned tokens as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Errors
/// - `EmptyExpression` if there is nothing before the end marker.
/// - `UnexpectedTrailingTokens` if tokens remain after a complete expression.
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use graphcalc::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse_tokens},
/// };
///
/// let tokens = tokenize("(1 + 2))").unwrap();
/// assert!(matches!(parse_tokens(&tokens),
///                  Err(ParseError::UnexpectedTrailingTokens { position: 7, .. })));
/// ```
pub fn parse_tokens(tokens: &[Spanned]) -> ParseResult<Expr> {
    let mut cursor = TokenCursor::new(tokens);

    if cursor.check(&Token::End) {
        return Err(ParseError::EmptyExpression);
    }

    let expr = parse_expression(&mut cursor)?;

    let next = cursor.peek();
    match &next.token {
        Token::End => Ok(expr),
        token => Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                            position: next.position, }),
    }
}

/// Parses a full expression.
///
/// This begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_additive(tokens)
}
