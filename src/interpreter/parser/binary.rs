use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary, utils::TokenCursor},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(tokens)?;
    loop {
        let next = tokens.peek();
        if let Some(op) = token_to_binary_operator(&next.token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.advance();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: next.position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative `*` and `/`, and implicit multiplication: a
/// number, closing parenthesis or `²` immediately followed by a function, the
/// radical, a constant, a variable or an opening parenthesis multiplies, so
/// `2π`, `3x`, `(1 + 1)(2)` and `2²x` read the way they are written on a
/// calculator. The implicit right operand binds at exponent level, so `2x^2`
/// is `2 * (x ^ 2)`.
///
/// The rule is: `multiplicative := exponent (("*" | "/")? exponent)*`
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// A binary expression tree combining exponent-level nodes.
pub fn parse_multiplicative(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_exponent(tokens)?;
    loop {
        let next = tokens.peek();
        let op = match token_to_binary_operator(&next.token) {
            Some(op @ (BinaryOperator::Mul | BinaryOperator::Div)) => {
                tokens.advance();
                op
            },
            _ if continues_implicit_product(tokens) => BinaryOperator::Mul,
            _ => break,
        };
        let right = parse_exponent(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position: next.position };
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
/// Both operands are unary expressions, so negation binds tighter than `^`
/// and `-2^2` is `(-2)^2`.
///
/// The rule is: `exponent := unary ("^" exponent)?`
///
/// # Parameters
/// - `tokens`: Token cursor.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_exponent(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let base = parse_unary(tokens)?;

    let next = tokens.peek();
    if next.token == Token::Caret {
        tokens.advance();
        let exponent = parse_exponent(tokens)?;
        return Ok(Expr::BinaryOp { left:     Box::new(base),
                                   op:       BinaryOperator::Pow,
                                   right:    Box::new(exponent),
                                   position: next.position, });
    }

    Ok(base)
}

/// Decides whether the upcoming token continues a product without an
/// explicit operator.
///
/// Only a number, `)` or `²` may be followed by an implicit multiplication,
/// and only when the next token can start a function, constant, variable or
/// group.
fn continues_implicit_product(tokens: &TokenCursor<'_>) -> bool {
    let follows_operand = matches!(tokens.previous().map(|s| &s.token),
                                   Some(Token::Number(_) | Token::RParen | Token::Squared));
    let starts_operand = matches!(tokens.peek().token,
                                  Token::Function(_)
                                  | Token::Radical
                                  | Token::Constant(_)
                                  | Token::Identifier(_)
                                  | Token::LParen);
    follows_operand && starts_operand
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is an explicit binary
/// operator glyph. The `²` suffix is not included; it is handled as a postfix
/// operator.
///
/// # Example
/// ```
/// use graphcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Squared), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
