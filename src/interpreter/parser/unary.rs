use crate::{
    ast::{Expr, Function},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::TokenCursor,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix `-` (numeric negation). Negation is right-associative,
/// so `--x` is parsed as `-(-x)`. If no minus is present, the function
/// delegates to [`parse_primary`] and then applies any `²` suffixes via
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary "²"*
/// ```
pub(crate) fn parse_unary(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let next = tokens.peek();
    if next.token == Token::Minus {
        tokens.advance();
        let expr = parse_unary(tokens)?;
        return Ok(Expr::Negate { expr:     Box::new(expr),
                                 position: next.position, });
    }

    let primary = parse_primary(tokens)?;
    Ok(parse_postfix(tokens, primary))
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - constants
/// - single-letter variables
/// - function calls, including the `√` prefix
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := number
///              | constant
///              | variable
///              | function "(" expression ")"
///              | "√" primary
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `MissingOperand` when a binary operator appears where an operand should
///   start.
/// - `UnexpectedEndOfInput` when the input ends instead.
/// - `UnexpectedToken` for a stray `)`.
pub(crate) fn parse_primary(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let next = tokens.peek();
    let position = next.position;

    match &next.token {
        Token::Number(value) => {
            tokens.advance();
            Ok(Expr::Literal { value: *value,
                               position })
        },
        Token::Constant(constant) => {
            tokens.advance();
            Ok(Expr::Constant { constant: *constant,
                                position })
        },
        Token::Identifier(name) => {
            tokens.advance();
            Ok(Expr::Variable { name: name.clone(),
                                position })
        },
        Token::Function(function) => {
            tokens.advance();
            parse_function_call(tokens, *function, position)
        },
        Token::Radical => {
            tokens.advance();
            parse_radical(tokens, position)
        },
        Token::LParen => parse_grouping(tokens),
        Token::Plus | Token::Star | Token::Slash | Token::Caret | Token::Squared => {
            Err(ParseError::MissingOperand { operator: next.token.to_string(),
                                             position })
        },
        Token::End => Err(ParseError::UnexpectedEndOfInput { position }),
        Token::Minus | Token::RParen => {
            Err(ParseError::UnexpectedToken { token: next.token.to_string(),
                                              position })
        },
    }
}

/// Applies `²` suffixes to an expression.
///
/// Each suffix wraps the expression so far in an implicit `^ 2`, so `2²²` is
/// `(2 ^ 2) ^ 2`.
///
/// Grammar: `postfix := primary "²"*`
fn parse_postfix(tokens: &mut TokenCursor<'_>, mut node: Expr) -> Expr {
    while tokens.check(&Token::Squared) {
        let Spanned { position, .. } = tokens.advance();
        node = node.squared(*position);
    }
    node
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// `ExpectedClosingParen`, pointing at the opening parenthesis, when the
/// group is never closed, including when the input ends right after it.
fn parse_grouping(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let open = tokens.advance();
    if tokens.check(&Token::End) {
        return Err(ParseError::ExpectedClosingParen { position: open.position });
    }
    let expr = parse_expression(tokens)?;

    if tokens.check(&Token::RParen) {
        tokens.advance();
        Ok(expr)
    } else {
        Err(ParseError::ExpectedClosingParen { position: open.position })
    }
}

/// Parses the argument of a spelled-out function, which must be
/// parenthesized.
///
/// Grammar: `call := function "(" expression ")"`
fn parse_function_call(tokens: &mut TokenCursor<'_>,
                       function: Function,
                       position: usize)
                       -> ParseResult<Expr> {
    if !tokens.check(&Token::LParen) {
        return Err(ParseError::ExpectedOpeningParen { function: function.name().to_string(),
                                                      position });
    }

    let argument = parse_grouping(tokens)?;
    Ok(Expr::FunctionCall { function,
                            argument: Box::new(argument),
                            position })
}

/// Parses the operand of the radical glyph.
///
/// `√` accepts either a parenthesized argument or a bare primary, as the
/// calculator keypad produces both `√(2)` and `√2`. A leading minus is
/// allowed so that `√-4` reaches the evaluator and reports a domain error.
///
/// Grammar: `radical := "√" ("-" unary | primary)`
fn parse_radical(tokens: &mut TokenCursor<'_>, position: usize) -> ParseResult<Expr> {
    let argument = if tokens.check(&Token::Minus) {
        parse_unary(tokens)?
    } else {
        parse_primary(tokens)?
    };

    Ok(Expr::FunctionCall { function: Function::Sqrt,
                            argument: Box::new(argument),
                            position })
}
