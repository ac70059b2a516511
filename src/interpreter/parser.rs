/// Entry points of the parser.
///
/// Contains the top-level `parse_tokens` function, which checks for empty
/// input and trailing tokens, and `parse_expression`, the start of the
/// precedence climb.
pub mod core;

/// Unary, primary and postfix parsing.
///
/// Handles negation, literals, constants, variables, parenthesized groups,
/// function application and the `²` suffix.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative (including implicit
/// multiplication) and exponent precedence levels.
pub mod binary;

/// Utility types for the parser.
///
/// Provides the token cursor shared by all parsing functions.
pub mod utils;
