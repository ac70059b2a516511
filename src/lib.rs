//! # graphcalc
//!
//! graphcalc is the computation core of a graphing calculator written in Rust.
//! It parses and evaluates calculator-notation expressions with implicit
//! multiplication, localized operator glyphs and an angle mode, computes
//! descriptive statistics over numeric series, and fits least-squares
//! regression lines.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::tokenize, parser::core::parse_tokens},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the node types for literals, constants, variables, operators and
///   function application.
/// - Attaches the source position of each node for error reporting.
/// - Renders trees back to a canonical, fully parenthesized text form.
pub mod ast;
/// Provides unified error types for parsing, evaluation and statistics.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating an expression, and while computing statistics. Every error maps
/// to an [`ErrorKind`](error::ErrorKind) so callers can react without matching
/// on message text.
///
/// # Responsibilities
/// - Defines one error enum per phase.
/// - Carries the source position of expression errors.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Samples functions for plotting.
///
/// Evaluates a parsed expression over an evenly spaced range of `x` values,
/// turning points where the function is undefined into gaps.
pub mod graph;
/// Orchestrates expression evaluation.
///
/// This module ties together lexing, parsing and evaluation to turn
/// calculator-notation text into a number.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Descriptive statistics and linear regression.
///
/// Independent of the expression engine: these routines work on plain slices
/// of numbers and never modify their input.
pub mod statistics;
/// General utilities for numeric conversion and display formatting.
///
/// # Responsibilities
/// - Convert between sample counts, indices and `f64` without silent surprises.
/// - Format results with a fixed number of significant digits.
pub mod util;

pub use error::{ErrorKind, EvalError};
pub use interpreter::evaluator::core::{AngleMode, Context};
pub use statistics::{FitQuality, RegressionResult, Statistics, describe, regress};

/// Parses an expression into a tree without evaluating it.
///
/// Parse once and call [`Context::eval`] repeatedly to evaluate the same
/// expression under different bindings, as a plot does.
///
/// # Errors
/// Returns a [`ParseError`] for lexical errors (unrecognized characters,
/// unknown words) and grammar errors (unbalanced parentheses, dangling
/// operators, empty input, trailing tokens).
///
/// # Examples
/// ```
/// use graphcalc::parse;
///
/// let tree = parse("2x + 1").unwrap();
/// assert_eq!(tree.to_string(), "((2 * x) + 1)");
///
/// assert!(parse("2 +").is_err());
/// ```
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    parse_tokens(&tokens)
}

/// Parses and evaluates an expression under the given context.
///
/// This is the main entry point of the expression engine. Evaluation is
/// deterministic: the same text and context always give the same result.
///
/// # Errors
/// Returns [`EvalError::Parse`] if the text does not parse, and
/// [`EvalError::Runtime`] for unbound variables, division by zero and domain
/// violations.
///
/// # Examples
/// ```
/// use graphcalc::{Context, ErrorKind, evaluate};
///
/// let context = Context::new().with_binding("x", 5.0);
///
/// assert_eq!(evaluate("2 + 3 × 4", &context).unwrap(), 14.0);
/// assert_eq!(evaluate("2x", &context).unwrap(), 10.0);
///
/// let error = evaluate("1 ÷ 0", &context).unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate(source: &str, context: &Context) -> Result<f64, EvalError> {
    debug!(source, angle_mode = ?context.angle_mode, "evaluating expression");
    let tree = parse(source)?;
    Ok(context.eval(&tree)?)
}
