/// The evaluator module reduces expression trees to numbers.
///
/// The evaluator traverses the AST, resolves variables from the context,
/// applies operators and builtin functions, and reports runtime errors such
/// as division by zero or domain violations.
///
/// # Responsibilities
/// - Evaluates AST nodes under a [`Context`](evaluator::core::Context).
/// - Applies the angle mode to trigonometric functions.
/// - Reports runtime errors with the source position of the failing node.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens: numbers, function names, constants, variables, operators and
/// parentheses, terminated by an end marker. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Normalizes localized operator glyphs to canonical tokens.
/// - Reports lexical errors for unrecognized characters and unknown words.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs a single expression tree that honors operator precedence,
/// implicit multiplication and the `²` suffix.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates grammar, reporting errors with source positions.
/// - Rejects empty input and trailing tokens.
pub mod parser;
