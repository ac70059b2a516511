/// Binary operator evaluation logic.
///
/// Handles arithmetic on two operands, including the division-by-zero and
/// power-domain checks.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation entry point, the evaluation context with its
/// variable bindings and angle mode, and the result type.
pub mod core;

/// Function evaluation.
///
/// Dispatches builtin function calls, applying the angle mode to
/// trigonometric arguments and checking function domains.
pub mod function;
