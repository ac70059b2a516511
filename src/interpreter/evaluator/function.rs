/// Builtin function implementations.
///
/// Contains the real-valued functions available in expressions, each with
/// its own domain check.
pub mod builtin;

/// Function call dispatch.
///
/// Maps a [`Function`](crate::ast::Function) to its implementation and applies
/// the angle mode.
pub mod core;
