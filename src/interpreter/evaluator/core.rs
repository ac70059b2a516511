use std::collections::HashMap;

use serde::Serialize;
use tracing::trace;

use crate::{ast::Expr, error::RuntimeError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How trigonometric functions interpret their argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    /// Arguments are in radians.
    #[default]
    Radians,
    /// Arguments are in degrees and converted before application.
    Degrees,
}

impl AngleMode {
    /// Converts an angle expressed in this mode to radians.
    ///
    /// ## Example
    /// ```
    /// use graphcalc::AngleMode;
    ///
    /// let radians = AngleMode::Degrees.to_radians(180.0);
    /// assert!((radians - std::f64::consts::PI).abs() < 1e-15);
    /// assert_eq!(AngleMode::Radians.to_radians(1.5), 1.5);
    /// ```
    #[must_use]
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Radians => angle,
            Self::Degrees => angle.to_radians(),
        }
    }
}

/// Stores the evaluation context.
///
/// The context holds everything an expression needs beyond its own text: the
/// values bound to free variables and the angle mode. It is never modified by
/// evaluation, so one context can serve any number of evaluations, on any
/// number of threads.
///
/// ## Usage
///
/// ```
/// use graphcalc::{AngleMode, Context, evaluate};
///
/// let context = Context::new().with_angle_mode(AngleMode::Degrees)
///                             .with_binding("x", 30.0);
///
/// let value = evaluate("2sin(x)", &context).unwrap();
/// assert!((value - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    /// Values of free variables, by name.
    pub bindings:   HashMap<String, f64>,
    /// Angle mode applied to `sin`, `cos` and `tan`.
    pub angle_mode: AngleMode,
}

impl Context {
    /// Creates a context with no bindings, in radians.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the context with its angle mode replaced.
    #[must_use]
    pub fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }

    /// Returns the context with `name` bound to `value`.
    #[must_use]
    pub fn with_binding(mut self, name: impl Into<String>, value: f64) -> Self {
        self.bind(name, value);
        self
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn bind(&mut self, name: impl Into<String>, value: f64) {
        self.bindings.insert(name.into(), value);
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }

    /// Evaluates an expression tree and returns its value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant: literals and constants yield
    /// their value, variables are looked up in the bindings, and operator and
    /// function nodes evaluate their children first.
    ///
    /// # Errors
    /// - `UnboundVariable` when a variable has no binding.
    /// - `DivisionByZero` and `Domain` from operators and functions.
    ///
    /// # Example
    /// ```
    /// use graphcalc::{Context, parse};
    ///
    /// let tree = parse("(2 + 3) * 4").unwrap();
    /// assert_eq!(Context::new().eval(&tree).unwrap(), 20.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Constant { constant, .. } => Ok(constant.value()),
            Expr::Variable { name, position } => self.eval_variable(name, *position),
            Expr::Negate { expr, .. } => Ok(-self.eval(expr)?),
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *position)
            },
            Expr::FunctionCall { function,
                                 argument,
                                 position, } => {
                let argument = self.eval(argument)?;
                self.eval_function_call(*function, argument, *position)
            },
        }
    }

    /// Resolves a variable reference.
    fn eval_variable(&self, name: &str, position: usize) -> EvalResult<f64> {
        let value = self.get_variable(name)
                        .ok_or_else(|| RuntimeError::UnboundVariable { name: name.to_string(),
                                                                       position })?;
        trace!(name, value, "resolved variable");
        Ok(value)
    }
}
