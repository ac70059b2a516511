use crate::{
    ast::Function,
    interpreter::evaluator::{
        core::{Context, EvalResult},
        function::builtin,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its evaluated argument and the source position of the
/// call, and returns the result wrapped in `EvalResult`.
type BuiltinFn = fn(f64, usize) -> EvalResult<f64>;

/// Returns the implementation of a builtin function.
const fn builtin_for(function: Function) -> BuiltinFn {
    match function {
        Function::Sin => builtin::sin,
        Function::Cos => builtin::cos,
        Function::Tan => builtin::tan,
        Function::Ln => builtin::ln,
        Function::Sqrt => builtin::sqrt,
    }
}

impl Context {
    /// Evaluates a function call on an already-evaluated argument.
    ///
    /// Trigonometric functions first convert the argument from the context's
    /// angle mode to radians.
    ///
    /// # Parameters
    /// - `function`: The builtin being applied.
    /// - `argument`: The evaluated argument.
    /// - `position`: Source position of the call for error reporting.
    ///
    /// # Example
    /// ```
    /// use graphcalc::{AngleMode, Context, ast::Function};
    ///
    /// let degrees = Context::new().with_angle_mode(AngleMode::Degrees);
    /// let r = degrees.eval_function_call(Function::Cos, 0.0, 0).unwrap();
    /// assert_eq!(r, 1.0);
    /// ```
    pub fn eval_function_call(&self,
                              function: Function,
                              argument: f64,
                              position: usize)
                              -> EvalResult<f64> {
        let argument = if function.is_trigonometric() {
            self.angle_mode.to_radians(argument)
        } else {
            argument
        };

        builtin_for(function)(argument, position)
    }
}
