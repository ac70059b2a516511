use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates an exponentiation operation.
    ///
    /// A negative base with a non-integer exponent has no real result and is a
    /// domain error rather than a silent NaN. Zero raised to a negative power
    /// divides by zero.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `position`: Source position for error reporting.
    ///
    /// # Example
    /// ```
    /// use graphcalc::{Context, error::RuntimeError};
    ///
    /// assert_eq!(Context::eval_pow(2.0, 10.0, 1).unwrap(), 1024.0);
    /// assert_eq!(Context::eval_pow(-2.0, 3.0, 1).unwrap(), -8.0);
    ///
    /// let err = Context::eval_pow(-8.0, 1.0 / 3.0, 1).unwrap_err();
    /// assert!(matches!(err, RuntimeError::Domain { .. }));
    /// ```
    pub fn eval_pow(base: f64, exponent: f64, position: usize) -> EvalResult<f64> {
        if base == 0.0 && exponent < 0.0 {
            return Err(RuntimeError::DivisionByZero { position });
        }

        if base < 0.0 && exponent.fract() != 0.0 {
            return Err(RuntimeError::Domain { details: format!("negative base {base} with non-integer exponent {exponent}"),
                                              position });
        }

        Ok(base.powf(exponent))
    }
}
