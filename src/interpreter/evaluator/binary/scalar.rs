use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a binary arithmetic operation on two already-evaluated
    /// operands.
    ///
    /// Division by exactly zero (either sign) is reported instead of producing
    /// an infinity. Exponentiation is delegated to [`Context::eval_pow`].
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Source position for error reporting.
    ///
    /// # Example
    /// ```
    /// use graphcalc::{Context, ast::BinaryOperator, error::RuntimeError};
    ///
    /// let result = Context::eval_binary(BinaryOperator::Mul, 1.5, 2.0, 0).unwrap();
    /// assert_eq!(result, 3.0);
    ///
    /// let err = Context::eval_binary(BinaryOperator::Div, 1.0, 0.0, 1).unwrap_err();
    /// assert!(matches!(err, RuntimeError::DivisionByZero { position: 1 }));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       position: usize)
                       -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { position });
                }
                Ok(left / right)
            },
            BinaryOperator::Pow => Self::eval_pow(left, right, position),
        }
    }
}
