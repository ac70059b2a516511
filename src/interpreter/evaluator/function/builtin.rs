use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Defines a builtin that is total on the reals: the value is passed straight
/// to the `f64` method of the same name.
///
/// # Example
/// ```
/// use graphcalc::interpreter::evaluator::function::builtin::sin;
///
/// let r = sin(std::f64::consts::FRAC_PI_2, 0).unwrap();
/// assert_eq!(r, 1.0);
/// ```
macro_rules! total_builtin {
    ($fname:ident) => {
        #[doc = concat!("Computes `", stringify!($fname), "` of an angle in radians.")]
        pub fn $fname(argument: f64, _position: usize) -> EvalResult<f64> {
            Ok(argument.$fname())
        }
    };
}

total_builtin!(sin);
total_builtin!(cos);
total_builtin!(tan);

/// Computes the natural logarithm.
///
/// The logarithm is only defined for strictly positive arguments; zero and
/// negative values produce a `Domain` error.
///
/// # Example
/// ```
/// use graphcalc::{error::RuntimeError, interpreter::evaluator::function::builtin::ln};
///
/// assert_eq!(ln(1.0, 0).unwrap(), 0.0);
/// assert!(matches!(ln(0.0, 4), Err(RuntimeError::Domain { position: 4, .. })));
/// ```
pub fn ln(argument: f64, position: usize) -> EvalResult<f64> {
    if argument <= 0.0 {
        return Err(RuntimeError::Domain { details: format!("ln is undefined for {argument}"),
                                          position });
    }
    Ok(argument.ln())
}

/// Computes the square root.
///
/// Negative arguments produce a `Domain` error instead of NaN.
///
/// # Example
/// ```
/// use graphcalc::{error::RuntimeError, interpreter::evaluator::function::builtin::sqrt};
///
/// assert_eq!(sqrt(9.0, 0).unwrap(), 3.0);
/// assert!(matches!(sqrt(-1.0, 0), Err(RuntimeError::Domain { .. })));
/// ```
pub fn sqrt(argument: f64, position: usize) -> EvalResult<f64> {
    if argument < 0.0 {
        return Err(RuntimeError::Domain { details: format!("sqrt is undefined for {argument}"),
                                          position });
    }
    Ok(argument.sqrt())
}
