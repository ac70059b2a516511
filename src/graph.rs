use serde::Serialize;
use tracing::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::usize_to_f64,
};

/// Name of the variable the sampler drives.
pub const PLOT_VARIABLE: &str = "x";

/// One sample of a plotted function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    /// Input value.
    pub x: f64,
    /// Function value, or `None` where the function is undefined at `x`.
    pub y: Option<f64>,
}

/// Evaluates `expr` at `samples` evenly spaced values of `x` between `x_min`
/// and `x_max`, both inclusive.
///
/// The caller's context is cloned and `x` bound in the copy, so any other
/// bindings and the angle mode carry over. Points where the function is
/// undefined (division by zero, domain violations) are returned as gaps with a
/// `y` of `None`, which is how a plot breaks the curve at an asymptote.
///
/// # Parameters
/// - `expr`: A parsed expression, usually in terms of `x`.
/// - `context`: Bindings and angle mode for the other free variables.
/// - `x_min`, `x_max`: The sampled interval.
/// - `samples`: Number of points; `0` yields none and `1` yields only `x_min`.
///
/// # Errors
/// Any failure other than a gap aborts the sampling, for example an unbound
/// variable other than `x`.
///
/// ## Example
/// ```
/// use graphcalc::{Context, graph::sample, parse};
///
/// let tree = parse("1/x").unwrap();
/// let points = sample(&tree, &Context::new(), -1.0, 1.0, 3).unwrap();
///
/// assert_eq!(points[0].y, Some(-1.0));
/// assert_eq!(points[1].y, None);
/// assert_eq!(points[2].y, Some(1.0));
/// ```
pub fn sample(expr: &Expr,
              context: &Context,
              x_min: f64,
              x_max: f64,
              samples: usize)
              -> EvalResult<Vec<PlotPoint>> {
    let mut local = context.clone();
    let step = if samples > 1 {
        (x_max - x_min) / usize_to_f64(samples - 1)
    } else {
        0.0
    };

    // Grown as points are produced; a failing expression returns before any
    // large allocation.
    let points = (0..samples).map(|i| {
                                 let x = if i + 1 == samples && samples > 1 {
                                     x_max
                                 } else {
                                     step.mul_add(usize_to_f64(i), x_min)
                                 };
                                 local.bind(PLOT_VARIABLE, x);

                                 let y = match local.eval(expr) {
                                     Ok(y) => Some(y),
                                     Err(RuntimeError::DivisionByZero { .. }
                                         | RuntimeError::Domain { .. }) => None,
                                     Err(e) => return Err(e),
                                 };
                                 Ok(PlotPoint { x, y })
                             })
                             .collect::<EvalResult<Vec<_>>>()?;

    let gaps = points.iter().filter(|p| p.y.is_none()).count();
    debug!(samples, gaps, "sampled function");
    Ok(points)
}
