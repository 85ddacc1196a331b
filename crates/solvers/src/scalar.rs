//! Solvers for scalar equations `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a bracketed interval
//! - [`newton`]: quadratic convergence near a simple root, needs `f'`
//! - [`secant`]: derivative-free, superlinear near a simple root
//! - [`brent`]: bracketed hybrid of bisection and interpolation
//!
//! Bracketing solvers accept endpoints in either order and return
//! immediately when an endpoint is an exact root.

mod bracket;
mod evaluate;

pub use bracket::{BracketError, Sign};
pub use evaluate::{NonFiniteResidual, Point};

pub mod bisection;
pub mod brent;
pub mod newton;
pub mod secant;

use rootline_core::{Function, History, Solution, Status};

use evaluate::evaluate;

/// Finishes a scalar solve by evaluating the residual at the latest estimate.
fn finish<F>(
    f: &F,
    history: History<f64>,
    status: Status,
) -> Result<Solution<f64>, NonFiniteResidual>
where
    F: Function + ?Sized,
{
    let point = evaluate(f, *history.latest())?;
    Ok(history.finish(status, point.residual))
}
