//! Newton's method for square nonlinear systems.
//!
//! # Algorithm
//!
//! Each iteration evaluates `F(x_k)` and the Jacobian `J(x_k)`, solves the
//! linear system
//!
//! ```text
//! J(x_k) · Δx_k = −F(x_k)
//! ```
//!
//! by LU factorization, and moves to `x_{k+1} = x_k + αΔx_k`. The step length
//! `α` comes from an Armijo backtracking line search on `φ(x) = ½‖F(x)‖²`,
//! or is `1` when the line search is disabled.
//!
//! The solver converges when `‖F(x_{k+1})‖₂ < residual_tol` or
//! `‖x_{k+1} − x_k‖₂ < step_tol`.
//!
//! # Jacobians
//!
//! The Jacobian is supplied through a [`JacobianStrategy`]:
//!
//! - [`Analytic`] wraps a closed-form Jacobian
//! - [`ForwardDifference`] approximates it with `n` extra evaluations
//! - [`CentralDifference`] approximates it with `2n` extra evaluations
//!
//! The Jacobian is recomputed every iteration.
//!
//! # Errors
//!
//! A Jacobian with a zero pivot, or whose smallest-to-largest pivot ratio is
//! below [`Config::min_pivot_ratio`], fails with [`Error::SingularJacobian`].
//! A line search that cannot find an acceptable `α` above
//! [`LineSearch::min_alpha`] fails with [`Error::LineSearchStalled`].
//!
//! # Example
//!
//! ```rust
//! use rootline_core::{DMatrix, DVector};
//! use rootline_solvers::system::newton::{Analytic, Config, solve_unobserved};
//!
//! let circle_line = |x: &DVector<f64>| {
//!     DVector::from_vec(vec![x[0] * x[0] + x[1] * x[1] - 1.0, x[0] - x[1]])
//! };
//! let jacobian = |x: &DVector<f64>| {
//!     DMatrix::from_row_slice(2, 2, &[2.0 * x[0], 2.0 * x[1], 1.0, -1.0])
//! };
//!
//! let x0 = DVector::from_vec(vec![0.8, 0.6]);
//! let solution =
//!     solve_unobserved(&circle_line, &Analytic(&jacobian), x0, &Config::default()).unwrap();
//!
//! assert!(solution.converged());
//! assert!((solution.root[0] - 0.5_f64.sqrt()).abs() < 1e-10);
//! ```

mod config;
mod error;
mod event;
mod jacobian;
mod line_search;
mod linear;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError, LineSearch};
pub use error::{DimensionMismatch, Error};
pub use event::Event;
pub use jacobian::{Analytic, CentralDifference, ForwardDifference, JacobianStrategy};

use nalgebra::{DMatrix, DVector};

use rootline_core::{History, Observer, Solution, Status, System};

use linear::{Singular, newton_direction};

/// Solves `F(x) = 0` starting from `x0`.
///
/// The observer receives one [`Event`] per accepted step.
///
/// # Errors
///
/// Returns an error if the guess is empty or non-finite, if the system or
/// Jacobian has the wrong shape or produces non-finite values, if the
/// Jacobian is singular, or if the line search stalls.
pub fn solve<S, J, Obs>(
    system: &S,
    jacobian: &J,
    x0: DVector<f64>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<DVector<f64>>, Error>
where
    S: System + ?Sized,
    J: JacobianStrategy<S> + ?Sized,
    Obs: for<'a> Observer<Event<'a>>,
{
    if x0.is_empty() {
        return Err(Error::EmptyGuess);
    }
    if x0.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFiniteGuess);
    }

    let n = x0.len();
    let mut fx = evaluate(system, &x0, 0)?;
    let mut residual_norm = fx.norm();

    let mut history = History::new(x0);
    if residual_norm < config.residual_tol() {
        return Ok(history.finish(Status::Converged, residual_norm));
    }

    for iter in 1..=config.max_iters() {
        let x = history.latest();

        let jac = jacobian.evaluate(system, x, &fx)?;
        check_jacobian(&jac, n, iter)?;

        let dx = match newton_direction(&jac, &fx, config.min_pivot_ratio()) {
            Ok(dx) => dx,
            Err(Singular { pivot_ratio }) => {
                return Err(Error::SingularJacobian { iter, pivot_ratio });
            }
        };
        if dx.iter().any(|v| !v.is_finite()) {
            return Err(Error::NonFiniteStep { iter });
        }

        let step = line_search::step(system, x, &fx, &jac, &dx, config.line_search(), iter)?;
        let step_norm = step.alpha * dx.norm();

        fx = step.fx;
        residual_norm = step.residual_norm;
        history.push(step.x);

        observer.observe(&Event {
            iter,
            x: history.latest(),
            residual_norm,
            step_norm,
            alpha: step.alpha,
            backtracks: step.backtracks,
        });

        if residual_norm < config.residual_tol() || step_norm < config.step_tol() {
            return Ok(history.finish(Status::Converged, residual_norm));
        }
    }

    Ok(history.finish(Status::MaxIters, residual_norm))
}

/// Solves `F(x) = 0` starting from `x0` without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<S, J>(
    system: &S,
    jacobian: &J,
    x0: DVector<f64>,
    config: &Config,
) -> Result<Solution<DVector<f64>>, Error>
where
    S: System + ?Sized,
    J: JacobianStrategy<S> + ?Sized,
{
    solve(system, jacobian, x0, config, ())
}

/// Evaluates the system, checking the output length and finiteness.
fn evaluate<S: System + ?Sized>(
    system: &S,
    x: &DVector<f64>,
    iter: usize,
) -> Result<DVector<f64>, Error> {
    let fx = system.call(x);
    if fx.len() != x.len() {
        return Err(DimensionMismatch {
            expected: x.len(),
            found: fx.len(),
        }
        .into());
    }
    if fx.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFiniteResidual { iter });
    }
    Ok(fx)
}

fn check_jacobian(jacobian: &DMatrix<f64>, n: usize, iter: usize) -> Result<(), Error> {
    let (rows, cols) = jacobian.shape();
    if rows != n || cols != n {
        return Err(Error::JacobianShape {
            rows,
            cols,
            expected: n,
        });
    }
    if jacobian.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFiniteJacobian { iter });
    }
    Ok(())
}
