//! Newton-Raphson iteration for scalar equations.
//!
//! # Algorithm
//!
//! Starting from `x0`, each step linearizes `f` at the current estimate and
//! moves to the zero of the tangent line:
//!
//! ```text
//! x_{n+1} = x_n − f(x_n) / f'(x_n)
//! ```
//!
//! Near a simple root the error roughly squares every step. Far from a root
//! the iteration can diverge or cycle, in which case the iteration limit ends
//! the solve with [`Status::MaxIters`].
//!
//! The solver refuses to divide by a derivative whose magnitude is below
//! [`Config::min_derivative`] and fails with [`Error::DerivativeTooSmall`].
//! It converges when `|x_{n+1} − x_n| < tol` or when `f(x_n)` is exactly zero.
//!
//! [`Status::MaxIters`]: rootline_core::Status::MaxIters

mod config;
mod error;
mod event;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use rootline_core::{Function, History, Observer, Solution, Status};

use super::{evaluate::evaluate, finish};

/// Finds a root of `f` starting from `x0`, using the derivative `df`.
///
/// The observer receives one [`Event`] per update.
///
/// # Errors
///
/// Returns an error if `x0` is non-finite, if `f` or `df` return a non-finite
/// value, if the derivative is too small to divide by, or if an update
/// overflows.
pub fn solve<F, D, Obs>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<f64>, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
    Obs: Observer<Event>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x: x0 });
    }

    let mut history = History::new(x0);
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let point = evaluate(f, x)?;
        if point.is_root() {
            return Ok(history.finish(Status::Converged, point.residual));
        }

        let derivative = df.call(x);
        if !derivative.is_finite() {
            return Err(Error::NonFiniteDerivative { x, derivative });
        }
        if derivative.abs() < config.min_derivative() {
            return Err(Error::DerivativeTooSmall {
                x,
                derivative,
                min_derivative: config.min_derivative(),
            });
        }

        let next = x - point.residual / derivative;
        if !next.is_finite() {
            return Err(Error::NonFiniteStep { x, next });
        }

        history.push(next);
        observer.observe(&Event {
            iter,
            point,
            derivative,
            next,
        });

        if (next - x).abs() < config.tol() {
            return Ok(finish(f, history, Status::Converged)?);
        }
        x = next;
    }

    Ok(finish(f, history, Status::MaxIters)?)
}

/// Finds a root of `f` starting from `x0` without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F, D>(
    f: &F,
    df: &D,
    x0: f64,
    config: &Config,
) -> Result<Solution<f64>, Error>
where
    F: Function + ?Sized,
    D: Function + ?Sized,
{
    solve(f, df, x0, config, ())
}
