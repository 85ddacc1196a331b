//! Secant method for scalar equations.
//!
//! # Algorithm
//!
//! The secant method replaces Newton's derivative with the slope through the
//! two most recent estimates:
//!
//! ```text
//! x_{n+1} = x_n − f(x_n) · (x_n − x_{n−1}) / (f(x_n) − f(x_{n−1}))
//! ```
//!
//! It needs no derivative and no bracket. Near a simple root it converges
//! with order `(1 + √5)/2 ≈ 1.618`, but like Newton it can wander off when
//! started far from a root.
//!
//! # History
//!
//! The history starts at `x1`, the most recent of the two starting points,
//! so every later entry corresponds to exactly one update.
//!
//! # Errors
//!
//! If the two most recent residuals differ by less than
//! [`Config::min_denominator`], the secant is nearly flat and the solver
//! fails with [`Error::StagnantSecant`] instead of dividing.

mod config;
mod error;
mod event;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use rootline_core::{Function, History, Observer, Solution, Status};

use super::{evaluate::evaluate, finish};

/// Finds a root of `f` starting from the two guesses `[x0, x1]`.
///
/// # Errors
///
/// Returns an error if a guess is non-finite, if `f` returns a non-finite
/// value, if the secant stagnates, or if an update overflows.
pub fn solve<F, Obs>(
    f: &F,
    guesses: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<f64>, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event>,
{
    for x in guesses {
        if !x.is_finite() {
            return Err(Error::NonFiniteGuess { x });
        }
    }

    let [x0, x1] = guesses;
    let mut previous = evaluate(f, x0)?;
    let mut current = evaluate(f, x1)?;

    let mut history = History::new(x1);
    if current.is_root() {
        return Ok(history.finish(Status::Converged, current.residual));
    }

    for iter in 1..=config.max_iters() {
        let denominator = current.residual - previous.residual;
        if denominator.abs() < config.min_denominator() {
            return Err(Error::StagnantSecant {
                previous: previous.x,
                current: current.x,
                denominator,
            });
        }

        let next = current.x - current.residual * (current.x - previous.x) / denominator;
        if !next.is_finite() {
            let x = current.x;
            return Err(Error::NonFiniteStep { x, next });
        }

        history.push(next);
        observer.observe(&Event {
            iter,
            previous,
            current,
            next,
        });

        if (next - current.x).abs() < config.tol() {
            return Ok(finish(f, history, Status::Converged)?);
        }

        previous = current;
        current = evaluate(f, next)?;
        if current.is_root() {
            return Ok(history.finish(Status::Converged, current.residual));
        }
    }

    Ok(history.finish(Status::MaxIters, current.residual))
}

/// Finds a root of `f` from two guesses without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F>(
    f: &F,
    guesses: [f64; 2],
    config: &Config,
) -> Result<Solution<f64>, Error>
where
    F: Function + ?Sized,
{
    solve(f, guesses, config, ())
}
