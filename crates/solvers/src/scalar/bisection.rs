//! Bisection method for bracketed scalar roots.
//!
//! # Algorithm
//!
//! Given endpoints whose residuals have opposite signs, bisection evaluates
//! the midpoint and keeps the half interval that still contains a sign
//! change. The bracket halves every step, so the number of steps needed to
//! reach a tolerance `tol` on an interval of width `W` is at most
//! `⌈log₂(W / tol)⌉`.
//!
//! The root estimate is always the midpoint of the current bracket, and its
//! error is bounded by half the bracket width. The solver converges once
//! that bound drops below the configured tolerance, or when a midpoint's
//! residual is exactly zero.
//!
//! # History
//!
//! The first history entry is the midpoint of the initial bracket. Each step
//! appends the midpoint of the shrunken bracket. If an endpoint is an exact
//! root, the history holds only that endpoint.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per step, after the bracket shrinks.

mod config;
mod error;
mod event;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use rootline_core::{Function, History, Observer, Solution, Status};

use super::{
    bracket::{Start, start},
    evaluate::evaluate,
    finish,
};

/// Finds a root of `f` inside `bracket` using bisection.
///
/// The endpoints may be given in either order.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite or has no sign change,
/// or if `f` returns a non-finite value.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<f64>, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event>,
{
    let mut bracket = match start::<F, Error>(f, bracket)? {
        Start::Root(point) => {
            let history = History::new(point.x);
            return Ok(history.finish(Status::Converged, point.residual));
        }
        Start::Bracketed(bracket) => bracket,
    };

    let mut history = History::new(bracket.midpoint());
    if bracket.half_width() < config.tol() {
        return Ok(finish(f, history, Status::Converged)?);
    }

    for iter in 1..=config.max_iters() {
        let point = evaluate(f, bracket.midpoint())?;
        if point.is_root() {
            return Ok(history.finish(Status::Converged, point.residual));
        }

        bracket.shrink(point);
        history.push(bracket.midpoint());

        observer.observe(&Event {
            iter,
            point,
            bracket: bracket.as_array(),
        });

        if bracket.half_width() < config.tol() {
            return Ok(finish(f, history, Status::Converged)?);
        }
    }

    Ok(finish(f, history, Status::MaxIters)?)
}

/// Finds a root of `f` inside `bracket` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is non-finite or has no sign change,
/// or if `f` returns a non-finite value.
pub fn solve_unobserved<F>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<f64>, Error>
where
    F: Function + ?Sized,
{
    solve(f, bracket, config, ())
}
