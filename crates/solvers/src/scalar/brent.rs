//! Brent's method for bracketed scalar roots.
//!
//! # Algorithm
//!
//! Brent's method keeps a bracket `[b, c]` around the root, where `b` is the
//! best estimate so far, and on every step tries a fast interpolation:
//!
//! - inverse quadratic interpolation through the last three points, or
//! - a secant step when only two distinct points are available.
//!
//! An interpolated step is accepted only if it lands well inside the bracket
//! and is less than half the size of the step taken two iterations before.
//! Otherwise the solver bisects. The bracket always encloses a sign change,
//! and any run of steps that fails to halve the step size forces a bisection,
//! so the solver converges on every valid bracket. Near a simple root of a
//! smooth function it converges superlinearly. It is not bounded by the
//! bisection step count: near a root of high multiplicity, such as `x^9`,
//! interpolation makes slow progress until a bisection is forced, and the
//! solve can take more iterations than bisection would.
//!
//! The solver converges once half the bracket width is at most
//! `2ε|b| + tol/2`, or when `f(b)` is exactly zero.
//!
//! # History
//!
//! The first history entry is whichever initial endpoint has the smaller
//! residual. Each step appends the best estimate after the bracket update,
//! which can repeat the previous entry when the new point is worse.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per step, reporting the evaluated point,
//! the [`StepKind`] that produced it, the updated bracket and the best
//! estimate.

mod config;
mod error;
mod event;
mod state;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, StepKind};

use rootline_core::{Function, History, Observer, Solution, Status};

use super::{
    bracket::{Start, start},
    evaluate::evaluate,
};

use state::State;

/// Finds a root of `f` inside `bracket` using Brent's method.
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
    let bracket = match start::<F, Error>(f, bracket)? {
        Start::Root(point) => {
            let history = History::new(point.x);
            return Ok(history.finish(Status::Converged, point.residual));
        }
        Start::Bracketed(bracket) => bracket,
    };

    let mut state = State::new(&bracket);
    let mut history = History::new(state.best().x);

    for iter in 1..=config.max_iters() {
        if state.is_converged(config.tol()) {
            return Ok(history.finish(Status::Converged, state.best().residual));
        }

        let (x, step) = state.next_step(config.tol());
        let point = evaluate(f, x)?;
        state.advance(point);
        history.push(state.best().x);

        observer.observe(&Event {
            iter,
            point,
            step,
            bracket: state.bracket(),
            best: state.best().x,
        });
    }

    let status = if state.is_converged(config.tol()) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(history.finish(status, state.best().residual))
}

/// Finds a root of `f` inside `bracket` without observer support.
///
/// # Errors
///
/// See [`solve`].
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
