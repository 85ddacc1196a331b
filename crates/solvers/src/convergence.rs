//! Empirical convergence-order estimates from solver histories.
//!
//! Given the errors `e_n = |x_n − x*|` of successive approximations, the
//! order `p` satisfies `e_{n+1} ≈ C·e_nᵖ`. Eliminating `C` between three
//! consecutive errors gives the classical estimate
//!
//! ```text
//! p ≈ log(e_{n+1} / e_n) / log(e_n / e_{n−1})
//! ```
//!
//! Errors at or below a floor are dropped first, since they are dominated
//! by rounding. The median of the remaining estimates is reported.
//!
//! ```rust
//! use rootline_solvers::convergence::{errors, estimate_order};
//! use rootline_solvers::scalar::newton;
//!
//! let f = |x: f64| x * x - 2.0;
//! let df = |x: f64| 2.0 * x;
//! let solution = newton::solve_unobserved(&f, &df, 1.0, &newton::Config::default()).unwrap();
//!
//! let order = estimate_order(&errors(&solution.history, 2.0_f64.sqrt())).unwrap();
//! assert!((order - 2.0).abs() < 0.2);
//! ```

use nalgebra::DVector;
use thiserror::Error;

/// Errors at or below this value are ignored by [`estimate_order`].
pub const DEFAULT_ERROR_FLOOR: f64 = 1e-14;

/// Errors that can occur when estimating a convergence order.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    /// Fewer than three errors lie above the floor.
    #[error("need at least 3 errors above the floor, found {found}")]
    TooFewErrors { found: usize },

    /// Every three-point estimate was degenerate.
    #[error("no finite order estimate could be computed")]
    NoEstimate,
}

/// Returns `|x_n − exact|` for each entry of a scalar history.
#[must_use]
pub fn errors(history: &[f64], exact: f64) -> Vec<f64> {
    history.iter().map(|x| (x - exact).abs()).collect()
}

/// Returns `‖x_n − exact‖₂` for each entry of a vector history.
#[must_use]
pub fn vector_errors(history: &[DVector<f64>], exact: &DVector<f64>) -> Vec<f64> {
    history.iter().map(|x| (x - exact).norm()).collect()
}

/// Estimates the convergence order, ignoring errors at or below
/// [`DEFAULT_ERROR_FLOOR`].
///
/// # Errors
///
/// See [`estimate_order_with_floor`].
pub fn estimate_order(errors: &[f64]) -> Result<f64, OrderError> {
    estimate_order_with_floor(errors, DEFAULT_ERROR_FLOOR)
}

/// Estimates the convergence order, ignoring errors at or below `floor`.
///
/// Returns the median of the finite three-point estimates, taking the upper
/// of the two middle values when their count is even.
///
/// # Errors
///
/// Returns [`OrderError::TooFewErrors`] if fewer than three errors exceed
/// `floor`, or [`OrderError::NoEstimate`] if no estimate is finite.
pub fn estimate_order_with_floor(errors: &[f64], floor: f64) -> Result<f64, OrderError> {
    let usable: Vec<f64> = errors.iter().copied().filter(|&e| e > floor).collect();
    if usable.len() < 3 {
        return Err(OrderError::TooFewErrors {
            found: usable.len(),
        });
    }

    let mut estimates: Vec<f64> = usable
        .windows(3)
        .filter_map(|w| {
            let p = (w[2] / w[1]).ln() / (w[1] / w[0]).ln();
            p.is_finite().then_some(p)
        })
        .collect();

    if estimates.is_empty() {
        return Err(OrderError::NoEstimate);
    }

    estimates.sort_by(f64::total_cmp);
    Ok(estimates[estimates.len() / 2])
}
