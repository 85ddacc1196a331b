use thiserror::Error;

use crate::scalar::NonFiniteResidual;

/// Errors that can occur during scalar Newton-Raphson solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The initial guess is NaN or infinite.
    #[error("initial guess is non-finite: {x}")]
    NonFiniteGuess { x: f64 },

    #[error(transparent)]
    NonFiniteResidual(#[from] NonFiniteResidual),

    /// The derivative returned NaN or an infinity.
    #[error("non-finite derivative {derivative} at x = {x}")]
    NonFiniteDerivative { x: f64, derivative: f64 },

    /// The derivative magnitude fell below the configured floor.
    #[error("derivative too small at x = {x}: |{derivative}| < {min_derivative}")]
    DerivativeTooSmall {
        x: f64,
        derivative: f64,
        min_derivative: f64,
    },

    /// The Newton update overflowed.
    #[error("non-finite step from x = {x}: next = {next}")]
    NonFiniteStep { x: f64, next: f64 },
}
