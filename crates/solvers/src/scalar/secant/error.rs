use thiserror::Error;

use crate::scalar::NonFiniteResidual;

/// Errors that can occur during secant solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial guess is non-finite: {x}")]
    NonFiniteGuess { x: f64 },

    #[error(transparent)]
    NonFiniteResidual(#[from] NonFiniteResidual),

    /// The two most recent residuals are too close to form a secant.
    #[error("stagnant secant between x = {previous} and x = {current}: f difference {denominator}")]
    StagnantSecant {
        previous: f64,
        current: f64,
        denominator: f64,
    },

    #[error("non-finite step from x = {x}: next = {next}")]
    NonFiniteStep { x: f64, next: f64 },
}
