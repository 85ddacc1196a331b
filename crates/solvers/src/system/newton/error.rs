use thiserror::Error;

/// A vector had the wrong length for an `n`-dimensional system.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected a vector of length {expected}, found {found}")]
pub struct DimensionMismatch {
    pub expected: usize,
    pub found: usize,
}

/// Errors that can occur during multidimensional Newton solving.
///
/// `iter` is the iteration in which the failure occurred, with `0` referring
/// to the initial guess.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("initial guess is empty")]
    EmptyGuess,

    #[error("initial guess contains non-finite values")]
    NonFiniteGuess,

    #[error("system output has the wrong dimension: {0}")]
    DimensionMismatch(#[from] DimensionMismatch),

    #[error("jacobian is {rows}x{cols}, expected {expected}x{expected}")]
    JacobianShape {
        rows: usize,
        cols: usize,
        expected: usize,
    },

    #[error("non-finite residual in iteration {iter}")]
    NonFiniteResidual { iter: usize },

    #[error("non-finite jacobian in iteration {iter}")]
    NonFiniteJacobian { iter: usize },

    /// The Jacobian has a zero pivot or is too ill-conditioned to solve.
    #[error("singular jacobian in iteration {iter}: pivot ratio {pivot_ratio:e}")]
    SingularJacobian { iter: usize, pivot_ratio: f64 },

    /// The Newton step or the trial point overflowed.
    #[error("non-finite step in iteration {iter}")]
    NonFiniteStep { iter: usize },

    /// No step length down to the configured minimum satisfied the Armijo
    /// condition.
    #[error("line search stalled in iteration {iter} at alpha = {alpha:e}")]
    LineSearchStalled { iter: usize, alpha: f64 },
}
