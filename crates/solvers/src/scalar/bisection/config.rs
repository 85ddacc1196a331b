use thiserror::Error;

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and non-negative")]
    Tol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tol: 1e-8,
        }
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// The solver stops once half the bracket width drops below `tol`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::Tol);
        }
        Ok(Self { max_iters, tol })
    }

    /// Returns the maximum number of bisection steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on half the bracket width.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }
}
