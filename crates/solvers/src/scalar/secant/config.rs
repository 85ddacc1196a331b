use thiserror::Error;

/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
    min_denominator: f64,
}

/// Errors that can occur when validating a secant solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and non-negative")]
    Tol,

    #[error("min_denominator must be finite and non-negative")]
    MinDenominator,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            tol: 1e-8,
            min_denominator: 1e-14,
        }
    }
}

impl Config {
    /// Creates a new config with the default denominator floor of `1e-14`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::Tol);
        }
        Ok(Self {
            max_iters,
            tol,
            ..Self::default()
        })
    }

    /// Sets the smallest `|f(x_n) − f(x_{n−1})|` the solver will divide by.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_denominator` is negative or non-finite.
    pub fn with_min_denominator(self, min_denominator: f64) -> Result<Self, ConfigError> {
        if !min_denominator.is_finite() || min_denominator < 0.0 {
            return Err(ConfigError::MinDenominator);
        }
        Ok(Self {
            min_denominator,
            ..self
        })
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    #[must_use]
    pub fn min_denominator(&self) -> f64 {
        self.min_denominator
    }
}
