use thiserror::Error;

/// Configuration for the scalar Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    tol: f64,
    min_derivative: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and non-negative")]
    Tol,

    #[error("min_derivative must be finite and non-negative")]
    MinDerivative,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            tol: 1e-8,
            min_derivative: 1e-12,
        }
    }
}

impl Config {
    /// Creates a new config with the default derivative floor of `1e-12`.
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

    /// Sets the smallest derivative magnitude the solver will divide by.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_derivative` is negative or non-finite.
    pub fn with_min_derivative(self, min_derivative: f64) -> Result<Self, ConfigError> {
        if !min_derivative.is_finite() || min_derivative < 0.0 {
            return Err(ConfigError::MinDerivative);
        }
        Ok(Self {
            min_derivative,
            ..self
        })
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance on the step `|x_{n+1} − x_n|`.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    #[must_use]
    pub fn min_derivative(&self) -> f64 {
        self.min_derivative
    }
}
