use thiserror::Error;

/// Configuration for the multidimensional Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
    step_tol: f64,
    line_search: Option<LineSearch>,
    min_pivot_ratio: f64,
}

/// Parameters of the Armijo backtracking line search.
///
/// Each iteration tries `α = alpha0` first and multiplies `α` by `rho` until
///
/// ```text
/// φ(x + αΔx) ≤ φ(x) + c·α·∇φ(x)ᵀΔx,    φ(x) = ½‖F(x)‖²
/// ```
///
/// holds. If `α` drops below `min_alpha` the solve fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearch {
    alpha0: f64,
    rho: f64,
    c: f64,
    min_alpha: f64,
}

/// Errors that can occur when validating a Newton system solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerances must be finite and non-negative")]
    Tol,

    #[error("min_pivot_ratio must be finite and in [0, 1)")]
    MinPivotRatio,

    #[error("alpha0 must be finite and positive")]
    Alpha0,

    #[error("rho must be in (0, 1)")]
    Rho,

    #[error("sufficient decrease constant c must be in (0, 1)")]
    SufficientDecrease,

    #[error("min_alpha must be positive and no larger than alpha0")]
    MinAlpha,

    #[error("finite difference step parameters must be finite and positive")]
    FiniteDifferenceStep,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            residual_tol: 1e-10,
            step_tol: 1e-10,
            line_search: Some(LineSearch::default()),
            min_pivot_ratio: 1e-12,
        }
    }
}

impl Config {
    /// Creates a config using `tol` for both the residual and step tests.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn new(max_iters: usize, tol: f64) -> Result<Self, ConfigError> {
        validate_tol(tol)?;
        Ok(Self {
            max_iters,
            residual_tol: tol,
            step_tol: tol,
            ..Self::default()
        })
    }

    /// Sets the tolerance on `‖F(x)‖₂`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn with_residual_tol(self, tol: f64) -> Result<Self, ConfigError> {
        validate_tol(tol)?;
        Ok(Self {
            residual_tol: tol,
            ..self
        })
    }

    /// Sets the tolerance on `‖x_{k+1} − x_k‖₂`.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is negative or non-finite.
    pub fn with_step_tol(self, tol: f64) -> Result<Self, ConfigError> {
        validate_tol(tol)?;
        Ok(Self {
            step_tol: tol,
            ..self
        })
    }

    /// Enables or disables the line search.
    ///
    /// With `None`, every iteration takes the full Newton step.
    #[must_use]
    pub fn with_line_search(self, line_search: Option<LineSearch>) -> Self {
        Self {
            line_search,
            ..self
        }
    }

    /// Sets the smallest accepted ratio between the smallest and largest
    /// pivot magnitudes of the Jacobian's LU factorization.
    ///
    /// # Errors
    ///
    /// Returns an error if `ratio` is not in `[0, 1)`.
    pub fn with_min_pivot_ratio(self, ratio: f64) -> Result<Self, ConfigError> {
        if !(0.0..1.0).contains(&ratio) {
            return Err(ConfigError::MinPivotRatio);
        }
        Ok(Self {
            min_pivot_ratio: ratio,
            ..self
        })
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    #[must_use]
    pub fn step_tol(&self) -> f64 {
        self.step_tol
    }

    #[must_use]
    pub fn line_search(&self) -> Option<&LineSearch> {
        self.line_search.as_ref()
    }

    #[must_use]
    pub fn min_pivot_ratio(&self) -> f64 {
        self.min_pivot_ratio
    }
}

impl Default for LineSearch {
    fn default() -> Self {
        Self {
            alpha0: 1.0,
            rho: 0.5,
            c: 1e-4,
            min_alpha: 1e-10,
        }
    }
}

impl LineSearch {
    /// Creates line search parameters with the default `min_alpha` of `1e-10`.
    ///
    /// # Errors
    ///
    /// Returns an error if `alpha0` is not positive and finite, if `rho` or
    /// `c` is outside `(0, 1)`, or if `alpha0` is below `min_alpha`.
    pub fn new(alpha0: f64, rho: f64, c: f64) -> Result<Self, ConfigError> {
        if !alpha0.is_finite() || alpha0 <= 0.0 {
            return Err(ConfigError::Alpha0);
        }
        if !(rho > 0.0 && rho < 1.0) {
            return Err(ConfigError::Rho);
        }
        if !(c > 0.0 && c < 1.0) {
            return Err(ConfigError::SufficientDecrease);
        }
        Self {
            alpha0,
            rho,
            c,
            ..Self::default()
        }
        .with_min_alpha(Self::default().min_alpha)
    }

    /// Sets the step length below which the search gives up.
    ///
    /// # Errors
    ///
    /// Returns an error unless `0 < min_alpha <= alpha0`.
    pub fn with_min_alpha(self, min_alpha: f64) -> Result<Self, ConfigError> {
        if !(min_alpha > 0.0 && min_alpha <= self.alpha0) {
            return Err(ConfigError::MinAlpha);
        }
        Ok(Self { min_alpha, ..self })
    }

    #[must_use]
    pub fn alpha0(&self) -> f64 {
        self.alpha0
    }

    #[must_use]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    #[must_use]
    pub fn min_alpha(&self) -> f64 {
        self.min_alpha
    }
}

fn validate_tol(tol: f64) -> Result<(), ConfigError> {
    if tol.is_finite() && tol >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Tol)
    }
}
