use nalgebra::{DMatrix, DVector};

use rootline_core::{Jacobian, System};

use super::{ConfigError, DimensionMismatch};

/// Produces the Jacobian of a system at the current iterate.
///
/// Implementations are called once per Newton iteration and never cache
/// results between calls.
pub trait JacobianStrategy<S: System + ?Sized> {
    /// Returns the Jacobian of `system` at `x`, where `fx = F(x)`.
    ///
    /// # Errors
    ///
    /// Returns an error if an auxiliary evaluation of `system` has the wrong
    /// length.
    fn evaluate(
        &self,
        system: &S,
        x: &DVector<f64>,
        fx: &DVector<f64>,
    ) -> Result<DMatrix<f64>, DimensionMismatch>;
}

/// A Jacobian supplied in closed form.
#[derive(Debug, Clone, Copy)]
pub struct Analytic<'a, J: ?Sized>(pub &'a J);

impl<S, J> JacobianStrategy<S> for Analytic<'_, J>
where
    S: System + ?Sized,
    J: Jacobian + ?Sized,
{
    fn evaluate(
        &self,
        _system: &S,
        x: &DVector<f64>,
        _fx: &DVector<f64>,
    ) -> Result<DMatrix<f64>, DimensionMismatch> {
        Ok(self.0.jacobian(x))
    }
}

/// Forward-difference approximation, one extra system evaluation per column.
///
/// Column `j` is `(F(x + h_j e_j) − F(x)) / h_j` with
/// `h_j = rel_step · max(|x_j|, floor)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardDifference {
    rel_step: f64,
    floor: f64,
}

/// Central-difference approximation, two extra system evaluations per column.
///
/// Column `j` is `(F(x + h_j e_j) − F(x − h_j e_j)) / 2h_j`, with `h_j`
/// chosen as for [`ForwardDifference`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralDifference {
    rel_step: f64,
    floor: f64,
}

impl ForwardDifference {
    /// Creates a forward-difference strategy.
    ///
    /// # Errors
    ///
    /// Returns an error unless both parameters are finite and positive.
    pub fn new(rel_step: f64, floor: f64) -> Result<Self, ConfigError> {
        validate_step(rel_step, floor)?;
        Ok(Self { rel_step, floor })
    }

    #[must_use]
    pub fn rel_step(&self) -> f64 {
        self.rel_step
    }

    #[must_use]
    pub fn floor(&self) -> f64 {
        self.floor
    }
}

impl Default for ForwardDifference {
    /// Uses `rel_step = √ε` and `floor = 1`.
    fn default() -> Self {
        Self {
            rel_step: f64::EPSILON.sqrt(),
            floor: 1.0,
        }
    }
}

impl CentralDifference {
    /// Creates a central-difference strategy.
    ///
    /// # Errors
    ///
    /// Returns an error unless both parameters are finite and positive.
    pub fn new(rel_step: f64, floor: f64) -> Result<Self, ConfigError> {
        validate_step(rel_step, floor)?;
        Ok(Self { rel_step, floor })
    }

    #[must_use]
    pub fn rel_step(&self) -> f64 {
        self.rel_step
    }

    #[must_use]
    pub fn floor(&self) -> f64 {
        self.floor
    }
}

impl Default for CentralDifference {
    /// Uses `rel_step = ∛ε` and `floor = 1`.
    fn default() -> Self {
        Self {
            rel_step: f64::EPSILON.cbrt(),
            floor: 1.0,
        }
    }
}

impl<S: System + ?Sized> JacobianStrategy<S> for ForwardDifference {
    fn evaluate(
        &self,
        system: &S,
        x: &DVector<f64>,
        fx: &DVector<f64>,
    ) -> Result<DMatrix<f64>, DimensionMismatch> {
        let n = x.len();
        let mut jacobian = DMatrix::zeros(fx.len(), n);
        let mut shifted = x.clone();

        for j in 0..n {
            let xj = x[j];
            shifted[j] = xj + self.rel_step * xj.abs().max(self.floor);
            let h = shifted[j] - xj;

            let forward = call(system, &shifted, fx.len())?;
            jacobian.set_column(j, &((forward - fx) / h));
            shifted[j] = xj;
        }

        Ok(jacobian)
    }
}

impl<S: System + ?Sized> JacobianStrategy<S> for CentralDifference {
    fn evaluate(
        &self,
        system: &S,
        x: &DVector<f64>,
        fx: &DVector<f64>,
    ) -> Result<DMatrix<f64>, DimensionMismatch> {
        let n = x.len();
        let mut jacobian = DMatrix::zeros(fx.len(), n);
        let mut shifted = x.clone();

        for j in 0..n {
            let xj = x[j];
            let step = self.rel_step * xj.abs().max(self.floor);

            shifted[j] = xj + step;
            let upper = shifted[j];
            let forward = call(system, &shifted, fx.len())?;

            shifted[j] = xj - step;
            let lower = shifted[j];
            let backward = call(system, &shifted, fx.len())?;

            jacobian.set_column(j, &((forward - backward) / (upper - lower)));
            shifted[j] = xj;
        }

        Ok(jacobian)
    }
}

/// Evaluates `system` at `x`, checking the output length.
fn call<S: System + ?Sized>(
    system: &S,
    x: &DVector<f64>,
    expected: usize,
) -> Result<DVector<f64>, DimensionMismatch> {
    let fx = system.call(x);
    if fx.len() == expected {
        Ok(fx)
    } else {
        Err(DimensionMismatch {
            expected,
            found: fx.len(),
        })
    }
}

fn validate_step(rel_step: f64, floor: f64) -> Result<(), ConfigError> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if valid(rel_step) && valid(floor) {
        Ok(())
    } else {
        Err(ConfigError::FiniteDifferenceStep)
    }
}
