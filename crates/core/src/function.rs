use nalgebra::{DMatrix, DVector};

/// A scalar function `f: ℝ → ℝ`.
///
/// Solvers treat functions as pure: the same `x` always yields the same
/// value, and calling it has no side effects the solver depends on.
/// Non-finite return values are reported by the solver as errors.
pub trait Function {
    /// Evaluates the function at `x`.
    fn call(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64 + ?Sized,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}

/// A vector function `F: ℝⁿ → ℝⁿ`.
///
/// The returned vector must have the same length as `x` for Newton's method
/// to form a square linear system.
pub trait System {
    /// Evaluates the residual vector at `x`.
    fn call(&self, x: &DVector<f64>) -> DVector<f64>;
}

impl<F> System for F
where
    F: Fn(&DVector<f64>) -> DVector<f64> + ?Sized,
{
    fn call(&self, x: &DVector<f64>) -> DVector<f64> {
        self(x)
    }
}

/// An analytic Jacobian `J: ℝⁿ → ℝⁿˣⁿ`, where `J[(i, j)] = ∂Fᵢ/∂xⱼ`.
pub trait Jacobian {
    /// Evaluates the Jacobian matrix at `x`.
    fn jacobian(&self, x: &DVector<f64>) -> DMatrix<f64>;
}

impl<F> Jacobian for F
where
    F: Fn(&DVector<f64>) -> DMatrix<f64> + ?Sized,
{
    fn jacobian(&self, x: &DVector<f64>) -> DMatrix<f64> {
        self(x)
    }
}
