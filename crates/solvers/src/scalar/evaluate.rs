use thiserror::Error;

use rootline_core::Function;

/// A point with its evaluated residual `f(x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The residual at x.
    pub residual: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, residual: f64) -> Self {
        Self { x, residual }
    }

    /// Returns true if the residual is exactly zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_root(&self) -> bool {
        self.residual == 0.0
    }
}

/// The function returned NaN or an infinity.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("non-finite residual {residual} at x = {x}")]
pub struct NonFiniteResidual {
    pub x: f64,
    pub residual: f64,
}

/// Evaluates `f` at `x`, rejecting non-finite residuals.
pub(super) fn evaluate<F>(f: &F, x: f64) -> Result<Point, NonFiniteResidual>
where
    F: Function + ?Sized,
{
    let residual = f.call(x);
    if residual.is_finite() {
        Ok(Point::new(x, residual))
    } else {
        Err(NonFiniteResidual { x, residual })
    }
}
