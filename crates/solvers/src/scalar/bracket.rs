use thiserror::Error;

use rootline_core::Function;

use super::evaluate::{NonFiniteResidual, Point, evaluate};

/// Errors that can occur when validating a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("bracket contains non-finite value: {value}")]
    NonFinite { value: f64 },

    /// Residuals at both endpoints share a strict sign.
    #[error("no sign change: f({left}) = {left_residual}, f({right}) = {right_residual}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Residual is positive (or zero).
    Positive,

    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Ordered finite bounds of a bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [a, b] = bracket;

        for value in [a, b] {
            if !value.is_finite() {
                return Err(BracketError::NonFinite { value });
            }
        }

        if a <= b {
            Ok(Self { left: a, right: b })
        } else {
            Ok(Self { left: b, right: a })
        }
    }
}

/// Evaluated endpoints whose residuals have strictly opposite signs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: Point,
    right: Point,
}

impl Bracket {
    /// Creates a bracket from two evaluated endpoints, `left.x <= right.x`.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if the residuals share a sign.
    fn new(left: Point, right: Point) -> Result<Self, BracketError> {
        if Sign::of(left.residual) == Sign::of(right.residual) {
            return Err(BracketError::NoSignChange {
                left: left.x,
                right: right.x,
                left_residual: left.residual,
                right_residual: right.residual,
            });
        }
        Ok(Self { left, right })
    }

    pub(super) fn left(&self) -> Point {
        self.left
    }

    pub(super) fn right(&self) -> Point {
        self.right
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left.x, self.right.x]
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left.x + self.right.x)
    }

    /// Returns half the bracket width, the error bound of the midpoint.
    pub(super) fn half_width(&self) -> f64 {
        0.5 * (self.right.x - self.left.x)
    }

    /// Shrinks the bracket by replacing the endpoint that shares the sign of
    /// `point`'s residual.
    pub(super) fn shrink(&mut self, point: Point) {
        if Sign::of(point.residual) == Sign::of(self.left.residual) {
            self.left = point;
        } else {
            self.right = point;
        }
    }
}

/// Outcome of evaluating the bracket endpoints.
#[derive(Debug)]
pub(super) enum Start {
    /// One endpoint is an exact root.
    Root(Point),

    /// The endpoints bracket a root.
    Bracketed(Bracket),
}

/// Evaluates both endpoints and checks that they bracket a root.
///
/// Endpoints may be given in either order. If an endpoint is an exact root it
/// is returned immediately; the sign check applies only otherwise.
pub(super) fn start<F, E>(f: &F, bracket: [f64; 2]) -> Result<Start, E>
where
    F: Function + ?Sized,
    E: From<BracketError> + From<NonFiniteResidual>,
{
    let bounds = Bounds::new(bracket)?;

    let left = evaluate(f, bounds.left)?;
    if left.is_root() {
        return Ok(Start::Root(left));
    }

    let right = evaluate(f, bounds.right)?;
    if right.is_root() {
        return Ok(Start::Root(right));
    }

    Ok(Start::Bracketed(Bracket::new(left, right)?))
}
