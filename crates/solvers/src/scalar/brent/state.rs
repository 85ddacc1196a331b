use crate::scalar::{Point, bracket::Bracket};

use super::StepKind;

/// Iteration state for Brent's method.
///
/// `best` is the current estimate and `contra` the point whose residual has
/// the opposite sign, so `[best, contra]` always brackets the root and
/// `|f(best)| <= |f(contra)|`. `prev` is the estimate before `best`.
#[derive(Debug, Clone, Copy)]
pub(super) struct State {
    prev: Point,
    best: Point,
    contra: Point,
    step: f64,
    prev_step: f64,
}

impl State {
    pub(super) fn new(bracket: &Bracket) -> Self {
        let (left, right) = (bracket.left(), bracket.right());
        let width = right.x - left.x;

        let mut state = Self {
            prev: left,
            best: right,
            contra: right,
            step: width,
            prev_step: width,
        };
        state.normalize();
        state
    }

    pub(super) fn best(&self) -> Point {
        self.best
    }

    /// Returns the current bracket, ordered `[left, right]`.
    pub(super) fn bracket(&self) -> [f64; 2] {
        let (b, c) = (self.best.x, self.contra.x);
        if b <= c { [b, c] } else { [c, b] }
    }

    pub(super) fn is_converged(&self, tol: f64) -> bool {
        self.half_width().abs() <= self.tol1(tol) || self.best.is_root()
    }

    /// Chooses the next point to evaluate and records the step taken.
    pub(super) fn next_step(&mut self, tol: f64) -> (f64, StepKind) {
        let tol1 = self.tol1(tol);
        let xm = self.half_width();

        let interpolated = if self.prev_step.abs() >= tol1
            && self.prev.residual.abs() > self.best.residual.abs()
        {
            self.interpolate(xm, tol1)
        } else {
            None
        };

        let kind = match interpolated {
            Some((step, kind)) => {
                self.prev_step = self.step;
                self.step = step;
                kind
            }
            None => {
                self.step = xm;
                self.prev_step = xm;
                StepKind::Bisection
            }
        };

        let x = if self.step.abs() > tol1 {
            self.best.x + self.step
        } else {
            self.best.x + tol1.copysign(xm)
        };
        (x, kind)
    }

    /// Accepts a newly evaluated point as the current estimate.
    pub(super) fn advance(&mut self, point: Point) {
        self.prev = self.best;
        self.best = point;
        self.normalize();
    }

    /// Signed distance from `best` to the bracket midpoint.
    fn half_width(&self) -> f64 {
        0.5 * (self.contra.x - self.best.x)
    }

    fn tol1(&self, tol: f64) -> f64 {
        2.0 * f64::EPSILON * self.best.x.abs() + 0.5 * tol
    }

    /// Restores the sign change between `best` and `contra`, then makes
    /// `best` the point with the smaller residual.
    fn normalize(&mut self) {
        if same_strict_sign(self.best.residual, self.contra.residual) {
            self.contra = self.prev;
            self.step = self.best.x - self.prev.x;
            self.prev_step = self.step;
        }

        if self.contra.residual.abs() < self.best.residual.abs() {
            self.prev = self.best;
            self.best = self.contra;
            self.contra = self.prev;
        }
    }

    /// Proposes an interpolation step from `best`, or `None` if it would
    /// leave the bracket or fails to shrink fast enough.
    #[allow(clippy::float_cmp)]
    fn interpolate(&self, xm: f64, tol1: f64) -> Option<(f64, StepKind)> {
        let (a, b, c) = (self.prev, self.best, self.contra);
        let s = b.residual / a.residual;

        let (p, q, kind) = if a.x == c.x || a.residual == c.residual {
            (2.0 * xm * s, 1.0 - s, StepKind::Secant)
        } else {
            let q = a.residual / c.residual;
            let r = b.residual / c.residual;
            (
                s * (2.0 * xm * q * (q - r) - (b.x - a.x) * (r - 1.0)),
                (q - 1.0) * (r - 1.0) * (s - 1.0),
                StepKind::Interpolation,
            )
        };

        let q = if p > 0.0 { -q } else { q };
        let p = p.abs();

        let inside = 2.0 * p < 3.0 * xm * q - (tol1 * q).abs();
        let shrinking = 2.0 * p < (self.prev_step * q).abs();

        (inside && shrinking).then(|| (p / q, kind))
    }
}

fn same_strict_sign(a: f64, b: f64) -> bool {
    (a > 0.0 && b > 0.0) || (a < 0.0 && b < 0.0)
}
