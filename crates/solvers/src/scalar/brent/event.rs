use crate::scalar::Point;

/// The kind of step Brent's method took in an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Inverse quadratic interpolation through three points.
    Interpolation,

    /// Linear interpolation through two points.
    Secant,

    /// Interpolation was rejected or unavailable.
    Bisection,
}

/// Event emitted by Brent's method after each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The point evaluated during this step.
    pub point: Point,

    /// How the evaluated point was chosen.
    pub step: StepKind,

    /// The bracket after the step, ordered `[left, right]`.
    pub bracket: [f64; 2],

    /// The best estimate after the step, as appended to the history.
    pub best: f64,
}
