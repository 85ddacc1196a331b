use crate::scalar::Point;

/// Event emitted by the bisection solver after each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The midpoint evaluated during this step.
    pub point: Point,

    /// The bracket after shrinking toward the sign change.
    pub bracket: [f64; 2],
}
