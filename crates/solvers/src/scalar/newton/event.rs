use crate::scalar::Point;

/// Event emitted by the Newton solver after each update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The estimate the update started from, with its residual.
    pub point: Point,

    /// The derivative at `point.x`.
    pub derivative: f64,

    /// The updated estimate `x − f(x)/f'(x)`.
    pub next: f64,
}
