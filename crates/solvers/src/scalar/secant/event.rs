use crate::scalar::Point;

/// Event emitted by the secant solver after each update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The older of the two points defining the secant.
    pub previous: Point,

    /// The newer of the two points defining the secant.
    pub current: Point,

    /// Where the secant line crosses zero.
    pub next: f64,
}
