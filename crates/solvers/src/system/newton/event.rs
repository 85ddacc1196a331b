use nalgebra::DVector;

/// Event emitted by the Newton system solver after each accepted step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<'a> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The new iterate `x_{k+1}`.
    pub x: &'a DVector<f64>,

    /// `‖F(x_{k+1})‖₂`.
    pub residual_norm: f64,

    /// `‖x_{k+1} − x_k‖₂`.
    pub step_norm: f64,

    /// The accepted step length.
    pub alpha: f64,

    /// How many times the line search shortened the step.
    pub backtracks: usize,
}
