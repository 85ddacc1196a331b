//! Solvers for square nonlinear systems `F(x) = 0` with `x ∈ ℝⁿ`.
//!
//! # Solvers
//!
//! - [`newton`]: Newton's method with an analytic or finite-difference
//!   Jacobian and an optional backtracking line search

pub mod newton;
