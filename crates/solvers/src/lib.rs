//! Classical iterative solvers for nonlinear equations.
//!
//! Every solver runs a bounded loop, records each approximation in a
//! [`History`], and returns a [`Solution`] with the root, residual,
//! iteration count, and full history for convergence analysis.
//!
//! # Modules
//!
//! - [`scalar`]: scalar equations `f(x) = 0`, solved by [`bisection`],
//!   [`newton`], [`secant`], or [`brent`]
//! - [`system`]: systems `F(x) = 0` for `x ∈ ℝⁿ`, solved by a multidimensional
//!   [`Newton`] method with backtracking line search
//! - [`dispatch`]: name-based routing with validated option bags
//!   ([`solve`], [`solve_system`])
//! - [`convergence`]: empirical convergence-order estimates from a history
//!
//! [`History`]: rootline_core::History
//! [`Solution`]: rootline_core::Solution
//! [`bisection`]: scalar::bisection
//! [`newton`]: scalar::newton
//! [`secant`]: scalar::secant
//! [`brent`]: scalar::brent
//! [`Newton`]: system::newton

pub mod convergence;
pub mod dispatch;
pub mod scalar;
pub mod system;

pub use dispatch::{solve, solve_system};
