//! Core traits and types for the rootline solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Function`]: a scalar callable `ℝ → ℝ`, used for both `f` and `f'`
//! - [`System`]: a vector callable `ℝⁿ → ℝⁿ`
//! - [`Jacobian`]: an analytic Jacobian callable `ℝⁿ → ℝⁿˣⁿ`
//! - [`Observer`]: receives solver events, one per iteration
//! - [`Solution`], [`History`], [`Status`]: the record every solver returns
//!
//! Closures implement the callable traits directly, so most callers never
//! name them:
//!
//! ```rust
//! use rootline_core::Function;
//!
//! let f = |x: f64| x * x - 2.0;
//! assert_eq!(f.call(2.0), 2.0);
//! ```

mod function;
mod observer;
mod solution;

pub use function::{Function, Jacobian, System};
pub use observer::Observer;
pub use solution::{History, Solution, Status};

pub use nalgebra::{DMatrix, DVector};
