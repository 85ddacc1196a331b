//! Reusable observers for the rootline solvers.
//!
//! This crate provides capability traits that abstract over the event types
//! of individual solvers, and observers built on them that work with any
//! solver.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasIter`], [`HasResidual`], [`HasEstimate`])
//! - [`trace`]: [`Trace`], a recorder of per-iteration residuals for
//!   plotting or benchmarking
//! - [`estimates`]: [`Estimates`], a recorder of per-iteration root
//!   estimates with convergence-order analysis
//!
//! [`HasIter`]: traits::HasIter
//! [`HasResidual`]: traits::HasResidual
//! [`HasEstimate`]: traits::HasEstimate

pub mod estimates;
pub mod trace;
pub mod traits;

pub use estimates::Estimates;
pub use trace::{Entry, Trace};
