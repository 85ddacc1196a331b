//! Capability traits for cross-solver observers.
//!
//! Each solver emits its own event type. These traits expose the values
//! most events share, so an observer can be written once and used with
//! every solver.
//!
//! - [`HasIter`]: the 1-based iteration number
//! - [`HasResidual`]: the size of the residual seen in the iteration
//! - [`HasEstimate`]: the scalar root estimate after the iteration
//!
//! # Example
//!
//! ```rust
//! use rootline_core::Observer;
//! use rootline_observers::traits::HasResidual;
//! use rootline_solvers::scalar::bisection;
//!
//! struct Smallest(f64);
//!
//! impl<E: HasResidual> Observer<E> for Smallest {
//!     fn observe(&mut self, event: &E) {
//!         self.0 = self.0.min(event.residual().abs());
//!     }
//! }
//!
//! let f = |x: f64| x * x - 2.0;
//! let mut smallest = Smallest(f64::INFINITY);
//! bisection::solve(&f, [1.0, 2.0], &bisection::Config::default(), |e: &bisection::Event| {
//!     smallest.observe(e);
//! })
//! .unwrap();
//!
//! assert!(smallest.0 < 1e-6);
//! ```

use rootline_solvers::{
    scalar::{bisection, brent, newton, secant},
    system,
};

/// An event that carries its iteration number.
pub trait HasIter {
    /// Returns the 1-based iteration number.
    fn iter(&self) -> usize;
}

/// An event that carries a residual.
pub trait HasResidual {
    /// Returns the residual observed in this iteration.
    ///
    /// Scalar solvers report `f` at the point evaluated in the iteration.
    /// The system solver reports `‖F‖₂` at the new iterate.
    fn residual(&self) -> f64;
}

/// An event that carries a scalar root estimate.
pub trait HasEstimate {
    /// Returns the root estimate recorded in the solver history for this
    /// iteration.
    fn estimate(&self) -> f64;
}

impl HasIter for bisection::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasResidual for bisection::Event {
    fn residual(&self) -> f64 {
        self.point.residual
    }
}

impl HasEstimate for bisection::Event {
    fn estimate(&self) -> f64 {
        0.5 * (self.bracket[0] + self.bracket[1])
    }
}

impl HasIter for newton::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.point.residual
    }
}

impl HasEstimate for newton::Event {
    fn estimate(&self) -> f64 {
        self.next
    }
}

impl HasIter for secant::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasResidual for secant::Event {
    fn residual(&self) -> f64 {
        self.current.residual
    }
}

impl HasEstimate for secant::Event {
    fn estimate(&self) -> f64 {
        self.next
    }
}

impl HasIter for brent::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasResidual for brent::Event {
    fn residual(&self) -> f64 {
        self.point.residual
    }
}

impl HasEstimate for brent::Event {
    fn estimate(&self) -> f64 {
        self.best
    }
}

impl HasIter for system::newton::Event<'_> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasResidual for system::newton::Event<'_> {
    fn residual(&self) -> f64 {
        self.residual_norm
    }
}
