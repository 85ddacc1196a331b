/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,
}

/// The result of a solve.
///
/// `X` is the type of an approximation: `f64` for scalar solvers and
/// `DVector<f64>` for systems.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<X> {
    /// Final solver status.
    pub status: Status,

    /// Final approximation of the root.
    pub root: X,

    /// Residual at the root: `f(root)` for scalar equations,
    /// `‖F(root)‖₂` for systems.
    pub residual: f64,

    /// Number of update steps performed.
    pub iters: usize,

    /// Every approximation in chronological order.
    ///
    /// The first entry is the initial estimate and the last is `root`,
    /// so `history.len() == iters + 1`.
    pub history: Vec<X>,
}

impl<X> Solution<X> {
    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}

/// Append-only record of the approximations produced by a solver.
///
/// A history always holds at least the initial estimate. Each call to
/// [`History::push`] records one update step.
#[derive(Debug, Clone)]
pub struct History<X> {
    entries: Vec<X>,
}

impl<X> History<X> {
    /// Starts a history at the initial estimate.
    #[must_use]
    pub fn new(initial: X) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    /// Records the approximation produced by one update step.
    pub fn push(&mut self, x: X) {
        self.entries.push(x);
    }

    /// Returns the number of update steps recorded so far.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.entries.len() - 1
    }

    /// Returns the most recent approximation.
    #[must_use]
    pub fn latest(&self) -> &X {
        // Never empty: `new` seeds the initial estimate.
        &self.entries[self.entries.len() - 1]
    }

    /// Returns all approximations recorded so far.
    #[must_use]
    pub fn as_slice(&self) -> &[X] {
        &self.entries
    }
}

impl<X: Clone> History<X> {
    /// Finishes the solve, using the latest approximation as the root.
    #[must_use]
    pub fn finish(self, status: Status, residual: f64) -> Solution<X> {
        let root = self.latest().clone();
        Solution {
            status,
            root,
            residual,
            iters: self.iters(),
            history: self.entries,
        }
    }
}
