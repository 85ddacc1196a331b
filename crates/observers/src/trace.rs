//! A recorder of per-iteration residuals.

use rootline_core::Observer;

use crate::traits::{HasIter, HasResidual};

/// One recorded iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub iter: usize,
    pub residual: f64,
}

/// Records the iteration number and residual of every event it observes.
///
/// `Trace` works with any solver whose events implement [`HasIter`] and
/// [`HasResidual`]. Because solvers take their observer by value, pass a
/// closure that forwards to the trace:
///
/// ```rust
/// use rootline_core::Observer;
/// use rootline_observers::Trace;
/// use rootline_solvers::scalar::secant;
///
/// let f = |x: f64| x * x - 2.0;
/// let mut trace = Trace::new();
///
/// let solution = secant::solve(&f, [1.0, 2.0], &secant::Config::default(), |e: &secant::Event| {
///     trace.observe(e);
/// })
/// .unwrap();
///
/// assert_eq!(trace.len(), solution.iters);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trace {
    entries: Vec<Entry>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the absolute residuals in iteration order.
    #[must_use]
    pub fn residuals(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.residual.abs()).collect()
    }

    /// Returns the `(iter, |residual|)` pairs with a positive residual,
    /// ready for a logarithmic axis.
    #[must_use]
    pub fn log_points(&self) -> Vec<(usize, f64)> {
        self.entries
            .iter()
            .filter(|e| e.residual != 0.0)
            .map(|e| (e.iter, e.residual.abs().log10()))
            .collect()
    }
}

impl<E: HasIter + HasResidual> Observer<E> for Trace {
    fn observe(&mut self, event: &E) {
        self.entries.push(Entry {
            iter: event.iter(),
            residual: event.residual(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_core::{DMatrix, DVector};
    use rootline_solvers::{
        scalar::{brent, newton},
        system,
    };

    #[test]
    fn records_scalar_iterations_in_order() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;
        let mut trace = Trace::new();

        let observer = |e: &newton::Event| trace.observe(e);
        let solution = newton::solve(&f, &df, 1.0, &newton::Config::default(), observer).unwrap();

        assert_eq!(trace.len(), solution.iters);
        let iters: Vec<usize> = trace.entries().iter().map(|e| e.iter).collect();
        assert_eq!(iters, (1..=solution.iters).collect::<Vec<_>>());

        // Newton evaluates f at each history entry before stepping from it.
        for (entry, x) in trace.entries().iter().zip(&solution.history) {
            assert_relative_eq!(entry.residual, f(*x));
        }
    }

    #[test]
    fn residuals_shrink_for_brent() {
        let f = |x: f64| x.exp() - 2.0;
        let mut trace = Trace::new();

        let observer = |e: &brent::Event| trace.observe(e);
        brent::solve(&f, [0.0, 1.0], &brent::Config::default(), observer).unwrap();

        let residuals = trace.residuals();
        assert!(!trace.is_empty());
        assert!(residuals[residuals.len() - 1] < residuals[0]);
    }

    #[test]
    fn records_system_residual_norms() {
        let system = |x: &DVector<f64>| DVector::from_vec(vec![x[0] * x[0] - 4.0]);
        let jacobian = |x: &DVector<f64>| DMatrix::from_element(1, 1, 2.0 * x[0]);
        let mut trace = Trace::new();

        let solution = system::newton::solve(
            &system,
            &system::newton::Analytic(&jacobian),
            DVector::from_vec(vec![3.0]),
            &system::newton::Config::default(),
            |e: &system::newton::Event<'_>| trace.observe(e),
        )
        .unwrap();

        assert_eq!(trace.len(), solution.iters);
        let last = trace.entries()[trace.len() - 1];
        assert_relative_eq!(last.residual, solution.residual);
    }

    #[test]
    fn log_points_skip_exact_zeros() {
        let mut trace = Trace::new();
        trace.entries.push(Entry {
            iter: 1,
            residual: -100.0,
        });
        trace.entries.push(Entry {
            iter: 2,
            residual: 0.0,
        });

        let points = trace.log_points();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].0, 1);
        assert_relative_eq!(points[0].1, 2.0);
    }
}
