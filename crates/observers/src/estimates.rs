//! A recorder of per-iteration root estimates.

use rootline_core::Observer;
use rootline_solvers::convergence::{OrderError, errors, estimate_order};

use crate::traits::HasEstimate;

/// Records the root estimate of every event it observes.
///
/// The scalar solvers report the same estimate they append to their
/// history, so after a solve the recorded values equal
/// `solution.history[1..]`. That makes the recorder a way to follow
/// convergence while a solve is still running:
///
/// ```rust
/// use rootline_core::Observer;
/// use rootline_observers::Estimates;
/// use rootline_solvers::scalar::brent;
///
/// let f = |x: f64| x * x - 2.0;
/// let mut estimates = Estimates::new();
///
/// let observer = |e: &brent::Event| estimates.observe(e);
/// let solution = brent::solve(&f, [1.0, 2.0], &brent::Config::default(), observer).unwrap();
///
/// assert_eq!(estimates.values(), &solution.history[1..]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Estimates {
    values: Vec<f64>,
}

impl Estimates {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded estimates in iteration order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `|x_k - exact|` for every recorded estimate.
    #[must_use]
    pub fn errors(&self, exact: f64) -> Vec<f64> {
        errors(&self.values, exact)
    }

    /// Estimates the order of convergence towards `exact`.
    ///
    /// # Errors
    ///
    /// Returns an [`OrderError`] when too few estimates remain above the
    /// error floor used by [`estimate_order`].
    pub fn order(&self, exact: f64) -> Result<f64, OrderError> {
        estimate_order(&self.errors(exact))
    }
}

impl<E: HasEstimate> Observer<E> for Estimates {
    fn observe(&mut self, event: &E) {
        self.values.push(event.estimate());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootline_solvers::scalar::{bisection, brent, newton, secant};

    fn quadratic(x: f64) -> f64 {
        x * x - 2.0
    }

    #[test]
    fn newton_estimates_converge_quadratically() {
        let df = |x: f64| 2.0 * x;
        let mut estimates = Estimates::new();

        let observer = |e: &newton::Event| estimates.observe(e);
        let config = newton::Config::default();
        let solution = newton::solve(&quadratic, &df, 1.0, &config, observer).unwrap();

        assert_eq!(estimates.values(), &solution.history[1..]);
        let order = estimates.order(2.0_f64.sqrt()).unwrap();
        assert!((1.8..=2.2).contains(&order), "order {order}");
    }

    #[test]
    fn brent_reports_its_best_estimate() {
        let f = |x: f64| x.exp() - 2.0;
        let mut estimates = Estimates::new();

        let observer = |e: &brent::Event| estimates.observe(e);
        let solution = brent::solve(&f, [0.0, 1.0], &brent::Config::default(), observer).unwrap();

        assert_eq!(estimates.len(), solution.iters);
        assert_eq!(estimates.values(), &solution.history[1..]);
        let last = estimates.values()[estimates.len() - 1];
        assert_relative_eq!(last, 2.0_f64.ln(), epsilon = 1e-8);
    }

    #[test]
    fn bracketing_and_secant_estimates_match_history() {
        let mut estimates = Estimates::new();
        let observer = |e: &bisection::Event| estimates.observe(e);
        let config = bisection::Config::default();
        let solution = bisection::solve(&quadratic, [1.0, 2.0], &config, observer).unwrap();
        assert_eq!(estimates.values(), &solution.history[1..]);

        let mut estimates = Estimates::new();
        let observer = |e: &secant::Event| estimates.observe(e);
        let config = secant::Config::default();
        let solution = secant::solve(&quadratic, [1.0, 2.0], &config, observer).unwrap();
        assert_eq!(estimates.values(), &solution.history[1..]);
    }

    #[test]
    fn errors_are_absolute_distances() {
        let mut estimates = Estimates::new();
        assert!(estimates.is_empty());

        estimates.values.extend([1.5, 0.5]);
        assert_eq!(estimates.errors(1.0), vec![0.5, 0.5]);
    }
}
