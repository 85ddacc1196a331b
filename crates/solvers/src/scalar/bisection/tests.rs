use std::f64::consts::SQRT_2;

use approx::assert_relative_eq;

use rootline_core::Status;

use crate::scalar::{BracketError, NonFiniteResidual};

use super::{Config, Error, Event, solve, solve_unobserved};

fn quadratic(x: f64) -> f64 {
    x * x - 2.0
}

#[test]
fn finds_square_root_of_two() {
    let solution =
        solve_unobserved(&quadratic, [1.0, 2.0], &Config::default()).expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root, 2.0_f64.sqrt(), epsilon = 1e-8);
    assert_relative_eq!(solution.residual, quadratic(solution.root));
    assert_eq!(solution.history.len(), solution.iters + 1);
    assert_relative_eq!(*solution.history.last().unwrap(), solution.root);
}

#[test]
fn iterations_bounded_by_log_of_width_over_tol() {
    let tol = 1e-8;
    let config = Config::new(100, tol).unwrap();
    let solution = solve_unobserved(&quadratic, [1.0, 2.0], &config).unwrap();

    let bound = (1.0 / tol).log2().ceil();
    #[allow(clippy::cast_precision_loss)]
    let iters = solution.iters as f64;
    assert!(iters <= bound, "{iters} > {bound}");
}

#[test]
fn error_halves_every_step() {
    let root = 2.0_f64.sqrt();
    let solution = solve_unobserved(&quadratic, [0.0, 4.0], &Config::default()).unwrap();

    let mut bound = 2.0;
    for x in &solution.history {
        assert!((x - root).abs() <= bound + 1e-15);
        bound *= 0.5;
    }
}

#[test]
fn accepts_reversed_bracket() {
    let forward = solve_unobserved(&quadratic, [1.0, 2.0], &Config::default()).unwrap();
    let reversed = solve_unobserved(&quadratic, [2.0, 1.0], &Config::default()).unwrap();

    assert_eq!(forward.history, reversed.history);
}

#[test]
fn endpoint_root_returns_immediately() {
    let solution = solve_unobserved(&|x: f64| x - 3.0, [3.0, 7.0], &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.history, vec![3.0]);
    assert_relative_eq!(solution.residual, 0.0);
}

#[test]
fn exact_midpoint_root_stops_without_a_step() {
    let solution = solve_unobserved(&|x: f64| x - 1.0, [0.0, 2.0], &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.history, vec![1.0]);
    assert_relative_eq!(solution.residual, 0.0);
}

#[test]
fn narrow_bracket_converges_without_stepping() {
    let config = Config::new(100, 1e-3).unwrap();
    let bracket = [SQRT_2 - 5e-5, SQRT_2 + 5e-5];
    let solution = solve_unobserved(&quadratic, bracket, &config).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.history, vec![0.5 * (bracket[0] + bracket[1])]);
    assert_relative_eq!(solution.root, SQRT_2, epsilon = 1e-12);
}

#[test]
fn rejects_bracket_without_sign_change() {
    let result = solve_unobserved(&quadratic, [2.0, 3.0], &Config::default());
    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NoSignChange { .. }))
    ));
}

#[test]
fn rejects_non_finite_bracket() {
    let result = solve_unobserved(&quadratic, [f64::NAN, 3.0], &Config::default());
    assert!(matches!(
        result,
        Err(Error::InvalidBracket(BracketError::NonFinite { .. }))
    ));
}

#[test]
fn stops_at_iteration_limit() {
    let config = Config::new(5, 0.0).unwrap();
    let solution = solve_unobserved(&quadratic, [1.0, 2.0], &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert!(!solution.converged());
    assert_eq!(solution.iters, 5);
    assert_eq!(solution.history.len(), 6);
}

#[test]
fn reports_nan_at_midpoint() {
    let f = |x: f64| {
        if x > 0.0 && x < 1.0 {
            f64::NAN
        } else {
            x - 0.5
        }
    };
    let result = solve_unobserved(&f, [0.0, 1.0], &Config::default());

    let Err(Error::NonFiniteResidual(NonFiniteResidual { x, residual })) = result else {
        panic!("expected non-finite residual, got {result:?}");
    };
    assert_relative_eq!(x, 0.5);
    assert!(residual.is_nan());
}

#[test]
fn observer_sees_one_event_per_step() {
    let root = 2.0_f64.sqrt();
    let mut events: Vec<Event> = Vec::new();

    let solution = solve(
        &quadratic,
        [1.0, 2.0],
        &Config::default(),
        |event: &Event| events.push(*event),
    )
    .unwrap();

    assert_eq!(events.len(), solution.iters);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.iter, i + 1);
        let [left, right] = event.bracket;
        assert!(left <= root && root <= right);
        assert_relative_eq!(0.5 * (left + right), solution.history[i + 1]);
    }
}
