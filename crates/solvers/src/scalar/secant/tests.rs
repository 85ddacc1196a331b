use approx::assert_relative_eq;

use rootline_core::Status;

use super::{Config, ConfigError, Error, Event, solve, solve_unobserved};

fn quadratic(x: f64) -> f64 {
    x * x - 2.0
}

#[test]
fn finds_square_root_of_two() {
    let solution = solve_unobserved(&quadratic, [1.0, 2.0], &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert_eq!(solution.iters, 6);
    assert_eq!(solution.history.len(), 7);
    assert_relative_eq!(solution.history[0], 2.0);
    assert_relative_eq!(solution.history[1], 4.0 / 3.0, epsilon = 1e-15);
}

#[test]
fn linear_function_lands_on_the_root() {
    let solution =
        solve_unobserved(&|x: f64| 3.0 * x - 6.0, [0.0, 1.0], &Config::default()).unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.history, vec![1.0, 2.0]);
    assert_relative_eq!(solution.residual, 0.0);
}

#[test]
fn root_at_second_guess_needs_no_update() {
    let solution = solve_unobserved(&|x: f64| x - 1.0, [0.0, 1.0], &Config::default()).unwrap();

    assert_eq!(solution.iters, 0);
    assert_eq!(solution.history, vec![1.0]);
}

#[test]
fn flat_function_stagnates() {
    let result = solve_unobserved(&|_x: f64| 1.0, [0.0, 1.0], &Config::default());
    let Err(Error::StagnantSecant { denominator, .. }) = result else {
        panic!("expected StagnantSecant, got {result:?}");
    };
    assert_relative_eq!(denominator, 0.0);
}

#[test]
fn identical_guesses_stagnate() {
    let result = solve_unobserved(&quadratic, [1.5, 1.5], &Config::default());
    assert!(matches!(result, Err(Error::StagnantSecant { .. })));
}

#[test]
fn stops_at_iteration_limit() {
    let config = Config::new(2, 1e-8).unwrap();
    let solution = solve_unobserved(&quadratic, [1.0, 2.0], &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.history.len(), 3);
    assert_relative_eq!(solution.residual, quadratic(solution.root));
}

#[test]
fn rejects_non_finite_guess() {
    let result = solve_unobserved(&quadratic, [1.0, f64::NAN], &Config::default());
    assert!(matches!(result, Err(Error::NonFiniteGuess { .. })));
}

#[test]
fn rejects_negative_denominator_floor() {
    assert_eq!(
        Config::default().with_min_denominator(-1e-3),
        Err(ConfigError::MinDenominator)
    );
}

#[test]
fn observer_sees_consecutive_secants() {
    let mut events: Vec<Event> = Vec::new();
    let solution = solve(
        &quadratic,
        [1.0, 2.0],
        &Config::default(),
        |event: &Event| events.push(*event),
    )
    .unwrap();

    assert_eq!(events.len(), solution.iters);
    assert_relative_eq!(events[0].previous.x, 1.0);
    assert_relative_eq!(events[0].current.x, 2.0);
    for pair in events.windows(2) {
        assert_relative_eq!(pair[1].previous.x, pair[0].current.x);
        assert_relative_eq!(pair[1].current.x, pair[0].next);
    }
}
