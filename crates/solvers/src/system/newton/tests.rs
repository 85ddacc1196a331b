use std::f64::consts::FRAC_1_SQRT_2;

use approx::assert_relative_eq;
use nalgebra::{DMatrix, DVector};

use rootline_core::Status;

use super::{
    Analytic, CentralDifference, Config, DimensionMismatch, Error, Event, ForwardDifference,
    solve, solve_unobserved,
};

fn circle_line(x: &DVector<f64>) -> DVector<f64> {
    DVector::from_vec(vec![x[0] * x[0] + x[1] * x[1] - 1.0, x[0] - x[1]])
}

fn circle_line_jacobian(x: &DVector<f64>) -> DMatrix<f64> {
    DMatrix::from_row_slice(2, 2, &[2.0 * x[0], 2.0 * x[1], 1.0, -1.0])
}

fn arctan(x: &DVector<f64>) -> DVector<f64> {
    x.map(f64::atan)
}

fn arctan_jacobian(x: &DVector<f64>) -> DMatrix<f64> {
    DMatrix::from_element(1, 1, 1.0 / (1.0 + x[0] * x[0]))
}

fn guess(values: &[f64]) -> DVector<f64> {
    DVector::from_column_slice(values)
}

fn assert_on_diagonal(root: &DVector<f64>) {
    assert_relative_eq!(root[0], FRAC_1_SQRT_2, epsilon = 1e-10);
    assert_relative_eq!(root[1], FRAC_1_SQRT_2, epsilon = 1e-10);
}

#[test]
fn solves_circle_line_with_analytic_jacobian() {
    let solution = solve_unobserved(
        &circle_line,
        &Analytic(&circle_line_jacobian),
        guess(&[0.8, 0.6]),
        &Config::default(),
    )
    .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_on_diagonal(&solution.root);
    assert!(solution.residual < 1e-10);
    assert_eq!(solution.iters, 4);
    assert_eq!(solution.history.len(), 5);
    assert_eq!(solution.history[0], guess(&[0.8, 0.6]));
}

#[test]
fn solves_circle_line_with_finite_differences() {
    let forward = solve_unobserved(
        &circle_line,
        &ForwardDifference::default(),
        guess(&[0.8, 0.6]),
        &Config::default(),
    )
    .unwrap();
    assert!(forward.converged());
    assert_on_diagonal(&forward.root);

    let central = solve_unobserved(
        &circle_line,
        &CentralDifference::default(),
        guess(&[0.8, 0.6]),
        &Config::default(),
    )
    .unwrap();
    assert!(central.converged());
    assert_on_diagonal(&central.root);
}

#[test]
fn line_search_rescues_a_distant_guess() {
    let mut events = Vec::new();
    let solution = solve(
        &arctan,
        &Analytic(&arctan_jacobian),
        guess(&[10.0]),
        &Config::default(),
        |event: &Event<'_>| events.push((event.alpha, event.backtracks, event.residual_norm)),
    )
    .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root[0], 0.0, epsilon = 1e-9);

    let (alpha, backtracks, _) = events[0];
    assert!(backtracks > 0);
    assert!(alpha < 1.0);

    // Armijo steps never increase the residual.
    for pair in events.windows(2) {
        assert!(pair[1].2 <= pair[0].2);
    }
}

#[test]
fn full_steps_diverge_from_a_distant_guess() {
    let config = Config::new(5, 1e-10).unwrap().with_line_search(None);
    let mut alphas = Vec::new();

    let solution = solve(
        &arctan,
        &Analytic(&arctan_jacobian),
        guess(&[10.0]),
        &config,
        |event: &Event<'_>| alphas.push(event.alpha),
    )
    .unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
    assert_eq!(solution.history.len(), 6);
    assert!(solution.root[0].abs() > 1e6);
    assert!(alphas.iter().all(|&a| (a - 1.0).abs() < f64::EPSILON));
}

#[test]
fn solves_rosenbrock_system() {
    let system = |x: &DVector<f64>| guess(&[10.0 * (x[1] - x[0] * x[0]), 1.0 - x[0]]);
    let jacobian =
        |x: &DVector<f64>| DMatrix::from_row_slice(2, 2, &[-20.0 * x[0], 10.0, -1.0, 0.0]);

    let solution = solve_unobserved(
        &system,
        &Analytic(&jacobian),
        guess(&[-1.2, 1.0]),
        &Config::default(),
    )
    .unwrap();

    assert!(solution.converged());
    assert_relative_eq!(solution.root[0], 1.0, epsilon = 1e-10);
    assert_relative_eq!(solution.root[1], 1.0, epsilon = 1e-10);
}

#[test]
fn exact_guess_needs_no_iterations() {
    let x0 = guess(&[FRAC_1_SQRT_2, FRAC_1_SQRT_2]);
    let solution = solve_unobserved(
        &circle_line,
        &Analytic(&circle_line_jacobian),
        x0.clone(),
        &Config::default(),
    )
    .unwrap();

    assert!(solution.converged());
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.history, vec![x0]);
}

#[test]
fn rejects_singular_jacobian() {
    let system = |x: &DVector<f64>| guess(&[x[0] + x[1] - 1.0, 2.0 * x[0] + 2.0 * x[1] - 3.0]);
    let jacobian = |_x: &DVector<f64>| DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 2.0, 2.0]);

    let result = solve_unobserved(
        &system,
        &Analytic(&jacobian),
        guess(&[0.0, 0.0]),
        &Config::default(),
    );
    assert!(matches!(
        result,
        Err(Error::SingularJacobian { iter: 1, .. })
    ));
}

#[test]
fn rejects_ill_conditioned_jacobian() {
    let jacobian = |_: &DVector<f64>| DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0 + 1e-15]);
    let system = |x: &DVector<f64>| guess(&[x[0] + x[1] - 1.0, x[0] + x[1] - 2.0]);

    let result = solve_unobserved(
        &system,
        &Analytic(&jacobian),
        guess(&[0.0, 0.0]),
        &Config::default(),
    );
    let Err(Error::SingularJacobian { pivot_ratio, .. }) = result else {
        panic!("expected SingularJacobian, got {result:?}");
    };
    assert!(pivot_ratio < 1e-12);
}

#[test]
fn stalls_on_an_uphill_direction() {
    // A Jacobian with the wrong sign makes Δx point away from the root.
    let system = |x: &DVector<f64>| x.clone();
    let jacobian = |_x: &DVector<f64>| DMatrix::from_element(1, 1, -1.0);

    let result = solve_unobserved(
        &system,
        &Analytic(&jacobian),
        guess(&[1.0]),
        &Config::default(),
    );
    let Err(Error::LineSearchStalled { iter, alpha }) = result else {
        panic!("expected LineSearchStalled, got {result:?}");
    };
    assert_eq!(iter, 1);
    assert!(alpha < 1e-10);
}

#[test]
fn validates_the_initial_guess() {
    let jacobian = Analytic(&circle_line_jacobian);

    let result = solve_unobserved(&circle_line, &jacobian, guess(&[]), &Config::default());
    assert!(matches!(result, Err(Error::EmptyGuess)));

    let result = solve_unobserved(
        &circle_line,
        &jacobian,
        guess(&[f64::NAN, 0.0]),
        &Config::default(),
    );
    assert!(matches!(result, Err(Error::NonFiniteGuess)));
}

#[test]
fn rejects_non_square_systems() {
    let system = |x: &DVector<f64>| guess(&[x[0], x[1], x[0] + x[1]]);
    let result = solve_unobserved(
        &system,
        &ForwardDifference::default(),
        guess(&[1.0, 2.0]),
        &Config::default(),
    );
    assert_eq!(
        result,
        Err(Error::DimensionMismatch(DimensionMismatch {
            expected: 2,
            found: 3
        }))
    );

    let wide = |_x: &DVector<f64>| DMatrix::<f64>::zeros(3, 2);
    let result = solve_unobserved(
        &circle_line,
        &Analytic(&wide),
        guess(&[0.8, 0.6]),
        &Config::default(),
    );
    assert!(matches!(
        result,
        Err(Error::JacobianShape {
            rows: 3,
            cols: 2,
            expected: 2
        })
    ));
}

#[test]
fn reports_non_finite_values() {
    let system = |x: &DVector<f64>| x.map(f64::ln);
    let result = solve_unobserved(
        &system,
        &ForwardDifference::default(),
        guess(&[-1.0]),
        &Config::default(),
    );
    assert!(matches!(result, Err(Error::NonFiniteResidual { iter: 0 })));

    let jacobian = |_x: &DVector<f64>| DMatrix::from_element(2, 2, f64::INFINITY);
    let result = solve_unobserved(
        &circle_line,
        &Analytic(&jacobian),
        guess(&[0.8, 0.6]),
        &Config::default(),
    );
    assert!(matches!(result, Err(Error::NonFiniteJacobian { iter: 1 })));
}

#[test]
fn observer_sees_every_step() {
    let mut iterates: Vec<DVector<f64>> = Vec::new();
    let solution = solve(
        &circle_line,
        &Analytic(&circle_line_jacobian),
        guess(&[0.8, 0.6]),
        &Config::default(),
        |event: &Event<'_>| iterates.push(event.x.clone()),
    )
    .unwrap();

    assert_eq!(iterates.len(), solution.iters);
    assert_eq!(iterates.as_slice(), &solution.history[1..]);
}
