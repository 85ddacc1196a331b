use nalgebra::{DMatrix, DVector};

use rootline_core::System;

use super::{Error, LineSearch, evaluate};

/// An accepted step `x + αΔx` with its residual.
#[derive(Debug)]
pub(super) struct Step {
    pub(super) x: DVector<f64>,
    pub(super) fx: DVector<f64>,
    pub(super) residual_norm: f64,
    pub(super) alpha: f64,
    pub(super) backtracks: usize,
}

/// Chooses a step length along `dx`.
///
/// Without a line search the full step `α = 1` is taken. Otherwise `α` is
/// backtracked from `alpha0` until the Armijo condition holds on the merit
/// function `φ = ½‖F‖²`, whose directional derivative is `(JᵀF)ᵀΔx`.
pub(super) fn step<S: System + ?Sized>(
    system: &S,
    x: &DVector<f64>,
    fx: &DVector<f64>,
    jacobian: &DMatrix<f64>,
    dx: &DVector<f64>,
    line_search: Option<&LineSearch>,
    iter: usize,
) -> Result<Step, Error> {
    let Some(params) = line_search else {
        return trial(system, x, dx, 1.0, iter).map(|(x, fx)| Step {
            residual_norm: fx.norm(),
            x,
            fx,
            alpha: 1.0,
            backtracks: 0,
        });
    };

    let merit = 0.5 * fx.norm_squared();
    let slope = jacobian.tr_mul(fx).dot(dx);

    let mut alpha = params.alpha0();
    let mut backtracks = 0;

    while alpha >= params.min_alpha() {
        let (x_new, fx_new) = trial(system, x, dx, alpha, iter)?;
        let residual_norm = fx_new.norm();

        if 0.5 * residual_norm * residual_norm <= merit + params.c() * alpha * slope {
            return Ok(Step {
                x: x_new,
                fx: fx_new,
                residual_norm,
                alpha,
                backtracks,
            });
        }

        alpha *= params.rho();
        backtracks += 1;
    }

    Err(Error::LineSearchStalled { iter, alpha })
}

/// Evaluates the trial point `x + αΔx`.
fn trial<S: System + ?Sized>(
    system: &S,
    x: &DVector<f64>,
    dx: &DVector<f64>,
    alpha: f64,
    iter: usize,
) -> Result<(DVector<f64>, DVector<f64>), Error> {
    let candidate = x + dx * alpha;
    if candidate.iter().any(|v| !v.is_finite()) {
        return Err(Error::NonFiniteStep { iter });
    }
    let fx = evaluate(system, &candidate, iter)?;
    Ok((candidate, fx))
}
