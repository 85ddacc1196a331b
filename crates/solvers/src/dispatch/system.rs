use std::{fmt, str::FromStr};

use nalgebra::DVector;

use rootline_core::{Jacobian, Solution, System};

use crate::system::newton::{self, ForwardDifference, LineSearch};

use super::{ConfigurationError, Error, Params};

/// System solvers available through [`solve_system`](super::solve_system).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemMethod {
    /// Newton's method with optional backtracking line search.
    Newton,
}

impl SystemMethod {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SystemMethod::Newton => "newton",
        }
    }
}

impl fmt::Display for SystemMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SystemMethod {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "newton" | "newton_system" | "newton-system" => Ok(SystemMethod::Newton),
            _ => Err(ConfigurationError::UnknownMethod(s.to_string())),
        }
    }
}

/// Options recognized by [`solve_system`](super::solve_system).
///
/// Without `jac`, the Jacobian is approximated by forward differences with
/// relative step `fd_step` (default `√ε`). The line search is enabled unless
/// `line_search` is `Some(false)`, in which case `alpha0`, `rho` and `c`
/// must be left unset.
#[derive(Clone, Copy, Default)]
pub struct SystemOptions<'a> {
    /// Analytic Jacobian.
    pub jac: Option<&'a dyn Jacobian>,

    /// Tolerance on both `‖F(x)‖₂` and `‖Δx‖₂`.
    pub tol: Option<f64>,
    pub max_iter: Option<usize>,

    /// Line search parameters.
    pub alpha0: Option<f64>,
    pub rho: Option<f64>,
    pub c: Option<f64>,
    pub line_search: Option<bool>,

    /// Relative finite-difference step.
    pub fd_step: Option<f64>,
}

impl fmt::Debug for SystemOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemOptions")
            .field("jac", &self.jac.map(|_| "<fn>"))
            .field("tol", &self.tol)
            .field("max_iter", &self.max_iter)
            .field("alpha0", &self.alpha0)
            .field("rho", &self.rho)
            .field("c", &self.c)
            .field("line_search", &self.line_search)
            .field("fd_step", &self.fd_step)
            .finish()
    }
}

/// How a validated system call obtains its Jacobian.
#[derive(Clone, Copy)]
pub enum JacobianSource<'a> {
    Analytic(&'a dyn Jacobian),
    ForwardDifference(ForwardDifference),
}

impl fmt::Debug for JacobianSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Analytic(_) => f.write_str("Analytic(<fn>)"),
            Self::ForwardDifference(fd) => f.debug_tuple("ForwardDifference").field(fd).finish(),
        }
    }
}

/// A fully validated system solver call.
#[derive(Debug, Clone, Copy)]
pub struct SystemRequest<'a> {
    pub jacobian: JacobianSource<'a>,
    pub config: newton::Config,
}

impl<'a> SystemRequest<'a> {
    /// Validates `options` for `method`.
    ///
    /// # Errors
    ///
    /// Returns an error if an option conflicts with another or a value is
    /// rejected by the solver's config.
    pub fn from_options(
        method: SystemMethod,
        options: &SystemOptions<'a>,
    ) -> Result<Self, ConfigurationError> {
        let name = method.name();
        let line_search = options.line_search.unwrap_or(true);

        let params = Params::new(
            name,
            [
                ("jac", options.jac.is_some()),
                ("fd_step", options.fd_step.is_some()),
                ("alpha0", options.alpha0.is_some()),
                ("rho", options.rho.is_some()),
                ("c", options.c.is_some()),
            ],
        );
        let jacobian_param = match options.jac {
            Some(_) => "jac",
            None => "fd_step",
        };
        if line_search {
            params.only(&[jacobian_param, "alpha0", "rho", "c"])?;
        } else {
            params.only(&[jacobian_param])?;
        }

        let default = newton::Config::default();
        let mut config = newton::Config::new(
            options.max_iter.unwrap_or(default.max_iters()),
            options.tol.unwrap_or(default.residual_tol()),
        )
        .map_err(|err| ConfigurationError::invalid(name, err))?;

        if line_search {
            let default = LineSearch::default();
            let search = LineSearch::new(
                options.alpha0.unwrap_or(default.alpha0()),
                options.rho.unwrap_or(default.rho()),
                options.c.unwrap_or(default.c()),
            )
            .map_err(|err| ConfigurationError::invalid(name, err))?;
            config = config.with_line_search(Some(search));
        } else {
            config = config.with_line_search(None);
        }

        let jacobian = match (options.jac, options.fd_step) {
            (Some(jac), _) => JacobianSource::Analytic(jac),
            (None, Some(step)) => JacobianSource::ForwardDifference(
                ForwardDifference::new(step, ForwardDifference::default().floor())
                    .map_err(|err| ConfigurationError::invalid(name, err))?,
            ),
            (None, None) => JacobianSource::ForwardDifference(ForwardDifference::default()),
        };

        Ok(Self { jacobian, config })
    }

    /// Runs Newton's method on `system` from `x0`.
    ///
    /// # Errors
    ///
    /// Returns the solver's error, wrapped in [`Error`].
    pub fn solve<S>(&self, system: &S, x0: DVector<f64>) -> Result<Solution<DVector<f64>>, Error>
    where
        S: System + ?Sized,
    {
        let solution = match self.jacobian {
            JacobianSource::Analytic(jac) => {
                newton::solve_unobserved(system, &newton::Analytic(jac), x0, &self.config)?
            }
            JacobianSource::ForwardDifference(fd) => {
                newton::solve_unobserved(system, &fd, x0, &self.config)?
            }
        };
        Ok(solution)
    }
}
