//! Name-based routing to the solvers.
//!
//! [`solve`] and [`solve_system`] take a method name and an option bag,
//! validate that the options supply exactly what the method needs, and run
//! the matching solver. The solver's [`Solution`] is returned unchanged.
//!
//! Validation happens before any solver runs, so a misconfigured call never
//! evaluates the function. The typed forms, [`ScalarMethod`] and
//! [`SystemRequest`], can be built once and reused.
//!
//! ```rust
//! use rootline_solvers::dispatch::{Options, solve};
//!
//! let f = |x: f64| x * x - 2.0;
//! let options = Options {
//!     a: Some(1.0),
//!     b: Some(2.0),
//!     ..Options::default()
//! };
//!
//! let solution = solve("brent", &f, &options).unwrap();
//! assert!((solution.root - 2.0_f64.sqrt()).abs() < 1e-8);
//! ```

mod error;
mod scalar;
mod system;

pub use error::{ConfigurationError, Error};
pub use scalar::{Method, Options, ScalarMethod};
pub use system::{JacobianSource, SystemMethod, SystemOptions, SystemRequest};

use nalgebra::DVector;

use rootline_core::{Function, Solution, System};

/// Solves `f(x) = 0` with the scalar method named `method`.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] if the method is unknown or the
/// options do not match it, and the solver's error otherwise.
pub fn solve<F>(method: &str, f: &F, options: &Options<'_>) -> Result<Solution<f64>, Error>
where
    F: Function + ?Sized,
{
    let method: Method = method.parse()?;
    ScalarMethod::from_options(method, options)?.solve(f)
}

/// Solves `F(x) = 0` with the system method named `method`, starting at `x0`.
///
/// # Errors
///
/// Returns [`Error::InvalidConfiguration`] if the method is unknown or the
/// options do not match it, and the solver's error otherwise.
pub fn solve_system<S>(
    method: &str,
    system: &S,
    x0: DVector<f64>,
    options: &SystemOptions<'_>,
) -> Result<Solution<DVector<f64>>, Error>
where
    S: System + ?Sized,
{
    let method: SystemMethod = method.parse()?;
    SystemRequest::from_options(method, options)?.solve(system, x0)
}

/// The method-specific parameters present in an option bag.
struct Params {
    method: &'static str,
    present: Vec<&'static str>,
}

impl Params {
    fn new(method: &'static str, flags: impl IntoIterator<Item = (&'static str, bool)>) -> Self {
        let present = flags
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect();
        Self { method, present }
    }

    /// Rejects any present parameter not in `allowed`.
    fn only(&self, allowed: &[&'static str]) -> Result<(), ConfigurationError> {
        let unexpected = self.present.iter().find(|&name| !allowed.contains(name));
        match unexpected {
            Some(&parameter) => Err(ConfigurationError::Unexpected {
                method: self.method,
                parameter,
            }),
            None => Ok(()),
        }
    }

    fn require<T>(
        &self,
        parameter: &'static str,
        value: Option<T>,
    ) -> Result<T, ConfigurationError> {
        value.ok_or(ConfigurationError::Missing {
            method: self.method,
            parameter,
        })
    }
}
