use std::{fmt, str::FromStr};

use rootline_core::{Function, Solution};

use crate::scalar::{bisection, brent, newton, secant};

use super::{ConfigurationError, Error, Params};

/// Scalar root-finding methods available through [`solve`](super::solve).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Requires the bracket `a`, `b`.
    Bisection,

    /// Requires the derivative `df` and the guess `x0`.
    Newton,

    /// Requires the guesses `x0`, `x1`.
    Secant,

    /// Requires the bracket `a`, `b`.
    Brent,
}

impl Method {
    /// Returns the canonical lowercase name of the method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Bisection => "bisection",
            Method::Newton => "newton",
            Method::Secant => "secant",
            Method::Brent => "brent",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ConfigurationError;

    /// Parses a method name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bisection" | "bisect" => Ok(Method::Bisection),
            "newton" | "newton_raphson" | "newton-raphson" => Ok(Method::Newton),
            "secant" => Ok(Method::Secant),
            "brent" | "brentq" => Ok(Method::Brent),
            _ => Err(ConfigurationError::UnknownMethod(s.to_string())),
        }
    }
}

/// Options recognized by [`solve`](super::solve).
///
/// Each method requires exactly its own parameters: supplying a parameter
/// the method does not use is an error, like omitting one it needs. `tol`
/// and `max_iter` are accepted by every method and default to the solver's
/// own defaults.
#[derive(Clone, Copy, Default)]
pub struct Options<'a> {
    /// Derivative of `f`, for Newton's method.
    pub df: Option<&'a dyn Function>,

    /// Bracket endpoints, for bisection and Brent.
    pub a: Option<f64>,
    pub b: Option<f64>,

    /// Initial guesses: `x0` for Newton, `x0` and `x1` for secant.
    pub x0: Option<f64>,
    pub x1: Option<f64>,

    pub tol: Option<f64>,
    pub max_iter: Option<usize>,
}

impl fmt::Debug for Options<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("df", &self.df.map(|_| "<fn>"))
            .field("a", &self.a)
            .field("b", &self.b)
            .field("x0", &self.x0)
            .field("x1", &self.x1)
            .field("tol", &self.tol)
            .field("max_iter", &self.max_iter)
            .finish()
    }
}

/// A fully validated scalar solver call.
///
/// Each variant carries exactly the inputs its solver needs.
#[derive(Clone, Copy)]
pub enum ScalarMethod<'a> {
    Bisection {
        bracket: [f64; 2],
        config: bisection::Config,
    },
    Newton {
        df: &'a dyn Function,
        x0: f64,
        config: newton::Config,
    },
    Secant {
        guesses: [f64; 2],
        config: secant::Config,
    },
    Brent {
        bracket: [f64; 2],
        config: brent::Config,
    },
}

impl<'a> ScalarMethod<'a> {
    /// Validates `options` against the parameters `method` requires.
    ///
    /// # Errors
    ///
    /// Returns an error if a required parameter is missing, an unused one is
    /// present, or a tolerance is rejected by the solver's config.
    pub fn from_options(method: Method, options: &Options<'a>) -> Result<Self, ConfigurationError> {
        let name = method.name();
        let params = Params::new(
            name,
            [
                ("df", options.df.is_some()),
                ("a", options.a.is_some()),
                ("b", options.b.is_some()),
                ("x0", options.x0.is_some()),
                ("x1", options.x1.is_some()),
            ],
        );

        match method {
            Method::Bisection => {
                params.only(&["a", "b"])?;
                let default = bisection::Config::default();
                let config = bisection::Config::new(
                    options.max_iter.unwrap_or(default.max_iters()),
                    options.tol.unwrap_or(default.tol()),
                )
                .map_err(|err| ConfigurationError::invalid(name, err))?;

                Ok(Self::Bisection {
                    bracket: [
                        params.require("a", options.a)?,
                        params.require("b", options.b)?,
                    ],
                    config,
                })
            }
            Method::Newton => {
                params.only(&["df", "x0"])?;
                let default = newton::Config::default();
                let config = newton::Config::new(
                    options.max_iter.unwrap_or(default.max_iters()),
                    options.tol.unwrap_or(default.tol()),
                )
                .map_err(|err| ConfigurationError::invalid(name, err))?;

                Ok(Self::Newton {
                    df: params.require("df", options.df)?,
                    x0: params.require("x0", options.x0)?,
                    config,
                })
            }
            Method::Secant => {
                params.only(&["x0", "x1"])?;
                let default = secant::Config::default();
                let config = secant::Config::new(
                    options.max_iter.unwrap_or(default.max_iters()),
                    options.tol.unwrap_or(default.tol()),
                )
                .map_err(|err| ConfigurationError::invalid(name, err))?;

                Ok(Self::Secant {
                    guesses: [
                        params.require("x0", options.x0)?,
                        params.require("x1", options.x1)?,
                    ],
                    config,
                })
            }
            Method::Brent => {
                params.only(&["a", "b"])?;
                let default = brent::Config::default();
                let config = brent::Config::new(
                    options.max_iter.unwrap_or(default.max_iters()),
                    options.tol.unwrap_or(default.tol()),
                )
                .map_err(|err| ConfigurationError::invalid(name, err))?;

                Ok(Self::Brent {
                    bracket: [
                        params.require("a", options.a)?,
                        params.require("b", options.b)?,
                    ],
                    config,
                })
            }
        }
    }

    /// Returns the method this call runs.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::Bisection { .. } => Method::Bisection,
            Self::Newton { .. } => Method::Newton,
            Self::Secant { .. } => Method::Secant,
            Self::Brent { .. } => Method::Brent,
        }
    }

    /// Runs the solver on `f`.
    ///
    /// # Errors
    ///
    /// Returns the solver's error, wrapped in [`Error`].
    pub fn solve<F>(&self, f: &F) -> Result<Solution<f64>, Error>
    where
        F: Function + ?Sized,
    {
        let solution = match *self {
            Self::Bisection { bracket, config } => {
                bisection::solve_unobserved(f, bracket, &config)?
            }
            Self::Newton { df, x0, config } => newton::solve_unobserved(f, df, x0, &config)?,
            Self::Secant { guesses, config } => secant::solve_unobserved(f, guesses, &config)?,
            Self::Brent { bracket, config } => brent::solve_unobserved(f, bracket, &config)?,
        };
        Ok(solution)
    }
}

impl fmt::Debug for ScalarMethod<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bisection { bracket, config } => f
                .debug_struct("Bisection")
                .field("bracket", bracket)
                .field("config", config)
                .finish(),
            Self::Newton { x0, config, .. } => f
                .debug_struct("Newton")
                .field("x0", x0)
                .field("config", config)
                .finish_non_exhaustive(),
            Self::Secant { guesses, config } => f
                .debug_struct("Secant")
                .field("guesses", guesses)
                .field("config", config)
                .finish(),
            Self::Brent { bracket, config } => f
                .debug_struct("Brent")
                .field("bracket", bracket)
                .field("config", config)
                .finish(),
        }
    }
}
