use thiserror::Error;

use crate::{scalar, system};

/// A method name or option bag that cannot be turned into a solver call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("unknown method `{0}`")]
    UnknownMethod(String),

    #[error("{method} requires parameter `{parameter}`")]
    Missing {
        method: &'static str,
        parameter: &'static str,
    },

    #[error("{method} does not accept parameter `{parameter}`")]
    Unexpected {
        method: &'static str,
        parameter: &'static str,
    },

    #[error("invalid {method} configuration: {reason}")]
    InvalidValue {
        method: &'static str,
        reason: String,
    },
}

impl ConfigurationError {
    /// Wraps a solver's config validation error.
    pub(super) fn invalid(method: &'static str, err: impl std::error::Error) -> Self {
        Self::InvalidValue {
            method,
            reason: err.to_string(),
        }
    }
}

/// Errors returned by [`solve`](super::solve) and
/// [`solve_system`](super::solve_system).
///
/// Configuration problems are reported before any solver runs. Solver errors
/// pass through unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),

    #[error(transparent)]
    Bisection(#[from] scalar::bisection::Error),

    #[error(transparent)]
    Newton(#[from] scalar::newton::Error),

    #[error(transparent)]
    Secant(#[from] scalar::secant::Error),

    #[error(transparent)]
    Brent(#[from] scalar::brent::Error),

    #[error(transparent)]
    NewtonSystem(#[from] system::newton::Error),
}
