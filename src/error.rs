//! Error types for the asym-uncertain library.
//!
//! Construction-time problems (malformed distribution parameters, bad
//! configuration) surface as [`Error`] values. Per-trial numeric failures do
//! not: they propagate through an evaluation as NaN sentinels and are only
//! reported in aggregate via [`crate::Estimate::invalid_fraction`].

use thiserror::Error;

/// The main error type for the asym-uncertain library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A distribution parameter violates its constraint.
    #[error("invalid parameter '{parameter}': value {value} {constraint}")]
    InvalidParameter {
        /// The name of the parameter
        parameter: &'static str,
        /// The invalid value
        value: f64,
        /// A description of the constraint that was violated
        constraint: &'static str,
    },

    /// A parameter is NaN or infinite where a finite value is required.
    #[error("non-finite parameter '{parameter}': {value}")]
    NonFiniteParameter {
        /// The name of the parameter
        parameter: &'static str,
        /// The non-finite value
        value: f64,
    },

    /// Truncation limits are not strictly increasing.
    #[error("invalid limits: lower bound {lower} must be below upper bound {upper}")]
    InvalidLimits {
        /// The lower limit
        lower: f64,
        /// The upper limit
        upper: f64,
    },

    /// The Monte Carlo trial count is zero.
    #[error("invalid trial count: {count} (must be at least 1)")]
    InvalidTrialCount {
        /// The invalid trial count
        count: usize,
    },

    /// The requested coverage fraction is outside the open interval (0, 1).
    #[error("invalid coverage: {value} (must be in range (0, 1))")]
    InvalidCoverage {
        /// The invalid coverage fraction
        value: f64,
    },

    /// Too few trials produced a valid (finite) result to estimate the
    /// requested coverage interval.
    #[error("insufficient samples: {valid} valid trials, at least {required} required")]
    InsufficientSamples {
        /// Number of valid trials in the output population
        valid: usize,
        /// Configured minimum number of valid trials
        required: usize,
    },
}

/// A specialized `Result` type for uncertainty propagation.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an invalid parameter with its violated constraint.
    pub fn invalid_parameter(
        parameter: &'static str,
        value: f64,
        constraint: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            parameter,
            value,
            constraint,
        }
    }

    /// Create an error for a non-finite parameter.
    pub fn non_finite(parameter: &'static str, value: f64) -> Self {
        Self::NonFiniteParameter { parameter, value }
    }
}
