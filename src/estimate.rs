//! Propagation results.

use crate::error::Result;
use crate::rounding::pdg_round;
use crate::value::UncertainValue;

/// Summary of the output sample population of one propagation run.
///
/// `lower` and `upper` bound the shortest interval containing at least
/// `coverage` of the valid samples; `mode` is the most probable value
/// inside that interval. Trials whose result was non-finite never abort a
/// run — they are excluded from the summary and reported through
/// [`Estimate::invalid_fraction`] so callers can judge reliability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Arithmetic mean of the valid samples.
    pub mean: f64,
    /// Most probable value, inside the coverage interval.
    pub mode: f64,
    /// Lower bound of the shortest coverage interval.
    pub lower: f64,
    /// Upper bound of the shortest coverage interval.
    pub upper: f64,
    /// Coverage fraction the interval was computed for.
    pub coverage: f64,
    /// Fraction of trials that produced a non-finite result.
    pub invalid_fraction: f64,
    /// Number of valid trials behind this summary.
    pub valid_trials: usize,
    /// Total number of trials run.
    pub trials: usize,
}

impl Estimate {
    /// Downward uncertainty: distance from the mode to the lower bound.
    #[must_use]
    pub fn sigma_low(&self) -> f64 {
        self.mode - self.lower
    }

    /// Upward uncertainty: distance from the mode to the upper bound.
    #[must_use]
    pub fn sigma_up(&self) -> f64 {
        self.upper - self.mode
    }

    /// Width of the coverage interval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Folds this estimate back into a split-normal [`UncertainValue`] so
    /// propagation results can feed further expressions.
    ///
    /// # Errors
    /// Propagates construction errors for degenerate summaries (e.g. a
    /// non-finite mode).
    pub fn to_value(&self) -> Result<UncertainValue> {
        UncertainValue::asymmetric(
            self.mode,
            self.sigma_low().max(0.0),
            self.sigma_up().max(0.0),
        )
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (mode, sigma_low, sigma_up) = pdg_round(self.mode, self.sigma_low(), self.sigma_up());
        write!(f, "{mode} - {sigma_low} + {sigma_up}")
    }
}
