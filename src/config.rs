//! Evaluation configuration.

use crate::error::{Error, Result};

/// Configuration for one propagation run.
///
/// The seed is explicit, never implicit global state: two evaluations of the
/// same expression with the same configuration produce bit-for-bit
/// identical results, with or without the `parallel` feature.
///
/// # Example
/// ```rust
/// use asym_uncertain::EvalConfig;
///
/// let config = EvalConfig::default()
///     .with_trials(50_000)
///     .with_coverage(0.6827)
///     .with_seed(42);
/// assert_eq!(config.trials, 50_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalConfig {
    /// Number of Monte Carlo trials.
    pub trials: usize,
    /// Coverage fraction of the reported interval, in (0, 1).
    pub coverage: f64,
    /// Base seed of the random streams.
    pub seed: u64,
    /// Minimum number of valid (finite) trials required to aggregate.
    /// Values below 2 are treated as 2.
    pub min_valid_samples: usize,
    /// Trials per random sub-stream block. The block layout is part of the
    /// sampling scheme: changing it changes the drawn samples, while the
    /// degree of parallelism never does.
    pub block_size: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            trials: 100_000,
            coverage: 0.95,
            seed: 0,
            min_valid_samples: 100,
            block_size: 8192,
        }
    }
}

impl EvalConfig {
    /// Sets the trial count.
    #[must_use]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the coverage fraction.
    #[must_use]
    pub fn with_coverage(mut self, coverage: f64) -> Self {
        self.coverage = coverage;
        self
    }

    /// Sets the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the minimum number of valid trials.
    #[must_use]
    pub fn with_min_valid_samples(mut self, min_valid_samples: usize) -> Self {
        self.min_valid_samples = min_valid_samples;
        self
    }

    /// Sets the sub-stream block size.
    #[must_use]
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Checks the configuration before a run.
    ///
    /// # Errors
    /// - [`Error::InvalidTrialCount`] for zero trials
    /// - [`Error::InvalidCoverage`] for coverage outside (0, 1)
    /// - [`Error::InvalidParameter`] for a zero block size
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(Error::InvalidTrialCount { count: self.trials });
        }
        if !self.coverage.is_finite() || self.coverage <= 0.0 || self.coverage >= 1.0 {
            return Err(Error::InvalidCoverage {
                value: self.coverage,
            });
        }
        if self.block_size == 0 {
            return Err(Error::invalid_parameter(
                "block_size",
                0.0,
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Effective minimum valid-trial requirement.
    pub(crate) fn required_valid_samples(&self) -> usize {
        self.min_valid_samples.max(2)
    }
}
