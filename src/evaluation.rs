//! The propagation entry point: sample, evaluate, aggregate.

#![allow(clippy::cast_precision_loss)]

use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::EvalConfig;
use crate::error::{Error, Result};
use crate::estimate::Estimate;
use crate::expression::Expression;
use crate::sampler;
use crate::statistics;

/// Propagates the input distributions of `expression` through `trials`
/// Monte Carlo evaluations and summarizes the output population.
///
/// Sampling is partitioned into per-leaf, per-block sub-streams derived
/// from `config.seed`, so a fixed configuration reproduces its result
/// bit-for-bit regardless of the degree of parallelism.
///
/// # Errors
/// - [`Error::InvalidTrialCount`], [`Error::InvalidCoverage`],
///   [`Error::InvalidParameter`] for a malformed configuration
/// - [`Error::InsufficientSamples`] when fewer than
///   `config.min_valid_samples` trials produce a finite result
///
/// # Example
/// ```rust
/// use asym_uncertain::{evaluate, EvalConfig, UncertainValue};
///
/// let x = UncertainValue::normal(10.0, 1.0).unwrap();
/// let y = UncertainValue::asymmetric(2.0, 0.3, 0.3).unwrap();
/// let expression = x * y;
///
/// let estimate = evaluate(&expression, &EvalConfig::default().with_seed(42)).unwrap();
/// assert!((estimate.mean - 20.0).abs() < 0.5);
/// assert_eq!(estimate.invalid_fraction, 0.0);
/// ```
pub fn evaluate(expression: &Expression, config: &EvalConfig) -> Result<Estimate> {
    config.validate()?;

    let leaves = expression.leaves();
    debug!(
        trials = config.trials,
        leaves = leaves.len(),
        depth = expression.depth(),
        seed = config.seed,
        "propagating expression"
    );

    let cache = sampler::draw_samples(&leaves, config);

    #[cfg(feature = "parallel")]
    let output: Vec<f64> = (0..config.trials)
        .into_par_iter()
        .map(|trial| expression.eval_trial(&cache, trial))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let output: Vec<f64> = (0..config.trials)
        .map(|trial| expression.eval_trial(&cache, trial))
        .collect();

    aggregate(&output, config)
}

/// Reduces an output sample population to an [`Estimate`].
pub(crate) fn aggregate(output: &[f64], config: &EvalConfig) -> Result<Estimate> {
    let mut valid: Vec<f64> = output.iter().copied().filter(|x| x.is_finite()).collect();
    let invalid_fraction = 1.0 - valid.len() as f64 / output.len() as f64;

    let required = config.required_valid_samples();
    if valid.len() < required {
        return Err(Error::InsufficientSamples {
            valid: valid.len(),
            required,
        });
    }

    let mean = statistics::mean(&valid);
    valid.sort_unstable_by(f64::total_cmp);
    let (lower, upper) = statistics::shortest_coverage(&valid, config.coverage);
    let mode = statistics::mode_within(&valid, lower, upper);

    debug!(
        valid = valid.len(),
        invalid_fraction, mean, lower, upper, "aggregated output population"
    );

    Ok(Estimate {
        mean,
        mode,
        lower,
        upper,
        coverage: config.coverage,
        invalid_fraction,
        valid_trials: valid.len(),
        trials: output.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::UncertainValue;

    fn config() -> EvalConfig {
        EvalConfig::default().with_trials(20_000).with_seed(42)
    }

    #[test]
    fn test_symmetric_normal_recovers_inputs() {
        let x = UncertainValue::normal(10.0, 1.0).unwrap();
        let estimate = evaluate(&x.expr(), &config()).unwrap();

        assert!((estimate.mean - 10.0).abs() < 0.05);
        assert_eq!(estimate.invalid_fraction, 0.0);
        assert_eq!(estimate.valid_trials, 20_000);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let x = UncertainValue::normal(0.0, 1.0).unwrap();
        let err = evaluate(&x.expr(), &config().with_trials(0)).unwrap_err();
        assert_eq!(err, Error::InvalidTrialCount { count: 0 });

        let err = evaluate(&x.expr(), &config().with_coverage(1.5)).unwrap_err();
        assert_eq!(err, Error::InvalidCoverage { value: 1.5 });
    }

    #[test]
    fn test_too_few_trials() {
        let x = UncertainValue::normal(0.0, 1.0).unwrap();
        let err = evaluate(&x.expr(), &config().with_trials(10)).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientSamples {
                valid: 10,
                required: 100
            }
        );
    }

    #[test]
    fn test_aggregate_counts_non_finite() {
        let mut output = vec![1.0; 900];
        output.extend([f64::NAN; 50]);
        output.extend([f64::INFINITY; 25]);
        output.extend([f64::NEG_INFINITY; 25]);

        let estimate = aggregate(&output, &config()).unwrap();
        assert_eq!(estimate.valid_trials, 900);
        assert_eq!(estimate.trials, 1000);
        assert!((estimate.invalid_fraction - 0.1).abs() < 1e-12);
        assert_eq!(estimate.mean, 1.0);
    }

    #[test]
    fn test_aggregate_all_invalid() {
        let output = vec![f64::NAN; 1000];
        let err = aggregate(&output, &config()).unwrap_err();
        assert_eq!(
            err,
            Error::InsufficientSamples {
                valid: 0,
                required: 100
            }
        );
    }

    #[test]
    fn test_fixed_seed_reproduces_estimate() {
        let x = UncertainValue::asymmetric(1.0, 0.2, 0.5).unwrap();
        let y = UncertainValue::uniform(4.0, 1.0, 1.0).unwrap();
        let expression = (x + y) / 2.0;

        let a = evaluate(&expression, &config()).unwrap();
        let b = evaluate(&expression, &config()).unwrap();
        assert_eq!(a, b);
    }
}
