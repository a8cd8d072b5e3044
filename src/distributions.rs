//! Probability distribution kinds and per-draw sampling.
//!
//! All sampling goes through an explicit [`Rng`] handed in by the caller;
//! nothing here touches process-global random state.

use rand::Rng;
use std::f64::consts::TAU;

use crate::value::UncertainValue;

/// Redraw budget per trial for truncated distributions. A trial that cannot
/// produce an in-limits draw within this budget becomes a NaN sentinel.
pub(crate) const MAX_REDRAWS: usize = 1000;

/// The probability distribution underlying an [`UncertainValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionKind {
    /// Symmetric normal distribution; requires `sigma_low == sigma_up`.
    Normal,
    /// Piecewise combination of two normal distributions sharing the nominal
    /// value: standard deviation `sigma_low` below it, `sigma_up` above it.
    /// The density is discontinuous at the nominal value unless the two
    /// sigmas agree.
    SplitNormal,
    /// Uniform distribution on `[nominal - sigma_low, nominal + sigma_up]`.
    Uniform,
}

/// Truncation interval for a distribution. Samples outside the interval are
/// redrawn.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    /// Inclusive lower bound
    pub lower: f64,
    /// Inclusive upper bound
    pub upper: f64,
}

impl Limits {
    /// Creates a truncation interval. `lower` must be strictly below
    /// `upper`; either bound may be infinite.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidLimits`] for NaN or non-increasing
    /// bounds.
    pub fn new(lower: f64, upper: f64) -> crate::Result<Self> {
        if lower.is_nan() || upper.is_nan() || lower >= upper {
            return Err(crate::Error::InvalidLimits { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// The unbounded interval `(-inf, inf)`.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
        }
    }

    /// Whether `x` lies within the interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }

    /// Whether the interval imposes no truncation at all.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.lower == f64::NEG_INFINITY && self.upper == f64::INFINITY
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Draws one standard-normal variate via the Box-Muller transform.
pub(crate) fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // 1 - u maps [0, 1) onto (0, 1] so the logarithm stays finite.
    let u1 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Draws one sample from the distribution of `value`, honoring its
/// truncation limits. Exact values return their nominal without consuming
/// the stream. Returns NaN when the redraw budget is exhausted.
pub(crate) fn draw<R: Rng>(value: &UncertainValue, rng: &mut R) -> f64 {
    if value.is_exact() {
        return value.nominal();
    }

    let limits = value.limits();
    if limits.is_unbounded() {
        return draw_unbounded(value, rng);
    }
    for _ in 0..MAX_REDRAWS {
        let x = draw_unbounded(value, rng);
        if limits.contains(x) {
            return x;
        }
    }
    f64::NAN
}

fn draw_unbounded<R: Rng>(value: &UncertainValue, rng: &mut R) -> f64 {
    let nominal = value.nominal();
    match value.kind() {
        DistributionKind::Normal => nominal + value.sigma_up() * standard_normal(rng),
        DistributionKind::SplitNormal => {
            let magnitude = standard_normal(rng).abs();
            if rng.random::<f64>() < 0.5 {
                nominal - magnitude * value.sigma_low()
            } else {
                nominal + magnitude * value.sigma_up()
            }
        }
        DistributionKind::Uniform => {
            let span = value.sigma_low() + value.sigma_up();
            nominal - value.sigma_low() + span * rng.random::<f64>()
        }
    }
}
