//! Quantities with asymmetric uncertainty.

use uuid::Uuid;

use crate::distributions::{DistributionKind, Limits};
use crate::error::{Error, Result};
use crate::expression::Expression;
use crate::rounding::pdg_round;

/// A quantity with an asymmetric (or symmetric) uncertainty,
///
/// ```text
/// x = nominal + sigma_up - sigma_low
/// ```
///
/// for example `x = 1.0 + 0.5 - 0.3`. The `[sigma_low, sigma_up]` interval
/// corresponds to the 1-sigma band of the underlying distribution: a
/// symmetric normal, a split normal (independent standard deviations below
/// and above the nominal value), or a uniform span.
///
/// An `UncertainValue` is immutable once constructed. Every constructed
/// value carries a distinct identity; clones and copies share it. Identity
/// drives sample reuse during propagation: every occurrence of the same
/// value in one expression sees the same per-trial draws, so `x - x` is
/// exactly zero in every trial, while two independently constructed values
/// with equal parameters remain uncorrelated.
///
/// # Example
/// ```rust
/// use asym_uncertain::UncertainValue;
///
/// let x = UncertainValue::asymmetric(1.0, 0.3, 0.5).unwrap();
/// assert_eq!(x.nominal(), 1.0);
/// assert!(!x.is_exact());
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UncertainValue {
    nominal: f64,
    sigma_low: f64,
    sigma_up: f64,
    kind: DistributionKind,
    #[cfg_attr(feature = "serde", serde(default))]
    limits: Limits,
    #[cfg_attr(feature = "serde", serde(skip, default = "Uuid::new_v4"))]
    id: Uuid,
}

impl UncertainValue {
    /// Creates a value with the given nominal, uncertainties, and
    /// distribution kind.
    ///
    /// # Errors
    /// - [`Error::NonFiniteParameter`] for NaN or infinite inputs
    /// - [`Error::InvalidParameter`] for negative uncertainties, or unequal
    ///   uncertainties with [`DistributionKind::Normal`]
    pub fn new(
        nominal: f64,
        sigma_low: f64,
        sigma_up: f64,
        kind: DistributionKind,
    ) -> Result<Self> {
        if !nominal.is_finite() {
            return Err(Error::non_finite("nominal", nominal));
        }
        if !sigma_low.is_finite() {
            return Err(Error::non_finite("sigma_low", sigma_low));
        }
        if !sigma_up.is_finite() {
            return Err(Error::non_finite("sigma_up", sigma_up));
        }
        if sigma_low < 0.0 {
            return Err(Error::invalid_parameter(
                "sigma_low",
                sigma_low,
                "must be non-negative",
            ));
        }
        if sigma_up < 0.0 {
            return Err(Error::invalid_parameter(
                "sigma_up",
                sigma_up,
                "must be non-negative",
            ));
        }
        if kind == DistributionKind::Normal && sigma_low != sigma_up {
            return Err(Error::invalid_parameter(
                "sigma_up",
                sigma_up,
                "must equal sigma_low for a symmetric normal",
            ));
        }

        Ok(Self {
            nominal,
            sigma_low,
            sigma_up,
            kind,
            limits: Limits::unbounded(),
            id: Uuid::new_v4(),
        })
    }

    /// Creates a symmetric normal value `nominal ± sigma`.
    ///
    /// # Errors
    /// See [`UncertainValue::new`].
    ///
    /// # Example
    /// ```rust
    /// use asym_uncertain::UncertainValue;
    ///
    /// let measurement = UncertainValue::normal(100.0, 5.0).unwrap();
    /// ```
    pub fn normal(nominal: f64, sigma: f64) -> Result<Self> {
        Self::new(nominal, sigma, sigma, DistributionKind::Normal)
    }

    /// Creates a split-normal value with independent standard deviations
    /// below and above the nominal.
    ///
    /// # Errors
    /// See [`UncertainValue::new`].
    pub fn asymmetric(nominal: f64, sigma_low: f64, sigma_up: f64) -> Result<Self> {
        Self::new(nominal, sigma_low, sigma_up, DistributionKind::SplitNormal)
    }

    /// Creates a value distributed uniformly on
    /// `[nominal - sigma_low, nominal + sigma_up]`.
    ///
    /// # Errors
    /// See [`UncertainValue::new`].
    pub fn uniform(nominal: f64, sigma_low: f64, sigma_up: f64) -> Result<Self> {
        Self::new(nominal, sigma_low, sigma_up, DistributionKind::Uniform)
    }

    /// Creates an exact value: both uncertainties zero. Exact values skip
    /// random sampling entirely.
    ///
    /// # Errors
    /// [`Error::NonFiniteParameter`] for a NaN or infinite nominal.
    pub fn exact(nominal: f64) -> Result<Self> {
        Self::new(nominal, 0.0, 0.0, DistributionKind::Normal)
    }

    /// Returns a truncated variant of this value whose samples are confined
    /// to `[lower, upper]`. The result is a new quantity with its own
    /// identity.
    ///
    /// # Errors
    /// [`Error::InvalidLimits`] for NaN or non-increasing bounds.
    pub fn with_limits(mut self, lower: f64, upper: f64) -> Result<Self> {
        self.limits = Limits::new(lower, upper)?;
        self.id = Uuid::new_v4();
        Ok(self)
    }

    /// The nominal (most probable) value.
    #[must_use]
    pub fn nominal(&self) -> f64 {
        self.nominal
    }

    /// The downward 1-sigma uncertainty.
    #[must_use]
    pub fn sigma_low(&self) -> f64 {
        self.sigma_low
    }

    /// The upward 1-sigma uncertainty.
    #[must_use]
    pub fn sigma_up(&self) -> f64 {
        self.sigma_up
    }

    /// The underlying distribution kind.
    #[must_use]
    pub fn kind(&self) -> DistributionKind {
        self.kind
    }

    /// The truncation limits (unbounded by default).
    #[must_use]
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// The identity of this quantity. Copies share it; independently
    /// constructed values never do.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether both uncertainties are zero.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.sigma_low == 0.0 && self.sigma_up == 0.0
    }

    /// The `(mean, sigma_low, sigma_up)` triple rounded for display
    /// following the Particle Data Group recommendation.
    #[must_use]
    pub fn rounded(&self) -> (f64, f64, f64) {
        pdg_round(self.nominal, self.sigma_low, self.sigma_up)
    }

    /// Lifts this value into a lazy [`Expression`] leaf.
    #[must_use]
    pub fn expr(&self) -> Expression {
        Expression::from(*self)
    }
}

impl std::fmt::Display for UncertainValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (mean, sigma_low, sigma_up) = self.rounded();
        write!(f, "{mean} - {sigma_low} + {sigma_up}")
    }
}
