//! # asym-uncertain
//!
//! A Rust library for propagating asymmetric measurement uncertainties
//! through arithmetic expressions with the Monte Carlo method of GUM
//! Supplement 1 (JCGM 101).
//!
//! A quantity `x = 1.0 + 0.5 - 0.3` is modeled as an [`UncertainValue`]
//! whose probability distribution is a split normal: standard deviation
//! 0.3 below the nominal value, 0.5 above it. Arithmetic on uncertain
//! values builds a lazy [`Expression`]; evaluating it samples every input
//! distribution N times, pushes the samples through the expression trial by
//! trial, and summarizes the output population as its mean, most probable
//! value, and shortest coverage interval.
//!
//! ```rust
//! use asym_uncertain::{EvalConfig, UncertainValue};
//!
//! // An efficiency with asymmetric uncertainty and a normally distributed rate.
//! let efficiency = UncertainValue::asymmetric(0.80, 0.05, 0.02).unwrap();
//! let rate = UncertainValue::normal(120.0, 4.0).unwrap();
//!
//! let corrected = rate / efficiency;
//! let estimate = corrected.evaluate(&EvalConfig::default().with_seed(42)).unwrap();
//!
//! assert!(estimate.lower < estimate.mean && estimate.mean < estimate.upper);
//! println!("corrected rate: {estimate}");
//! ```
//!
//! ## Semantics
//!
//! - **Correlated reuse**: every occurrence of the same value in one
//!   expression sees the same per-trial samples, so `x - x` is exactly zero
//!   and `x / x` exactly one, in every trial.
//! - **Per-trial sentinels**: a trial whose result is non-finite (square
//!   root of a negative, division by zero) never aborts the run; it is
//!   dropped from the summary and reported via
//!   [`Estimate::invalid_fraction`].
//! - **Explicit seeding**: all randomness derives from
//!   [`EvalConfig::seed`]. A fixed configuration reproduces its result
//!   bit-for-bit, with or without the `parallel` feature.
//!
//! ## Features
//!
//! - `parallel` — evaluate trial blocks on a rayon thread pool
//! - `serde` — (de)serialize value definitions and configurations

pub mod config;
pub mod distributions;
pub mod error;
pub mod estimate;
pub mod evaluation;
pub mod expression;
mod ops;
pub mod rounding;
pub mod sampler;
pub mod statistics;
pub mod value;

pub use config::EvalConfig;
pub use distributions::{DistributionKind, Limits};
pub use error::{Error, Result};
pub use estimate::Estimate;
pub use evaluation::evaluate;
pub use expression::{BinaryOp, Expression, UnaryFn};
pub use sampler::SampleCache;
pub use value::UncertainValue;
