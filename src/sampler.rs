//! Seeded sample streams and the per-run sample cache.
//!
//! Every `(leaf ordinal, trial block)` pair gets its own [`SmallRng`]
//! sub-stream, seeded by a SplitMix64 mix of the configured base seed. No
//! stream is ever shared between blocks, so trial blocks can be filled in
//! any order (or in parallel) and still produce bit-for-bit the sample
//! vectors a sequential fill would.

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use uuid::Uuid;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::EvalConfig;
use crate::distributions;
use crate::value::UncertainValue;

/// SplitMix64 finalizer; decorrelates structured seed inputs.
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Derives the sub-stream seed for one leaf in one trial block.
pub(crate) fn stream_seed(base: u64, leaf_ordinal: u64, block: u64) -> u64 {
    splitmix64(splitmix64(splitmix64(base) ^ leaf_ordinal) ^ block)
}

/// Per-evaluation sample vectors, keyed by value identity.
///
/// Filled once per propagation run; every occurrence of a value in the
/// expression reads the same vector, which is what preserves correlation
/// when a variable feeds into an expression more than once.
#[derive(Debug, Default)]
pub struct SampleCache {
    samples: HashMap<Uuid, Vec<f64>>,
}

impl SampleCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, id: Uuid, samples: Vec<f64>) {
        self.samples.insert(id, samples);
    }

    /// The sample for `trial` of the value with identity `id`. An unknown
    /// identity yields the NaN sentinel rather than a panic.
    #[must_use]
    pub fn sample(&self, id: Uuid, trial: usize) -> f64 {
        self.samples
            .get(&id)
            .and_then(|v| v.get(trial))
            .copied()
            .unwrap_or(f64::NAN)
    }

    /// The full sample vector of the value with identity `id`.
    #[must_use]
    pub fn samples(&self, id: Uuid) -> Option<&[f64]> {
        self.samples.get(&id).map(Vec::as_slice)
    }

    /// Number of cached values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the cache holds no vectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Fills one trial block of a leaf from its dedicated sub-stream.
fn fill_block(value: &UncertainValue, seed: u64, block: &mut [f64]) {
    if value.is_exact() {
        block.fill(value.nominal());
        return;
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    for slot in block {
        *slot = distributions::draw(value, &mut rng);
    }
}

fn fill_leaf(value: &UncertainValue, ordinal: u64, config: &EvalConfig) -> Vec<f64> {
    let mut out = vec![0.0; config.trials];

    #[cfg(feature = "parallel")]
    out.par_chunks_mut(config.block_size)
        .enumerate()
        .for_each(|(block, chunk)| {
            fill_block(value, stream_seed(config.seed, ordinal, block as u64), chunk);
        });

    #[cfg(not(feature = "parallel"))]
    for (block, chunk) in out.chunks_mut(config.block_size).enumerate() {
        fill_block(value, stream_seed(config.seed, ordinal, block as u64), chunk);
    }

    out
}

/// Draws the sample vector of every leaf, one sub-stream per
/// `(leaf, block)`.
pub(crate) fn draw_samples(leaves: &[UncertainValue], config: &EvalConfig) -> SampleCache {
    let mut cache = SampleCache::new();
    for (ordinal, value) in leaves.iter().enumerate() {
        cache.insert(value.id(), fill_leaf(value, ordinal as u64, config));
    }
    cache
}
