//! Sample-population statistics for the aggregation step.
//!
//! The shortest coverage interval follows GUM Supplement 1: sort the
//! population and slide a window holding `ceil(coverage * M)` samples to
//! minimize its width. The most probable value is the peak of a sqrt-binned
//! histogram of the samples inside that interval.

#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

/// Arithmetic mean.
#[must_use]
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// The shortest interval containing at least `coverage * M` of the sorted
/// samples, as `(lower, upper)`. Ties resolve to the lowest window.
///
/// Callers must pass a non-empty ascending slice and a coverage in `(0, 1]`.
#[must_use]
pub fn shortest_coverage(sorted: &[f64], coverage: f64) -> (f64, f64) {
    let m = sorted.len();
    let window = ((coverage * m as f64).ceil() as usize).clamp(1, m);

    let mut best = (sorted[0], sorted[m - 1]);
    let mut best_width = f64::INFINITY;
    for i in 0..=(m - window) {
        let width = sorted[i + window - 1] - sorted[i];
        if width < best_width {
            best_width = width;
            best = (sorted[i], sorted[i + window - 1]);
        }
    }
    best
}

/// The most probable value of the samples inside `[lower, upper]`,
/// estimated from a histogram with `sqrt(count)` bins. Degenerate
/// (zero-width or empty) intervals return `lower`.
#[must_use]
pub fn mode_within(sorted: &[f64], lower: f64, upper: f64) -> f64 {
    let start = sorted.partition_point(|&x| x < lower);
    let end = sorted.partition_point(|&x| x <= upper);
    let inside = &sorted[start..end];

    let width = upper - lower;
    if inside.is_empty() || width <= 0.0 {
        return lower;
    }

    let bins = (inside.len() as f64).sqrt().ceil() as usize;
    let mut counts = vec![0usize; bins];
    for &x in inside {
        let bin = (((x - lower) / width) * bins as f64) as usize;
        counts[bin.min(bins - 1)] += 1;
    }

    let mut peak = 0;
    for (bin, &count) in counts.iter().enumerate() {
        if count > counts[peak] {
            peak = bin;
        }
    }
    lower + peak as f64 * width / bins as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn test_shortest_coverage_full() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(shortest_coverage(&sorted, 1.0), (1.0, 5.0));
    }

    #[test]
    fn test_shortest_coverage_prefers_dense_region() {
        // Three samples packed at 10, two spread out below.
        let sorted = [0.0, 5.0, 10.0, 10.1, 10.2];
        let (lower, upper) = shortest_coverage(&sorted, 0.6);
        assert_eq!((lower, upper), (10.0, 10.2));
    }

    #[test]
    fn test_shortest_coverage_window_rounds_up() {
        // coverage 0.5 over 5 samples needs ceil(2.5) = 3 samples.
        let sorted = [0.0, 1.0, 2.0, 3.0, 4.0];
        let (lower, upper) = shortest_coverage(&sorted, 0.5);
        assert_eq!(upper - lower, 2.0);
    }

    #[test]
    fn test_shortest_coverage_width_monotone_in_coverage() {
        let sorted: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.7919).sin()).collect();
        let mut sorted = sorted;
        sorted.sort_unstable_by(f64::total_cmp);

        let mut last_width = f64::INFINITY;
        for coverage in [0.99, 0.95, 0.9, 0.6827, 0.5, 0.1] {
            let (lower, upper) = shortest_coverage(&sorted, coverage);
            let width = upper - lower;
            assert!(width <= last_width);
            last_width = width;
        }
    }

    #[test]
    fn test_shortest_coverage_constant_population() {
        let sorted = [2.0; 50];
        assert_eq!(shortest_coverage(&sorted, 0.95), (2.0, 2.0));
    }

    #[test]
    fn test_mode_within_picks_dense_bin() {
        let mut samples: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
        samples.extend(std::iter::repeat(0.505).take(100));
        samples.sort_unstable_by(f64::total_cmp);

        let mode = mode_within(&samples, 0.0, 1.0);
        assert!((mode - 0.5).abs() < 0.1);
    }

    #[test]
    fn test_mode_within_degenerate_interval() {
        let sorted = [1.0, 1.0, 1.0];
        assert_eq!(mode_within(&sorted, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_mode_within_empty_slice() {
        let sorted = [1.0, 2.0];
        assert_eq!(mode_within(&sorted, 5.0, 6.0), 5.0);
    }
}
