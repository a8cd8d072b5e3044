//! Rounding of `mean - sigma_low + sigma_up` triples for display.
//!
//! Follows the Particle Data Group recommendation: the smallest nonzero
//! magnitude among the three numbers picks the scale, and its three leading
//! digits decide how many significant digits survive (100-354 keep two,
//! 355-949 keep one, 950-999 round up and keep two).

/// Rounds a `(mean, sigma_low, sigma_up)` triple for display.
///
/// A mean value more than an order of magnitude below the smaller
/// uncertainty displays as zero.
///
/// # Example
/// ```rust
/// use asym_uncertain::rounding::pdg_round;
///
/// assert_eq!(pdg_round(0.827, 0.119, 0.367), (0.83, 0.12, 0.37));
/// assert_eq!(pdg_round(0.827, 0.367, 0.367), (0.8, 0.4, 0.4));
/// ```
#[must_use]
pub fn pdg_round(mean: f64, sigma_low: f64, sigma_up: f64) -> (f64, f64, f64) {
    let mut mean = mean;
    if sigma_low > 0.0 && sigma_up > 0.0 && mean.abs() < 0.1 * sigma_low.min(sigma_up) {
        mean = 0.0;
    }

    if sigma_low == 0.0 && sigma_up == 0.0 {
        return (mean, 0.0, 0.0);
    }

    let smallest = [mean, sigma_low, sigma_up]
        .into_iter()
        .map(f64::abs)
        .filter(|&v| v > 0.0)
        .fold(f64::INFINITY, f64::min);
    if !smallest.is_finite() {
        return (mean, sigma_low, sigma_up);
    }

    let first_digit = smallest.log10().floor();
    let first_three = (smallest * 10f64.powf(-first_digit + 2.0)).round();
    let extra_digits = if (355.0..=949.0).contains(&first_three) {
        0.0
    } else {
        1.0
    };

    let scale = 10f64.powf(-first_digit + extra_digits);
    let round_to_scale = |v: f64| (v * scale).round() / scale;

    (
        round_to_scale(mean),
        round_to_scale(sigma_low),
        round_to_scale(sigma_up),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_significant_digits() {
        assert_eq!(pdg_round(0.827, 0.119, 0.119), (0.83, 0.12, 0.12));
    }

    #[test]
    fn test_one_significant_digit() {
        assert_eq!(pdg_round(0.827, 0.367, 0.367), (0.8, 0.4, 0.4));
    }

    #[test]
    fn test_asymmetric_smaller_uncertainty_decides() {
        assert_eq!(pdg_round(0.827, 0.119, 0.367), (0.83, 0.12, 0.37));
    }

    #[test]
    fn test_mean_is_smallest() {
        assert_eq!(pdg_round(0.827, 0.960, 0.970), (0.8, 1.0, 1.0));
    }

    #[test]
    fn test_negligible_mean_displays_as_zero() {
        assert_eq!(pdg_round(0.00827, 0.960, 0.970), (0.0, 0.96, 0.97));
    }

    #[test]
    fn test_all_zero() {
        assert_eq!(pdg_round(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_exact_value_keeps_mean() {
        assert_eq!(pdg_round(1.23456, 0.0, 0.0), (1.23456, 0.0, 0.0));
    }

    #[test]
    fn test_rounds_up_into_two_digits() {
        assert_eq!(pdg_round(0.0456, 0.123, 0.321), (0.05, 0.12, 0.32));
    }

    #[test]
    fn test_negative_mean() {
        assert_eq!(pdg_round(-0.827, 0.119, 0.119), (-0.83, 0.12, 0.12));
    }
}
