//! Sample descriptive statistics computed straight from grouped data.
//!
//! For a distribution of `N` observations spread over `(value, frequency)` groups:
//!
//! - `mean = sum(v * f) / N`
//! - `variance = (sum(f * v^2) / N - mean^2) * N / (N - 1)`: the population second moment
//!   first, then the Bessel correction
//! - `min` / `max` over the groups that actually hold observations
//! - quartiles read off the cumulative frequencies of the value-sorted groups, see
//!   [QuantileMethod]
//!
//! The result equals the ordinary sample statistics of the expanded observation list, up to
//! floating point rounding.
use fraglen_core::errors::{DistributionError, Result};
use fraglen_core::models::{Frequency, GroupedDistribution, SummaryStatistics};

use crate::quantiles::{QuantileMethod, SortedGroups};

/// Fewest observations for which a sample variance exists.
pub const MIN_OBSERVATIONS: u64 = 2;

///
/// Summarise parallel value and frequency columns, e.g. `insert_size` and
/// `All_Reads.fr_count` of a Picard insert size histogram.
///
/// Quartiles use the lower cumulative-frequency convention.
///
/// # Arguments
/// - values: measurement magnitudes, in any order
/// - frequencies: observation count of each value
pub fn descriptives_from_grouped<F: Frequency>(
    values: &[f64],
    frequencies: &[F],
) -> Result<SummaryStatistics> {
    let dist = GroupedDistribution::try_new(values.to_vec(), frequencies)?;
    describe_grouped(&dist)
}

///
/// Summarise a grouped distribution using the lower cumulative-frequency quartiles.
///
pub fn describe_grouped(dist: &GroupedDistribution) -> Result<SummaryStatistics> {
    describe_grouped_with(dist, QuantileMethod::Lower)
}

///
/// Summarise a grouped distribution with the chosen quantile convention.
///
pub fn describe_grouped_with(
    dist: &GroupedDistribution,
    method: QuantileMethod,
) -> Result<SummaryStatistics> {
    let groups = SortedGroups::new(dist);

    let count = groups.total();
    if count < MIN_OBSERVATIONS {
        return Err(DistributionError::InsufficientData {
            count,
            required: MIN_OBSERVATIONS,
        });
    }
    let n = count as f64;

    let weighted_sum: f64 = groups
        .values()
        .iter()
        .zip(groups.frequencies())
        .map(|(v, &f)| v * f as f64)
        .sum();
    let mean = weighted_sum / n;

    let second_moment: f64 = groups
        .values()
        .iter()
        .zip(groups.frequencies())
        .map(|(v, &f)| f as f64 * v * v)
        .sum::<f64>()
        / n;
    let biased_variance = second_moment - mean * mean;
    let variance = n / (n - 1.0) * biased_variance;
    // E[X^2] - mean^2 can round a hair below zero for constant data
    let variance = variance.max(0.0);
    let std = variance.sqrt();

    // non-empty: count >= 2
    let (Some(min), Some(max), Some(p25), Some(median), Some(p75)) = (
        groups.min(),
        groups.max(),
        groups.quantile(0.25, method),
        groups.quantile(0.50, method),
        groups.quantile(0.75, method),
    ) else {
        return Err(DistributionError::InsufficientData {
            count,
            required: MIN_OBSERVATIONS,
        });
    };

    Ok(SummaryStatistics {
        count,
        mean,
        std,
        min,
        p25,
        median,
        p75,
        max,
        variance,
    })
}

///
/// Summarise a flat list of measurements, one entry per observation.
///
/// The list is aggregated into groups first, so this gives the same answer as
/// [describe_grouped_with] over the equivalent frequency table.
///
pub fn describe_observations<I>(observations: I, method: QuantileMethod) -> Result<SummaryStatistics>
where
    I: IntoIterator<Item = f64>,
{
    let dist = GroupedDistribution::from_observations(observations)?;
    describe_grouped_with(&dist, method)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::Rng;
    use rstest::*;

    use crate::expand::expand_rows;

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= TOLERANCE * scale,
            "{} != {}",
            actual,
            expected
        );
    }

    /// Ordinary (unweighted) sample mean and variance of a flat list.
    fn plain_mean_variance(xs: &[f64]) -> (f64, f64) {
        let n = xs.len() as f64;
        let mean = xs.iter().sum::<f64>() / n;
        let variance = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        (mean, variance)
    }

    /// `x[floor h] + (h - floor h) * (x[floor h + 1] - x[floor h])` with `h = (N - 1) * p`.
    fn interpolated_quantile(sorted: &[f64], p: f64) -> f64 {
        let h = (sorted.len() - 1) as f64 * p;
        let lo = h.floor() as usize;
        let hi = (lo + 1).min(sorted.len() - 1);
        sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
    }

    #[rstest]
    fn test_small_table_statistics() {
        let summary = descriptives_from_grouped(&[1.0, 2.0, 3.0], &[2u32, 1, 1]).unwrap();

        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, 1.75);
        assert_close(summary.variance, 0.6875 * 4.0 / 3.0);
        assert_close(summary.std, 0.9574271077563381);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.p25, 1.0);
        assert_eq!(summary.median, 1.0);
        assert_eq!(summary.p75, 2.0);
        assert_eq!(summary.max, 3.0);
    }

    #[rstest]
    fn test_unsorted_input_is_sorted_first() {
        let sorted = descriptives_from_grouped(&[1.0, 2.0, 3.0], &[2u32, 1, 1]).unwrap();
        let shuffled = descriptives_from_grouped(&[3.0, 1.0, 2.0], &[1u32, 2, 1]).unwrap();
        assert_eq!(sorted.p25, shuffled.p25);
        assert_eq!(sorted.median, shuffled.median);
        assert_eq!(sorted.p75, shuffled.p75);
        assert_eq!(sorted.min, shuffled.min);
        assert_eq!(sorted.max, shuffled.max);
        assert_close(shuffled.mean, sorted.mean);
        assert_close(shuffled.std, sorted.std);
    }

    #[rstest]
    fn test_single_group_is_degenerate_not_an_error() {
        let summary = descriptives_from_grouped(&[5.0], &[10u32]).unwrap();
        assert_eq!(summary.count, 10);
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.std, 0.0);
        assert_eq!(summary.min, 5.0);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.max, 5.0);
    }

    #[rstest]
    fn test_negative_frequency_is_rejected() {
        let result = descriptives_from_grouped(&[1.0, 2.0], &[2i32, -1]);
        assert!(matches!(
            result,
            Err(DistributionError::NegativeFrequency { index: 1, .. })
        ));
    }

    #[rstest]
    #[case(vec![7.0], vec![1u32])]
    #[case(vec![7.0, 8.0], vec![1u32, 0])]
    #[case(vec![], vec![])]
    fn test_insufficient_data(#[case] values: Vec<f64>, #[case] frequencies: Vec<u32>) {
        let result = descriptives_from_grouped(&values, &frequencies);
        assert!(matches!(
            result,
            Err(DistributionError::InsufficientData { required: 2, .. })
        ));
    }

    #[rstest]
    fn test_length_mismatch() {
        let result = descriptives_from_grouped(&[1.0, 2.0, 3.0], &[1u32, 1]);
        assert_eq!(
            result,
            Err(DistributionError::LengthMismatch {
                values: 3,
                frequencies: 2
            })
        );
    }

    #[rstest]
    fn test_zero_frequency_rows_do_not_widen_range() {
        let summary =
            descriptives_from_grouped(&[20.0, 150.0, 167.0, 900.0], &[0u32, 3, 5, 0]).unwrap();
        assert_eq!(summary.min, 150.0);
        assert_eq!(summary.max, 167.0);
        assert_eq!(summary.count, 8);
    }

    #[rstest]
    fn test_linear_quartiles_match_expanded_list() {
        let dist = GroupedDistribution::try_new(vec![1.0, 2.0, 3.0], &[2u32, 1, 1]).unwrap();
        let summary = describe_grouped_with(&dist, QuantileMethod::Linear).unwrap();
        assert_eq!(summary.p25, 1.0);
        assert_eq!(summary.median, 1.5);
        assert_eq!(summary.p75, 2.25);
    }

    #[rstest]
    fn test_describe_observations() {
        let summary =
            describe_observations(vec![3.0, 1.0, 2.0, 1.0], QuantileMethod::Lower).unwrap();
        let grouped = descriptives_from_grouped(&[1.0, 2.0, 3.0], &[2u32, 1, 1]).unwrap();
        assert_eq!(summary.count, grouped.count);
        assert_eq!(summary.median, grouped.median);
        assert_close(summary.mean, grouped.mean);
        assert_close(summary.std, grouped.std);
    }

    #[rstest]
    fn test_matches_expanded_statistics_on_random_tables() {
        let mut rng = rand::rng();

        for _ in 0..50 {
            let groups = rng.random_range(2..40);
            let values: Vec<f64> = (0..groups)
                .map(|_| rng.random_range(30..500) as f64)
                .collect();
            let frequencies: Vec<u64> = (0..groups).map(|_| rng.random_range(0..200)).collect();

            let dist = GroupedDistribution::try_new(values, &frequencies).unwrap();
            if dist.total() < 2 {
                continue;
            }

            let summary = describe_grouped(&dist).unwrap();
            let mut expanded: Vec<f64> = expand_rows(dist.iter()).collect::<Result<_>>().unwrap();
            let (mean, variance) = plain_mean_variance(&expanded);

            assert_eq!(summary.count, expanded.len() as u64);
            assert_eq!(summary.count, frequencies.iter().sum::<u64>());
            assert!((summary.mean - mean).abs() <= 1e-9 * mean.abs().max(1.0));
            assert!((summary.variance - variance).abs() <= 1e-6 * variance.max(1.0));
            assert_eq!(summary.std, summary.variance.sqrt());
            assert!(summary.variance >= 0.0);

            // bracketing and monotonic quartiles
            assert!(expanded.iter().all(|x| summary.min <= *x && *x <= summary.max));
            assert!(summary.min <= summary.p25);
            assert!(summary.p25 <= summary.median);
            assert!(summary.median <= summary.p75);
            assert!(summary.p75 <= summary.max);

            // linear quartiles against direct interpolation over the sorted expansion
            expanded.sort_by(f64::total_cmp);
            let linear = describe_grouped_with(&dist, QuantileMethod::Linear).unwrap();
            assert_close(linear.p25, interpolated_quantile(&expanded, 0.25));
            assert_close(linear.median, interpolated_quantile(&expanded, 0.50));
            assert_close(linear.p75, interpolated_quantile(&expanded, 0.75));
        }
    }

    #[rstest]
    fn test_total_count_overflow_is_an_error() {
        let result = descriptives_from_grouped(&[1.0, 2.0], &[u64::MAX - 1, 5u64]);
        assert_eq!(result, Err(DistributionError::CountOverflow { index: 1 }));
    }
}
