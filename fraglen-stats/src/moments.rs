use fraglen_core::errors::{DistributionError, Result};
use fraglen_core::models::GroupedDistribution;

///
/// Adjusted Fisher-Pearson sample skewness (`G1`) of a grouped distribution,
/// `sqrt(N (N - 1)) / (N - 2) * m3 / m2^1.5` with `m2`, `m3` the central moments of the
/// expanded observations. A distribution with no spread has skewness `0.0`.
///
pub fn skewness(dist: &GroupedDistribution) -> Result<f64> {
    let count = dist.total();
    if count < 3 {
        return Err(DistributionError::InsufficientData { count, required: 3 });
    }
    let n = count as f64;

    let mean = dist.iter().map(|(v, f)| v * f as f64).sum::<f64>() / n;

    let (m2, m3) = dist
        .iter()
        .filter(|(_, f)| *f > 0)
        .fold((0.0, 0.0), |(m2, m3), (v, f)| {
            let d = v - mean;
            let w = f as f64;
            (m2 + w * d * d, m3 + w * d * d * d)
        });
    let m2 = m2 / n;
    let m3 = m3 / n;

    if m2 == 0.0 {
        return Ok(0.0);
    }

    Ok((n * (n - 1.0)).sqrt() / (n - 2.0) * m3 / m2.powf(1.5))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_symmetric_distribution_has_zero_skew() {
        let dist = GroupedDistribution::try_new(vec![1.0, 2.0, 3.0], &[2u32, 5, 2]).unwrap();
        assert!(skewness(&dist).unwrap().abs() < 1e-12);
    }

    #[rstest]
    fn test_right_tail_is_positive() {
        // expanded: 1 1 2 3
        let dist = GroupedDistribution::try_new(vec![1.0, 2.0, 3.0], &[2u32, 1, 1]).unwrap();
        let skew = skewness(&dist).unwrap();
        // m2 = 0.6875, m3 = 0.28125
        let expected = (12.0f64).sqrt() / 2.0 * 0.28125 / 0.6875f64.powf(1.5);
        assert!((skew - expected).abs() < 1e-12);
        assert!(skew > 0.0);
    }

    #[rstest]
    fn test_constant_distribution() {
        let dist = GroupedDistribution::try_new(vec![167.0], &[40u32]).unwrap();
        assert_eq!(skewness(&dist).unwrap(), 0.0);
    }

    #[rstest]
    fn test_needs_three_observations() {
        let dist = GroupedDistribution::try_new(vec![1.0, 2.0], &[1u32, 1]).unwrap();
        assert_eq!(
            skewness(&dist),
            Err(DistributionError::InsufficientData {
                count: 2,
                required: 3
            })
        );
    }
}
