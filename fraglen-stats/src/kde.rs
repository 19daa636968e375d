use std::f64::consts::PI;

use fraglen_core::models::GroupedDistribution;

use crate::descriptives::describe_grouped;
use crate::errors::KdeError;

///
/// Gaussian kernel density estimate over a grouped distribution.
///
/// Each group acts as `frequency` coincident kernels, so the estimate is the one a KDE over
/// the expanded observations would give. The bandwidth follows Scott's rule on the sample
/// standard deviation: `h = std * N^(-1/5)`.
///
#[derive(Debug, Clone)]
pub struct GaussianKde {
    groups: Vec<(f64, f64)>,
    total: f64,
    bandwidth: f64,
}

impl GaussianKde {
    pub fn from_grouped(dist: &GroupedDistribution) -> Result<Self, KdeError> {
        let summary = describe_grouped(dist)?;

        let total = summary.count as f64;
        let bandwidth = summary.std * total.powf(-0.2);
        if bandwidth <= 0.0 {
            return Err(KdeError::ZeroBandwidth);
        }

        let groups = dist
            .iter()
            .filter(|(_, f)| *f > 0)
            .map(|(v, f)| (v, f as f64))
            .collect();

        Ok(GaussianKde {
            groups,
            total,
            bandwidth,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Density at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let h = self.bandwidth;
        let kernel_sum: f64 = self
            .groups
            .iter()
            .map(|(v, w)| {
                let z = (x - v) / h;
                w * (-0.5 * z * z).exp()
            })
            .sum();

        kernel_sum / (self.total * h * (2.0 * PI).sqrt())
    }

    ///
    /// Density at `points` evenly spaced positions from `lo` to `hi` inclusive.
    ///
    pub fn evaluate_grid(&self, lo: f64, hi: f64, points: usize) -> Vec<(f64, f64)> {
        match points {
            0 => Vec::new(),
            1 => vec![(lo, self.evaluate(lo))],
            _ => {
                let step = (hi - lo) / (points - 1) as f64;
                (0..points)
                    .map(|i| {
                        let x = lo + step * i as f64;
                        (x, self.evaluate(x))
                    })
                    .collect()
            }
        }
    }
}
