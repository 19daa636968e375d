use std::str::FromStr;

use fraglen_core::models::GroupedDistribution;

///
/// How a quantile is read off the cumulative frequencies.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuantileMethod {
    /// Smallest value whose cumulative count reaches `p * N`; never interpolates.
    #[default]
    Lower,
    /// Linear interpolation between the order statistics around `(N - 1) * p`.
    Linear,
}

impl FromStr for QuantileMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lower" => Ok(QuantileMethod::Lower),
            "linear" => Ok(QuantileMethod::Linear),
            _ => Err(format!("Invalid quantile method: {} (expected lower or linear)", s)),
        }
    }
}

///
/// Groups of a distribution sorted by ascending value, with their running
/// (cumulative) observation counts. Zero-frequency groups are dropped: they hold no
/// observations.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SortedGroups {
    values: Vec<f64>,
    frequencies: Vec<u64>,
    cumulative: Vec<u64>,
}

impl SortedGroups {
    pub fn new(dist: &GroupedDistribution) -> Self {
        let mut groups: Vec<(f64, u64)> = dist.iter().filter(|(_, f)| *f > 0).collect();

        // stable, so tied values keep their input order
        groups.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (values, frequencies): (Vec<f64>, Vec<u64>) = groups.into_iter().unzip();

        // the total of a GroupedDistribution fits in a u64
        let cumulative = frequencies
            .iter()
            .scan(0u64, |acc, f| {
                *acc = acc.saturating_add(*f);
                Some(*acc)
            })
            .collect();

        SortedGroups {
            values,
            frequencies,
            cumulative,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn frequencies(&self) -> &[u64] {
        &self.frequencies
    }

    pub fn cumulative(&self) -> &[u64] {
        &self.cumulative
    }

    pub fn total(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    pub fn min(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn max(&self) -> Option<f64> {
        self.values.last().copied()
    }

    ///
    /// Quantile at fraction `p` (0.0 to 1.0) using the given convention.
    /// Returns `None` when there are no observations.
    ///
    pub fn quantile(&self, p: f64, method: QuantileMethod) -> Option<f64> {
        match method {
            QuantileMethod::Lower => self.lower_quantile(p),
            QuantileMethod::Linear => self.linear_quantile(p),
        }
    }

    ///
    /// First value whose cumulative count is at least `p * N` (a left-searching insertion
    /// point into the cumulative counts).
    ///
    pub fn lower_quantile(&self, p: f64) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        let rank = p * self.total() as f64;
        let idx = self.cumulative.partition_point(|&c| (c as f64) < rank);
        Some(self.values[idx.min(self.values.len() - 1)])
    }

    ///
    /// Interpolated quantile of the expanded observations: position `h = (N - 1) * p`,
    /// result `x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])`.
    ///
    pub fn linear_quantile(&self, p: f64) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let h = (total - 1) as f64 * p.clamp(0.0, 1.0);
        let lo = h.floor();
        let lo_rank = lo as u64;
        let hi_rank = (lo_rank + 1).min(total - 1);

        let x_lo = self.order_statistic(lo_rank)?;
        let x_hi = self.order_statistic(hi_rank)?;

        Some(x_lo + (h - lo) * (x_hi - x_lo))
    }

    ///
    /// Value of the observation at zero-based `rank` in the expanded, sorted sequence.
    ///
    pub fn order_statistic(&self, rank: u64) -> Option<f64> {
        let idx = self.cumulative.partition_point(|&c| c <= rank);
        self.values.get(idx).copied()
    }
}
