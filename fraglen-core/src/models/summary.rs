use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Row labels of a [SummaryStatistics] record, in their fixed order.
pub const SUMMARY_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "median", "75%", "max"];

///
/// Sample descriptive statistics of one fragment-length distribution.
///
/// Computed fresh per input table and never mutated afterwards. `std` is always the square
/// root of the Bessel-corrected `variance`.
///
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SummaryStatistics {
    /// Total number of observations
    pub count: u64,
    /// Frequency-weighted arithmetic mean
    pub mean: f64,
    /// Sample standard deviation
    pub std: f64,
    /// Smallest observed value
    pub min: f64,
    /// First quartile
    #[cfg_attr(feature = "serde", serde(rename = "25%"))]
    pub p25: f64,
    pub median: f64,
    /// Third quartile
    #[cfg_attr(feature = "serde", serde(rename = "75%"))]
    pub p75: f64,
    /// Largest observed value
    pub max: f64,
    /// Sample (N - 1) variance; not part of the rendered record
    #[cfg_attr(feature = "serde", serde(skip))]
    pub variance: f64,
}

impl SummaryStatistics {
    ///
    /// The record as `(label, value)` rows in the fixed order
    /// `count, mean, std, min, 25%, median, 75%, max`.
    ///
    pub fn rows(&self) -> [(&'static str, f64); 8] {
        let values = [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.p25,
            self.median,
            self.p75,
            self.max,
        ];

        let mut rows = [("", 0.0); 8];
        for (row, (label, value)) in rows.iter_mut().zip(SUMMARY_LABELS.iter().zip(values)) {
            *row = (*label, value);
        }
        rows
    }
}

impl Display for SummaryStatistics {
    /// Two-column console table, values fixed to two decimals.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (label, value) in self.rows() {
            writeln!(f, "{:<8}{:>12.2}", label, value)?;
        }
        Ok(())
    }
}
