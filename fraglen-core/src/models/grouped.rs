use std::fmt::{self, Display};

use crate::errors::{DistributionError, Result};
use crate::models::Frequency;

///
/// GroupedDistribution struct, the representation of an aggregated frequency table:
/// distinct measurement values paired with how many times each was observed.
///
/// Values keep their input order (they may be unsorted); every value is finite, every
/// frequency is a whole, non-negative count and the total count fits in a `u64`.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupedDistribution {
    values: Vec<f64>,
    frequencies: Vec<u64>,
}

impl GroupedDistribution {
    ///
    /// Create a new [GroupedDistribution] from parallel value and frequency columns.
    ///
    /// # Arguments
    /// - values: measurement magnitudes
    /// - frequencies: observation count of each value, same length as `values`
    pub fn try_new<F: Frequency>(values: Vec<f64>, frequencies: &[F]) -> Result<Self> {
        if values.len() != frequencies.len() {
            return Err(DistributionError::LengthMismatch {
                values: values.len(),
                frequencies: frequencies.len(),
            });
        }

        if let Some((index, value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(DistributionError::NonFiniteValue {
                index,
                value: *value,
            });
        }

        let frequencies = frequencies
            .iter()
            .enumerate()
            .map(|(index, f)| f.to_count(index))
            .collect::<Result<Vec<u64>>>()?;

        frequencies
            .iter()
            .enumerate()
            .try_fold(0u64, |total, (index, f)| {
                total
                    .checked_add(*f)
                    .ok_or(DistributionError::CountOverflow { index })
            })?;

        Ok(GroupedDistribution {
            values,
            frequencies,
        })
    }

    ///
    /// Create a new [GroupedDistribution] from `(value, frequency)` pairs.
    ///
    pub fn from_pairs<F, I>(pairs: I) -> Result<Self>
    where
        F: Frequency,
        I: IntoIterator<Item = (f64, F)>,
    {
        let (values, frequencies): (Vec<f64>, Vec<F>) = pairs.into_iter().unzip();
        Self::try_new(values, &frequencies)
    }

    ///
    /// Aggregate a raw list of measurements (one entry per observation) into ascending
    /// `(value, count)` groups.
    ///
    pub fn from_observations<I>(observations: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted: Vec<f64> = observations.into_iter().collect();

        if let Some((index, value)) = sorted.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(DistributionError::NonFiniteValue {
                index,
                value: *value,
            });
        }

        sorted.sort_by(f64::total_cmp);

        let mut values: Vec<f64> = Vec::new();
        let mut frequencies: Vec<u64> = Vec::new();

        for value in sorted {
            match values.last() {
                Some(last) if *last == value => {
                    if let Some(count) = frequencies.last_mut() {
                        *count += 1;
                    }
                }
                _ => {
                    values.push(value);
                    frequencies.push(1);
                }
            }
        }

        Ok(GroupedDistribution {
            values,
            frequencies,
        })
    }

    /// Total number of observations, `N`.
    pub fn total(&self) -> u64 {
        self.frequencies.iter().sum()
    }

    /// Number of groups (rows), including zero-frequency ones.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn frequencies(&self) -> &[u64] {
        &self.frequencies
    }

    ///
    /// Iterate over the `(value, frequency)` groups in stored order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (f64, u64)> + '_ {
        self.values
            .iter()
            .copied()
            .zip(self.frequencies.iter().copied())
    }

    ///
    /// Keep only the groups whose value lies within the inclusive `[min, max]` window.
    /// A missing bound leaves that side open.
    ///
    pub fn retain_range(&mut self, min: Option<f64>, max: Option<f64>) {
        let (values, frequencies): (Vec<f64>, Vec<u64>) = self
            .iter()
            .filter(|(v, _)| min.is_none_or(|lo| *v >= lo) && max.is_none_or(|hi| *v <= hi))
            .unzip();

        self.values = values;
        self.frequencies = frequencies;
    }
}

impl Display for GroupedDistribution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "GroupedDistribution({} groups, {} observations)",
            self.len(),
            self.total()
        )
    }
}
