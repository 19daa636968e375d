use crate::errors::{DistributionError, Result};

///
/// A raw frequency cell, convertible into a whole number of observations.
///
/// Integer types convert directly (signed ones reject negatives). Floating point cells are
/// accepted only when they hold a finite, non-negative whole number: a fractional count is
/// rejected with [DistributionError::InvalidFrequency], never truncated.
///
pub trait Frequency: Copy {
    ///
    /// Convert the cell into an observation count.
    ///
    /// # Arguments
    /// - index: row of the cell, reported back in the error
    fn to_count(self, index: usize) -> Result<u64>;
}

macro_rules! impl_unsigned_frequency {
    ($($t:ty),*) => {
        $(
            impl Frequency for $t {
                fn to_count(self, _index: usize) -> Result<u64> {
                    Ok(self as u64)
                }
            }
        )*
    };
}

macro_rules! impl_signed_frequency {
    ($($t:ty),*) => {
        $(
            impl Frequency for $t {
                fn to_count(self, index: usize) -> Result<u64> {
                    if self < 0 {
                        return Err(DistributionError::NegativeFrequency {
                            index,
                            frequency: self as f64,
                        });
                    }
                    Ok(self as u64)
                }
            }
        )*
    };
}

impl_unsigned_frequency!(u8, u16, u32, u64, usize);
impl_signed_frequency!(i8, i16, i32, i64, isize);

impl Frequency for f64 {
    fn to_count(self, index: usize) -> Result<u64> {
        if self < 0.0 {
            return Err(DistributionError::NegativeFrequency {
                index,
                frequency: self,
            });
        }
        // u64::MAX as f64 rounds up to 2^64, so the bound is exclusive
        if !self.is_finite() || self.fract() != 0.0 || self >= u64::MAX as f64 {
            return Err(DistributionError::InvalidFrequency {
                index,
                frequency: self,
            });
        }
        Ok(self as u64)
    }
}

impl Frequency for f32 {
    fn to_count(self, index: usize) -> Result<u64> {
        f64::from(self).to_count(index)
    }
}
