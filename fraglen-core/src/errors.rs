use thiserror::Error;

/// Failures raised while validating or summarising a grouped distribution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    #[error("values and frequencies differ in length: {values} values, {frequencies} frequencies")]
    LengthMismatch { values: usize, frequencies: usize },

    #[error("negative frequency {frequency} at row {index}")]
    NegativeFrequency { index: usize, frequency: f64 },

    #[error("frequency {frequency} at row {index} is not a whole number of observations")]
    InvalidFrequency { index: usize, frequency: f64 },

    #[error("total observation count overflows at row {index}")]
    CountOverflow { index: usize },

    #[error("value at row {index} is not finite: {value}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("not enough observations: {count} (at least {required} required)")]
    InsufficientData { count: u64, required: u64 },
}

pub type Result<T> = std::result::Result<T, DistributionError>;
