//! Frequency-weighted statistics for fragment-length distributions.
//!
//! This crate computes sample descriptive statistics directly from grouped
//! `(value, frequency)` data, giving exactly what the ordinary statistics of the expanded
//! observations would give, without materialising one row per observation:
//!
//! - [descriptives]: count, mean, sample std, min, quartiles, median and max
//! - [quantiles]: the lower cumulative-frequency quantile and the interpolated one
//! - [expand]: the inverse transform, a lazy one-row-per-observation stream
//! - [moments]: sample skewness
//! - [kde]: Gaussian kernel density estimate over the grouped data
//!
//! # Example
//!
//! ```
//! use fraglen_stats::descriptives::descriptives_from_grouped;
//!
//! let summary = descriptives_from_grouped(&[1.0, 2.0, 3.0], &[2, 1, 1]).unwrap();
//! assert_eq!(summary.count, 4);
//! assert_eq!(summary.mean, 1.75);
//! assert_eq!(summary.median, 1.0);
//! ```
pub mod descriptives;
pub mod errors;
pub mod expand;
pub mod kde;
pub mod moments;
pub mod quantiles;

// re-exports
pub use descriptives::{
    describe_grouped, describe_grouped_with, describe_observations, descriptives_from_grouped,
};
pub use errors::KdeError;
pub use expand::{Expand, ExpandExt, Observations, expand_rows, expand_table};
pub use kde::GaussianKde;
pub use moments::skewness;
pub use quantiles::{QuantileMethod, SortedGroups};
