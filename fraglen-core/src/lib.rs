//! # Core data model for fraglen
//!
//! Fragment-length (insert size) measurements arrive either as a pre-aggregated frequency table
//! (`value`, `count` pairs, e.g. the histogram section of Picard `CollectInsertSizeMetrics`)
//! or as a raw list of individual measurements. This crate holds the shared representation of
//! both: a validated [models::GroupedDistribution], the [models::SummaryStatistics] record
//! computed from it, and the error taxonomy shared by the rest of the workspace.
//!
//! # Example
//!
//! ```
//! use fraglen_core::models::GroupedDistribution;
//!
//! let dist = GroupedDistribution::try_new(vec![3.0, 1.0, 2.0], &[1, 2, 1]).unwrap();
//! assert_eq!(dist.total(), 4);
//! ```
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::DistributionError;
pub use models::{Frequency, GroupedDistribution, SummaryStatistics};
