pub mod frequency;
pub mod grouped;
pub mod summary;

// re-export for cleaner imports
pub use self::frequency::Frequency;
pub use self::grouped::GroupedDistribution;
pub use self::summary::{SUMMARY_LABELS, SummaryStatistics};
