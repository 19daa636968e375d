//! # Input/Output utilities for fragment-length data.
//!
//! Readers for the two input shapes the batch tools consume:
//!
//! - the histogram section of Picard `CollectInsertSizeMetrics` output, a tab-separated
//!   `(insert_size, count)` frequency table, read with [PicardHistogram]
//! - a headerless list with one measured insert size per line (e.g. extracted with
//!   samtools), read with [read_raw_values]
//!
//! plus recursive discovery of input files by file name pattern. Plain and `.gz` inputs are
//! both accepted.
//!
pub mod consts;
pub mod discover;
pub mod error;
pub mod picard;
pub mod raw;
pub mod table;

// re-expose core functions
pub use consts::*;
pub use discover::*;
pub use error::*;
pub use picard::*;
pub use raw::*;
pub use table::*;
