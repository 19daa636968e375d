use std::io;
use thiserror::Error;

use fraglen_core::errors::DistributionError;

/// Error type for fraglen-io operations.
#[derive(Error, Debug)]
pub enum FraglenIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No header line could be located.
    #[error("No histogram header line found")]
    MissingHeader,

    /// A requested column is absent from the header.
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// A cell could not be parsed as a number.
    #[error("Can't parse {value:?} in column {column} at line {line}")]
    ParseValue {
        line: usize,
        column: String,
        value: String,
    },

    /// The input holds no data rows.
    #[error("No data rows found")]
    EmptyTable,

    /// The parsed table is not a valid distribution.
    #[error(transparent)]
    Distribution(#[from] DistributionError),

    /// The file name pattern is not a valid glob.
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    /// Directory traversal failed.
    #[error("Can't walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result type alias for fraglen-io operations.
pub type Result<T> = std::result::Result<T, FraglenIoError>;
