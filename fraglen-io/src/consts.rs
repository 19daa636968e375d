pub const HISTOGRAM_MARKER: &str = "## HISTOGRAM";
pub const SECTION_PREFIX: &str = "##";
pub const COMMENT_PREFIX: &str = "#";
pub const DEFAULT_VALUE_COLUMN: &str = "insert_size";
pub const DEFAULT_COUNT_COLUMN: &str = "All_Reads.fr_count";
pub const DEFAULT_FILE_PATTERN: &str = "*.txt";
