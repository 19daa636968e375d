use std::io::BufRead;
use std::path::Path;

use fraglen_core::models::GroupedDistribution;
use fraglen_core::utils::get_dynamic_reader;

use crate::consts::COMMENT_PREFIX;
use crate::error::{FraglenIoError, Result};

///
/// Read a headerless list of measurements, one per line.
///
/// Only the first field of each line is used (fields may be separated by tabs, commas or
/// spaces); blank lines and `#` comments are skipped.
///
pub fn read_raw_values<R: BufRead>(reader: R) -> Result<Vec<f64>> {
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let field = text
            .split(|c: char| c == '\t' || c == ',' || c.is_whitespace())
            .next()
            .unwrap_or(text);

        let value = field
            .parse::<f64>()
            .map_err(|_| FraglenIoError::ParseValue {
                line: idx + 1,
                column: "0".to_string(),
                value: field.to_string(),
            })?;
        values.push(value);
    }

    Ok(values)
}

///
/// Read a raw measurement file from disk and aggregate it into a [GroupedDistribution].
///
pub fn read_raw_distribution(path: &Path) -> Result<GroupedDistribution> {
    let reader = get_dynamic_reader(path)?;
    let values = read_raw_values(reader)?;
    if values.is_empty() {
        return Err(FraglenIoError::EmptyTable);
    }
    Ok(GroupedDistribution::from_observations(values)?)
}
