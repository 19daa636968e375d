use std::io::BufRead;
use std::path::Path;

use log::debug;

use fraglen_core::models::GroupedDistribution;
use fraglen_core::utils::get_dynamic_reader;

use crate::consts::HISTOGRAM_MARKER;
use crate::error::{FraglenIoError, Result};
use crate::table::TsvTable;

///
/// The insert size histogram of a Picard `CollectInsertSizeMetrics` report.
///
/// The table starts on the line after the `## HISTOGRAM` marker. Inputs without the marker
/// (a bare frequency table) are read from their first non-comment line.
///
#[derive(Debug, Clone, PartialEq)]
pub struct PicardHistogram {
    table: TsvTable,
}

impl PicardHistogram {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines: Vec<(usize, String)> = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            lines.push((idx + 1, line?));
        }

        let start = match lines
            .iter()
            .position(|(_, text)| text.starts_with(HISTOGRAM_MARKER))
        {
            Some(marker) => {
                debug!("Histogram section found at line {}", lines[marker].0);
                marker + 1
            }
            None => {
                debug!("No histogram marker, reading the whole input as one table");
                0
            }
        };

        let table = TsvTable::from_numbered_lines(lines.into_iter().skip(start))?;

        Ok(PicardHistogram { table })
    }

    pub fn table(&self) -> &TsvTable {
        &self.table
    }

    pub fn into_table(self) -> TsvTable {
        self.table
    }

    ///
    /// Pair the value and count columns into a [GroupedDistribution].
    ///
    /// # Arguments
    /// - value_column: name of the measurement column, usually `insert_size`
    /// - count_column: name of the frequency column, e.g. `All_Reads.fr_count`
    pub fn to_distribution(
        &self,
        value_column: &str,
        count_column: &str,
    ) -> Result<GroupedDistribution> {
        if self.table.is_empty() {
            return Err(FraglenIoError::EmptyTable);
        }

        let values = self.table.numeric_column(value_column)?;
        let counts = self.table.numeric_column(count_column)?;

        Ok(GroupedDistribution::try_new(values, &counts)?)
    }
}

impl TryFrom<&Path> for PicardHistogram {
    type Error = FraglenIoError;

    ///
    /// Read a [PicardHistogram] from a (possibly gzipped) file on disk.
    ///
    fn try_from(value: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(value)?;
        PicardHistogram::from_reader(reader)
    }
}

///
/// Read the grouped insert size distribution of one Picard report.
///
pub fn read_picard_distribution(
    path: &Path,
    value_column: &str,
    count_column: &str,
) -> Result<GroupedDistribution> {
    PicardHistogram::try_from(path)?.to_distribution(value_column, count_column)
}
