use std::io::BufRead;

use crate::consts::{COMMENT_PREFIX, SECTION_PREFIX};
use crate::error::{FraglenIoError, Result};

/// One data line of a [TsvTable], with its 1-based line number in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct TsvRow {
    pub line: usize,
    pub fields: Vec<String>,
}

///
/// A tab-separated table with a header row.
///
/// The first non-empty line that is not a `#` comment is the header; data rows follow until
/// the end of input or the next `##` section marker. Blank lines are skipped.
///
#[derive(Debug, Clone, PartialEq)]
pub struct TsvTable {
    header: Vec<String>,
    rows: Vec<TsvRow>,
}

impl TsvTable {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            lines.push((idx + 1, line?));
        }
        Self::from_numbered_lines(lines)
    }

    ///
    /// Build a table from `(line number, text)` pairs.
    ///
    pub fn from_numbered_lines<I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, String)>,
    {
        let mut header: Option<Vec<String>> = None;
        let mut rows: Vec<TsvRow> = Vec::new();

        for (line, text) in lines {
            let text = text.trim_end_matches(['\r', '\n']);
            if text.trim().is_empty() {
                continue;
            }

            match header {
                None => {
                    if text.starts_with(COMMENT_PREFIX) {
                        continue;
                    }
                    header = Some(split_fields(text));
                }
                Some(_) => {
                    if text.starts_with(SECTION_PREFIX) {
                        break;
                    }
                    rows.push(TsvRow {
                        line,
                        fields: split_fields(text),
                    });
                }
            }
        }

        let header = header.ok_or(FraglenIoError::MissingHeader)?;

        Ok(TsvTable { header, rows })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[TsvRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| FraglenIoError::MissingColumn(name.to_string()))
    }

    ///
    /// Cell text of the named column, row by row. A row too short to have the column is a
    /// parse error.
    ///
    pub fn column(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .map(|row| {
                row.fields
                    .get(idx)
                    .map(String::as_str)
                    .ok_or_else(|| FraglenIoError::ParseValue {
                        line: row.line,
                        column: name.to_string(),
                        value: String::new(),
                    })
            })
            .collect()
    }

    ///
    /// Parse the named column as floating point numbers.
    ///
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let cells = self.column(name)?;
        cells
            .iter()
            .zip(&self.rows)
            .map(|(cell, row)| {
                cell.trim()
                    .parse::<f64>()
                    .map_err(|_| FraglenIoError::ParseValue {
                        line: row.line,
                        column: name.to_string(),
                        value: cell.to_string(),
                    })
            })
            .collect()
    }
}

fn split_fields(text: &str) -> Vec<String> {
    text.split('\t').map(|s| s.trim().to_string()).collect()
}
