use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use fraglen_core::utils::get_dynamic_reader_w_stdin;
use fraglen_io::PicardHistogram;
use fraglen_stats::expand_rows;

use crate::output::open_output;

///
/// Stream the expanded table: a header with the case columns, then each source row's case
/// columns repeated once per observation.
///
/// # Arguments
/// - reader: tab-separated frequency table, optionally inside a Picard report
/// - writer: destination
/// - freq_col: name of the frequency column
/// - case_cols: columns to repeat; `None` means every column except `freq_col`
///
/// # Returns
/// The number of observation rows written.
pub fn expand_frequency_table<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    freq_col: &str,
    case_cols: Option<&[String]>,
) -> Result<u64> {
    let table = PicardHistogram::from_reader(reader)?.into_table();

    let frequencies = table.numeric_column(freq_col)?;

    let columns: Vec<usize> = match case_cols {
        Some(names) => names
            .iter()
            .map(|name| table.column_index(name))
            .collect::<Result<_, _>>()?,
        None => {
            let freq_idx = table.column_index(freq_col)?;
            (0..table.header().len()).filter(|&i| i != freq_idx).collect()
        }
    };

    let header: Vec<&str> = columns.iter().map(|&i| table.header()[i].as_str()).collect();
    writeln!(writer, "{}", header.join("\t"))?;

    let cases = table.rows().iter().map(|row| {
        columns
            .iter()
            .map(|&i| row.fields.get(i).map(String::as_str).unwrap_or(""))
            .collect::<Vec<&str>>()
            .join("\t")
    });

    let mut written: u64 = 0;
    for case in expand_rows(cases.zip(frequencies)) {
        let case = case.context("Can't expand frequency table")?;
        writeln!(writer, "{}", case)?;
        written += 1;
    }

    Ok(written)
}

pub fn run_expand(matches: &ArgMatches) -> Result<()> {
    let table = matches
        .get_one::<String>("table")
        .expect("A path to a frequency table is required.");
    let freq_col = matches
        .get_one::<String>("freq-col")
        .expect("--freq-col is required");
    let case_cols: Option<Vec<String>> = matches
        .get_many::<String>("case-cols")
        .map(|cols| cols.cloned().collect());
    let output = matches.get_one::<String>("output").map(String::as_str);

    let reader = get_dynamic_reader_w_stdin(table)
        .with_context(|| format!("Failed to open table: {}", table))?;
    let mut writer = open_output(output)?;

    let written = expand_frequency_table(reader, &mut writer, freq_col, case_cols.as_deref())?;
    writer.flush()?;

    info!("Wrote {} observation rows", written);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{BufReader, Cursor};
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data")
            .join(file_name)
    }

    #[rstest]
    fn test_expand_default_case_columns() {
        let file = std::fs::File::open(get_test_path("picard/plain_histogram.tsv")).unwrap();
        let mut out: Vec<u8> = Vec::new();

        let written =
            expand_frequency_table(BufReader::new(file), &mut out, "All_Reads.fr_count", None)
                .unwrap();

        assert_eq!(written, 5);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "insert_size\tAll_Reads.rf_count\n100\t1\n100\t1\n120\t0\n120\t0\n120\t0\n"
        );
    }

    #[rstest]
    fn test_expand_picard_report_selected_columns() {
        let file = std::fs::File::open(get_test_path("picard/healthy_control_1.txt")).unwrap();
        let mut out: Vec<u8> = Vec::new();
        let case_cols = vec!["insert_size".to_string()];

        let written = expand_frequency_table(
            BufReader::new(file),
            &mut out,
            "All_Reads.fr_count",
            Some(&case_cols),
        )
        .unwrap();

        assert_eq!(written, 40);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "insert_size");
        assert_eq!(lines[1], "120");
        assert_eq!(lines[2], "145");
        assert_eq!(lines[40], "333");
    }

    #[rstest]
    fn test_fractional_frequency_is_an_error() {
        let input = Cursor::new("size\tn\n100\t2\n110\t0.5\n");
        let mut out: Vec<u8> = Vec::new();
        let err = expand_frequency_table(input, &mut out, "n", None).unwrap_err();
        assert!(format!("{:#}", err).contains("not a whole number"));
    }

    #[rstest]
    fn test_unknown_case_column() {
        let input = Cursor::new("size\tn\n100\t2\n");
        let mut out: Vec<u8> = Vec::new();
        let case_cols = vec!["label".to_string()];
        assert!(expand_frequency_table(input, &mut out, "n", Some(&case_cols)).is_err());
    }
}
