use clap::{Arg, ArgAction, Command, arg};

use crate::config::input_args;

pub const SUMMARIZE_CMD: &str = "summarize";

pub fn create_summarize_cli() -> Command {
    Command::new(SUMMARIZE_CMD)
        .about("Summary statistics (count, mean, std, min, quartiles, max) of insert size distributions.")
        .arg(
            Arg::new("paths")
                .num_args(1..)
                .required(true)
                .help("Input files or directories (searched recursively)"),
        )
        .args(input_args())
        .arg(
            arg!(--pattern <PATTERN>)
                .required(false)
                .help("File name pattern used when searching directories [default: *.txt]"),
        )
        .arg(
            arg!(--quantiles <METHOD>)
                .required(false)
                .help("Quartile convention: lower (cumulative count, no interpolation) or linear"),
        )
        .arg(
            arg!(--format <FORMAT>)
                .required(false)
                .help("Report format: table, tsv or json [default: table]"),
        )
        .arg(
            arg!(--threads <THREADS>)
                .required(false)
                .help("Number of files processed in parallel"),
        )
        .arg(
            arg!(--skew)
                .action(ArgAction::SetTrue)
                .help("Also report the sample skewness"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output path (default: stdout)"),
        )
}
