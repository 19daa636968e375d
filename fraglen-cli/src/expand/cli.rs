use clap::{Arg, Command, arg};

pub const EXPAND_CMD: &str = "expand";

pub fn create_expand_cli() -> Command {
    Command::new(EXPAND_CMD)
        .about("Expand a frequency table into one row per observation.")
        .arg(
            Arg::new("table")
                .required(true)
                .help("Tab-separated frequency table or Picard report ('-' for stdin)"),
        )
        .arg(
            Arg::new("freq-col")
                .long("freq-col")
                .required(true)
                .help("Column holding the number of observations of each row"),
        )
        .arg(
            Arg::new("case-cols")
                .long("case-cols")
                .required(false)
                .value_delimiter(',')
                .help("Comma separated columns to repeat (default: every other column)"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output path (default: stdout)"),
        )
}
