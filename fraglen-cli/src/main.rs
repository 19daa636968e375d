mod config;
mod density;
mod expand;
mod input;
mod output;
mod summarize;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "fraglen";
    pub const BIN_NAME: &str = "fraglen";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Summary statistics, expansion and density estimates for DNA fragment-length (insert size) distributions.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug messages"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Only log warnings and errors, hide progress bars"),
        )
        .subcommand(summarize::cli::create_summarize_cli())
        .subcommand(expand::cli::create_expand_cli())
        .subcommand(density::cli::create_density_cli())
}

/// `RUST_LOG` wins over the verbosity flags.
fn init_logging(matches: &ArgMatches) {
    let level = if matches.get_flag("verbose") {
        "debug"
    } else if matches.get_flag("quiet") {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(&matches);
    log::debug!("{} {}", consts::PKG_NAME, consts::VERSION);

    match matches.subcommand() {
        //
        // SUMMARY STATISTICS
        //
        Some((summarize::cli::SUMMARIZE_CMD, matches)) => {
            summarize::handlers::run_summarize(matches)?;
        }

        //
        // FREQUENCY TABLE EXPANSION
        //
        Some((expand::cli::EXPAND_CMD, matches)) => {
            expand::handlers::run_expand(matches)?;
        }

        //
        // KERNEL DENSITY
        //
        Some((density::cli::DENSITY_CMD, matches)) => {
            density::handlers::run_density(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
