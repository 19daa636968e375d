use clap::{Arg, Command, arg};

use crate::config::input_args;

pub const DENSITY_CMD: &str = "density";
pub const DEFAULT_GRID_POINTS: usize = 470;

pub fn create_density_cli() -> Command {
    Command::new(DENSITY_CMD)
        .about("Gaussian kernel density of an insert size distribution, evaluated on an even grid.")
        .arg(
            Arg::new("path")
                .required(true)
                .help("Picard report or raw insert size list"),
        )
        .args(input_args())
        .arg(
            arg!(--points <POINTS>)
                .required(false)
                .help("Number of grid points [default: 470]"),
        )
        .arg(
            arg!(--from <FROM>)
                .required(false)
                .help("First grid position (default: smallest observed value)"),
        )
        .arg(
            arg!(--to <TO>)
                .required(false)
                .help("Last grid position (default: largest observed value)"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output path (default: stdout)"),
        )
}
