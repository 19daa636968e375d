use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use fraglen_stats::{GaussianKde, SortedGroups};

use super::cli::DEFAULT_GRID_POINTS;
use crate::config::BatchConfig;
use crate::input::load_distribution;
use crate::output::open_output;

///
/// Evaluate the Gaussian KDE of one file on `points` evenly spaced positions.
///
/// # Arguments
/// - path: input file
/// - config: how to read it
/// - points: grid size
/// - lo, hi: grid bounds; `None` uses the observed minimum / maximum
pub fn density_for_file(
    path: &Path,
    config: &BatchConfig,
    points: usize,
    lo: Option<f64>,
    hi: Option<f64>,
) -> Result<Vec<(f64, f64)>> {
    let dist = load_distribution(path, config)?;

    let kde = GaussianKde::from_grouped(&dist)
        .with_context(|| format!("Can't estimate density of {}", path.display()))?;

    let groups = SortedGroups::new(&dist);
    let (Some(lo), Some(hi)) = (lo.or(groups.min()), hi.or(groups.max())) else {
        anyhow::bail!("No observations in {}", path.display());
    };
    if hi < lo {
        anyhow::bail!("Grid bounds are reversed: {} > {}", lo, hi);
    }

    info!(
        "{}: bandwidth {:.4} over {} points in [{}, {}]",
        path.display(),
        kde.bandwidth(),
        points,
        lo,
        hi
    );

    Ok(kde.evaluate_grid(lo, hi, points))
}

pub fn write_density<W: Write>(writer: &mut W, grid: &[(f64, f64)]) -> Result<()> {
    writeln!(writer, "x\tdensity")?;
    for (x, density) in grid {
        writeln!(writer, "{}\t{}", x, density)?;
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(matches: &ArgMatches, id: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    matches
        .get_one::<String>(id)
        .map(|s| s.parse::<T>().with_context(|| format!("Invalid --{}: {}", id, s)))
        .transpose()
}

pub fn run_density(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .expect("A path to an insert size file is required.");
    let config = BatchConfig::from_matches(matches)?;
    let points = parse_number::<usize>(matches, "points")?.unwrap_or(DEFAULT_GRID_POINTS);
    let lo = parse_number::<f64>(matches, "from")?;
    let hi = parse_number::<f64>(matches, "to")?;
    let output = matches.get_one::<String>("output").map(String::as_str);

    let grid = density_for_file(Path::new(path), &config, points, lo, hi)?;

    let mut writer = open_output(output)?;
    write_density(&mut writer, &grid)?;
    writer.flush()?;

    Ok(())
}
