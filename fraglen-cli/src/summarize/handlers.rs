use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use fraglen_core::models::{SUMMARY_LABELS, SummaryStatistics};
use fraglen_core::utils::sample_name;
use fraglen_io::discover_all;
use fraglen_stats::{describe_grouped_with, skewness};

use crate::config::{BatchConfig, OutputFormat};
use crate::input::load_distribution;
use crate::output::open_output;

#[derive(Debug, Clone, Serialize)]
pub struct SampleSummary {
    pub sample: String,
    pub path: PathBuf,
    pub statistics: SummaryStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skewness: Option<f64>,
}

///
/// Summarise a single input file.
///
pub fn summarize_file(path: &Path, config: &BatchConfig, with_skew: bool) -> Result<SampleSummary> {
    let dist = load_distribution(path, config)?;

    let statistics = describe_grouped_with(&dist, config.quantile_method())
        .with_context(|| format!("Can't summarise {}", path.display()))?;

    let skewness = match with_skew {
        true => Some(
            skewness(&dist)
                .with_context(|| format!("Can't compute skewness of {}", path.display()))?,
        ),
        false => None,
    };

    Ok(SampleSummary {
        sample: sample_name(path),
        path: path.to_path_buf(),
        statistics,
        skewness,
    })
}

///
/// Summarise every file, in parallel. Results come back in the order of `paths`; a failing
/// file does not stop the others.
///
pub fn summarize_files(
    paths: &[PathBuf],
    config: &BatchConfig,
    with_skew: bool,
    pb: &ProgressBar,
) -> Vec<(PathBuf, Result<SampleSummary>)> {
    paths
        .par_iter()
        .map(|path| {
            let result = summarize_file(path, config, with_skew);
            pb.inc(1);
            (path.clone(), result)
        })
        .collect()
}

///
/// Render the summaries in the requested format.
///
pub fn write_report<W: Write>(
    writer: &mut W,
    summaries: &[SampleSummary],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for (i, summary) in summaries.iter().enumerate() {
                if i > 0 {
                    writeln!(writer)?;
                }
                writeln!(writer, "{}", summary.sample)?;
                write!(writer, "{}", summary.statistics)?;
                if let Some(skew) = summary.skewness {
                    writeln!(writer, "{:<8}{:>12.2}", "skew", skew)?;
                }
            }
        }
        OutputFormat::Tsv => {
            let with_skew = summaries.iter().any(|s| s.skewness.is_some());

            let mut header = vec!["sample"];
            header.extend(SUMMARY_LABELS);
            if with_skew {
                header.push("skew");
            }
            writeln!(writer, "{}", header.join("\t"))?;

            for summary in summaries {
                let mut fields = vec![summary.sample.clone(), summary.statistics.count.to_string()];
                fields.extend(
                    summary.statistics.rows()[1..]
                        .iter()
                        .map(|(_, value)| value.to_string()),
                );
                if with_skew {
                    fields.push(
                        summary
                            .skewness
                            .map(|s| s.to_string())
                            .unwrap_or_default(),
                    );
                }
                writeln!(writer, "{}", fields.join("\t"))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, summaries)
                .context("Failed to serialize summaries to JSON")?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

pub fn run_summarize(matches: &ArgMatches) -> Result<()> {
    let paths: Vec<&String> = matches
        .get_many::<String>("paths")
        .expect("At least one input path is required.")
        .collect();

    let config = BatchConfig::from_matches(matches)?;
    let with_skew = matches.get_flag("skew");
    let quiet = matches.try_get_one::<bool>("quiet").ok().flatten().copied().unwrap_or(false);

    let files = discover_all(&paths, &config.pattern).context("Failed to collect input files")?;
    if files.is_empty() {
        warn!("No input files matching {} found", config.pattern);
        return Ok(());
    }
    info!("Summarising {} files", files.len());

    let pb = match quiet {
        true => ProgressBar::hidden(),
        false => ProgressBar::new(files.len() as u64),
    };
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"),
    );

    let results = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?
            .install(|| summarize_files(&files, &config, with_skew, &pb)),
        None => summarize_files(&files, &config, with_skew, &pb),
    };
    pb.finish_and_clear();

    let mut summaries: Vec<SampleSummary> = Vec::with_capacity(results.len());
    let mut failed: Vec<PathBuf> = Vec::new();
    for (path, result) in results {
        match result {
            Ok(summary) => summaries.push(summary),
            Err(e) => {
                error!("{}: {:#}", path.display(), e);
                failed.push(path);
            }
        }
    }

    let output = matches.get_one::<String>("output").map(String::as_str);
    let mut writer = open_output(output)?;
    write_report(&mut writer, &summaries, config.format)?;
    writer.flush()?;

    if !failed.is_empty() {
        anyhow::bail!(
            "{} of {} files failed: {}",
            failed.len(),
            files.len(),
            failed
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    info!("Summarised {} files", summaries.len());
    Ok(())
}
