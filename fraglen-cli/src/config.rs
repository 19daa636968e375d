use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, arg};
use serde::Deserialize;

use fraglen_io::{DEFAULT_COUNT_COLUMN, DEFAULT_FILE_PATTERN, DEFAULT_VALUE_COLUMN};
use fraglen_stats::QuantileMethod;

/// Lower bound of the window applied to raw measurement lists unless configured otherwise.
pub const RAW_MIN_INSERT_SIZE: f64 = 30.0;
/// Upper bound of the window applied to raw measurement lists unless configured otherwise.
pub const RAW_MAX_INSERT_SIZE: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Picard CollectInsertSizeMetrics report (frequency table)
    #[default]
    Picard,
    /// Headerless list, one insert size per line
    Raw,
}

impl FromStr for InputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "picard" => Ok(InputKind::Picard),
            "raw" => Ok(InputKind::Raw),
            _ => Err(format!("Invalid input kind: {} (expected picard or raw)", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {} (expected table, tsv or json)", s)),
        }
    }
}

///
/// Settings of a batch run. Read from an optional TOML file, then overridden by command line
/// flags.
///
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    pub pattern: String,
    pub input_kind: InputKind,
    pub value_column: String,
    pub count_column: String,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    #[serde(deserialize_with = "deserialize_quantiles")]
    pub quantiles: Option<QuantileMethod>,
    pub format: OutputFormat,
    pub threads: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            pattern: DEFAULT_FILE_PATTERN.to_string(),
            input_kind: InputKind::default(),
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
            count_column: DEFAULT_COUNT_COLUMN.to_string(),
            min_value: None,
            max_value: None,
            quantiles: None,
            format: OutputFormat::default(),
            threads: None,
        }
    }
}

fn deserialize_quantiles<'de, D>(deserializer: D) -> Result<Option<QuantileMethod>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| s.parse::<QuantileMethod>().map_err(serde::de::Error::custom))
        .transpose()
}

impl BatchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse configuration")
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    ///
    /// Build the effective configuration for a subcommand: the `--config` file (if any) with
    /// the flags given on the command line layered on top.
    ///
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let mut config = match matches.try_get_one::<String>("config").ok().flatten() {
            Some(path) => Self::from_toml_file(Path::new(path))?,
            None => Self::default(),
        };
        config.apply_matches(matches)?;
        Ok(config)
    }

    fn apply_matches(&mut self, matches: &ArgMatches) -> Result<()> {
        if let Some(pattern) = string_arg(matches, "pattern") {
            self.pattern = pattern;
        }
        if let Some(kind) = string_arg(matches, "kind") {
            self.input_kind = kind.parse().map_err(anyhow::Error::msg)?;
        }
        if let Some(column) = string_arg(matches, "value-column") {
            self.value_column = column;
        }
        if let Some(column) = string_arg(matches, "count-column") {
            self.count_column = column;
        }
        if let Some(min) = string_arg(matches, "min") {
            self.min_value = Some(min.parse().context("--min must be a number")?);
        }
        if let Some(max) = string_arg(matches, "max") {
            self.max_value = Some(max.parse().context("--max must be a number")?);
        }
        if let Some(method) = string_arg(matches, "quantiles") {
            self.quantiles = Some(method.parse().map_err(anyhow::Error::msg)?);
        }
        if let Some(format) = string_arg(matches, "format") {
            self.format = format.parse().map_err(anyhow::Error::msg)?;
        }
        if let Some(threads) = string_arg(matches, "threads") {
            self.threads = Some(threads.parse().context("--threads must be a positive integer")?);
        }
        Ok(())
    }

    /// Quantile convention: configured, else lower for frequency tables and linear for raw lists.
    pub fn quantile_method(&self) -> QuantileMethod {
        self.quantiles.unwrap_or(match self.input_kind {
            InputKind::Picard => QuantileMethod::Lower,
            InputKind::Raw => QuantileMethod::Linear,
        })
    }

    /// Inclusive value window: configured bounds, else 30-500 for raw lists and open for tables.
    pub fn value_range(&self) -> (Option<f64>, Option<f64>) {
        match self.input_kind {
            InputKind::Picard => (self.min_value, self.max_value),
            InputKind::Raw => (
                self.min_value.or(Some(RAW_MIN_INSERT_SIZE)),
                self.max_value.or(Some(RAW_MAX_INSERT_SIZE)),
            ),
        }
    }
}

///
/// Flags shared by every subcommand that loads insert size distributions; each one overrides
/// the matching [BatchConfig] field.
///
pub fn input_args() -> Vec<Arg> {
    vec![
        arg!(--config <CONFIG>)
            .required(false)
            .help("TOML file with batch settings (flags given here take precedence)"),
        arg!(--kind <KIND>)
            .required(false)
            .help("Input kind: picard (frequency table) or raw (one insert size per line)"),
        Arg::new("value-column")
            .long("value-column")
            .required(false)
            .help("Histogram column holding the insert size [default: insert_size]"),
        Arg::new("count-column")
            .long("count-column")
            .required(false)
            .help("Histogram column holding the read pair count [default: All_Reads.fr_count]"),
        arg!(--min <MIN>)
            .required(false)
            .help("Drop insert sizes below this value [raw default: 30]"),
        arg!(--max <MAX>)
            .required(false)
            .help("Drop insert sizes above this value [raw default: 500]"),
    ]
}

/// Look up a string flag, tolerating subcommands that do not define it.
fn string_arg(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.try_get_one::<String>(id).ok().flatten().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::{Arg, Command};
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn test_command() -> Command {
        Command::new("test")
            .arg(Arg::new("config").long("config"))
            .arg(Arg::new("kind").long("kind"))
            .arg(Arg::new("min").long("min"))
            .arg(Arg::new("quantiles").long("quantiles"))
            .arg(Arg::new("format").long("format"))
    }

    #[rstest]
    fn test_defaults() {
        let config = BatchConfig::default();
        assert_eq!(config.pattern, "*.txt");
        assert_eq!(config.count_column, "All_Reads.fr_count");
        assert_eq!(config.quantile_method(), QuantileMethod::Lower);
        assert_eq!(config.value_range(), (None, None));
    }

    #[rstest]
    fn test_raw_defaults() {
        let config = BatchConfig {
            input_kind: InputKind::Raw,
            ..Default::default()
        };
        assert_eq!(config.quantile_method(), QuantileMethod::Linear);
        assert_eq!(config.value_range(), (Some(30.0), Some(500.0)));
    }

    #[rstest]
    fn test_toml_overrides_defaults() {
        let config = BatchConfig::from_toml_str(
            r#"
            input_kind = "raw"
            pattern = "*.tsv"
            max_value = 1000.0
            quantiles = "lower"
            format = "json"
            threads = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.input_kind, InputKind::Raw);
        assert_eq!(config.pattern, "*.tsv");
        assert_eq!(config.value_range(), (Some(30.0), Some(1000.0)));
        assert_eq!(config.quantile_method(), QuantileMethod::Lower);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.threads, Some(2));
        assert_eq!(config.value_column, "insert_size");
    }

    #[rstest]
    fn test_unknown_key_is_rejected() {
        assert!(BatchConfig::from_toml_str("bins = 470").is_err());
    }

    #[rstest]
    fn test_bad_quantile_name_is_rejected() {
        assert!(BatchConfig::from_toml_str("quantiles = \"midpoint\"").is_err());
    }

    #[rstest]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fraglen.toml");
        std::fs::write(&path, "input_kind = \"raw\"\nformat = \"tsv\"\n").unwrap();

        let matches = test_command()
            .try_get_matches_from([
                "test",
                "--config",
                path.to_str().unwrap(),
                "--min",
                "50",
                "--quantiles",
                "lower",
            ])
            .unwrap();
        let config = BatchConfig::from_matches(&matches).unwrap();

        assert_eq!(config.input_kind, InputKind::Raw);
        assert_eq!(config.format, OutputFormat::Tsv);
        assert_eq!(config.value_range(), (Some(50.0), Some(500.0)));
        assert_eq!(config.quantile_method(), QuantileMethod::Lower);
    }

    #[rstest]
    fn test_invalid_flag_value() {
        let matches = test_command()
            .try_get_matches_from(["test", "--kind", "bam"])
            .unwrap();
        assert!(BatchConfig::from_matches(&matches).is_err());
    }
}
