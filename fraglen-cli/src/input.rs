use std::path::Path;

use anyhow::{Context, Result};

use fraglen_core::models::GroupedDistribution;
use fraglen_io::{read_picard_distribution, read_raw_distribution};

use crate::config::{BatchConfig, InputKind};

///
/// Load one input file as a grouped distribution, restricted to the configured value window.
///
pub fn load_distribution(path: &Path, config: &BatchConfig) -> Result<GroupedDistribution> {
    let mut dist = match config.input_kind {
        InputKind::Picard => {
            read_picard_distribution(path, &config.value_column, &config.count_column)
        }
        InputKind::Raw => read_raw_distribution(path),
    }
    .with_context(|| format!("Failed to read {}", path.display()))?;

    let (min, max) = config.value_range();
    if min.is_some() || max.is_some() {
        let before = dist.total();
        dist.retain_range(min, max);
        log::debug!(
            "{}: kept {} of {} observations within [{:?}, {:?}]",
            path.display(),
            dist.total(),
            before,
            min,
            max
        );
    }

    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_load_picard() {
        let dist = load_distribution(
            &get_test_path("picard/healthy_control_1.txt"),
            &BatchConfig::default(),
        )
        .unwrap();
        assert_eq!(dist.total(), 40);
    }

    #[rstest]
    fn test_load_raw_applies_default_window() {
        let config = BatchConfig {
            input_kind: InputKind::Raw,
            ..Default::default()
        };
        let dist = load_distribution(&get_test_path("raw/samtools_sizes.txt"), &config).unwrap();
        // 12 and 600 fall outside 30-500
        assert_eq!(dist.total(), 9);
        assert_eq!(dist.values().first(), Some(&30.0));
        assert_eq!(dist.values().last(), Some(&500.0));
    }

    #[rstest]
    fn test_load_picard_with_window() {
        let config = BatchConfig {
            max_value: Some(200.0),
            ..Default::default()
        };
        let dist =
            load_distribution(&get_test_path("picard/healthy_control_1.txt"), &config).unwrap();
        assert_eq!(dist.total(), 37);
    }

    #[rstest]
    fn test_load_wrong_column() {
        let config = BatchConfig {
            count_column: "All_Reads.tandem_count".to_string(),
            ..Default::default()
        };
        let err = load_distribution(&get_test_path("picard/healthy_control_1.txt"), &config)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("All_Reads.tandem_count"));
    }
}
