// src/batch/mod.rs
pub mod job;
pub mod scheduler;

pub use job::{artifact_path, JobQueue, JobSpec};
pub use scheduler::{BatchReport, BatchScheduler};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DungeonError;
use crate::generator::{check_size, GeneratorConfig};
use crate::raster::OutputFormat;

pub const DEFAULT_BASE_WIDTH: usize = 64;
pub const DEFAULT_BASE_HEIGHT: usize = 64;
pub const DEFAULT_VARIANCE: usize = 256;
pub const DEFAULT_COUNT: usize = 10_000;
pub const DEFAULT_OUTPUT_DIR: &str = "maps";

/// Everything a batch run needs. Missing JSON fields take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub base_width: usize,
    pub base_height: usize,
    /// Each side gets a uniform extra of 0..=variance cells.
    pub variance: usize,
    pub count: usize,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    /// Worker override; detected parallelism minus one when absent.
    pub workers: Option<usize>,
    /// Makes the whole batch reproducible when set.
    pub seed: Option<u64>,
    pub generator: GeneratorConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            base_width: DEFAULT_BASE_WIDTH,
            base_height: DEFAULT_BASE_HEIGHT,
            variance: DEFAULT_VARIANCE,
            count: DEFAULT_COUNT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: OutputFormat::default(),
            workers: None,
            seed: None,
            generator: GeneratorConfig::default(),
        }
    }
}

impl BatchConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, DungeonError> {
        let text = fs::read_to_string(path)?;
        let config: BatchConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DungeonError> {
        self.generator.validate()?;
        let (Some(max_width), Some(max_height)) = (
            self.base_width.checked_add(self.variance),
            self.base_height.checked_add(self.variance),
        ) else {
            return Err(DungeonError::InvalidConfig("base size plus variance overflows".into()));
        };
        check_size(max_width, max_height)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "base_width": 32,
                "base_height": 48,
                "variance": 4,
                "count": 12,
                "output_dir": "out",
                "format": "bmp",
                "seed": 42,
                "generator": {{ "spawn_rate": 0.05 }}
            }}"#
        )
        .unwrap();

        let config = BatchConfig::from_json_file(file.path()).unwrap();
        assert_eq!((config.base_width, config.base_height), (32, 48));
        assert_eq!(config.variance, 4);
        assert_eq!(config.count, 12);
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.format, OutputFormat::Bmp);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.workers, None);
        assert_eq!(config.generator.spawn_rate, 0.05);
        assert_eq!(config.generator.max_walkers, crate::generator::MAX_WALKERS);
    }

    #[test]
    fn test_invalid_generator_section_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "generator": {{ "death_rate": 3.0 }} }}"#).unwrap();
        let err = BatchConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, DungeonError::InvalidConfig(_)));
    }

    #[test]
    fn test_oversized_batch_is_rejected_up_front() {
        let huge = BatchConfig {
            base_width: usize::MAX / 2,
            base_height: 4,
            variance: 0,
            ..Default::default()
        };
        assert!(matches!(huge.validate(), Err(DungeonError::OversizedMap { .. })));

        // The base fits, but the largest possible map does not.
        let wide = BatchConfig {
            base_width: 64,
            base_height: 64,
            variance: crate::generator::MAX_AREA,
            ..Default::default()
        };
        assert!(matches!(wide.validate(), Err(DungeonError::OversizedMap { .. })));

        let overflow = BatchConfig {
            base_width: usize::MAX,
            variance: 1,
            ..Default::default()
        };
        assert!(matches!(overflow.validate(), Err(DungeonError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = BatchConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, DungeonError::Json(_)));
    }
}
