// src/error.rs

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::batch::JobSpec;

/// Everything that can go wrong while generating or persisting dungeon maps.
#[derive(Debug, Error)]
pub enum DungeonError {
    #[error("degenerate dimensions {width}x{height}: both sides must be at least 3 cells")]
    DegenerateDimension { width: usize, height: usize },

    #[error("a {width}x{height} grid can never reach {threshold} floor coverage")]
    UnreachableCoverage {
        width: usize,
        height: usize,
        threshold: f64,
    },

    #[error("{width}x{height} map is too large: sides must fit in 32 bits and the area may not exceed 2^30 cells")]
    OversizedMap { width: usize, height: usize },

    #[error("generation did not reach its coverage threshold within {limit} sweeps")]
    SweepLimitExceeded { limit: u64 },

    #[error("insufficient parallelism: {available} unit(s) available, none left for workers after reserving one for the coordinator")]
    InsufficientParallelism { available: usize },

    #[error("failed to write map artifact {path:?}: {source}")]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{} of {total} batch job(s) failed", .failures.len())]
    BatchFailed { total: usize, failures: Vec<JobFailure> },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// A single batch job that did not produce its artifact.
#[derive(Debug)]
pub struct JobFailure {
    pub job: JobSpec,
    pub error: DungeonError,
}

impl fmt::Display for JobFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "job {} ({}x{}): {}", self.job.index, self.job.width, self.job.height, self.error)
    }
}
