// src/lib.rs
//! # dungeon_floor
//!
//! Drunkard's-walk dungeon floor generation. A handful of walkers wander a
//! grid, carving floor until a coverage threshold is met; the finished grid
//! is rendered to a two-valued bitmap. [`BatchScheduler`] produces many such
//! maps in parallel.

pub mod batch;
pub mod error;
pub mod generator;
pub mod map;
pub mod raster;

use std::path::Path;

pub use batch::{BatchConfig, BatchReport, BatchScheduler, JobSpec};
pub use error::{DungeonError, JobFailure};
pub use generator::{FloorGenerator, GeneratorConfig, WalkRng};
pub use map::{Cell, Grid, Walker};
pub use raster::{MapRasterizer, OutputFormat};

// Single-map defaults.
pub const DEFAULT_WIDTH: usize = 128;
pub const DEFAULT_HEIGHT: usize = 64;
pub const AUTO_SAVE_PATH: &str = "auto_save.png";

/// Generates a single dungeon floor.
pub fn make_dungeon(width: usize, height: usize, config: &GeneratorConfig) -> Result<Grid, DungeonError> {
    FloorGenerator::new(config.clone())?.generate(width, height)
}

/// Writes a finished floor to `path`.
pub fn save_dungeon(grid: &Grid, path: &Path, format: OutputFormat) -> Result<(), DungeonError> {
    MapRasterizer::new(format).save(grid, path)
}

/// Generates and saves a whole batch of maps.
pub fn make_dungeons(config: BatchConfig) -> Result<BatchReport, DungeonError> {
    BatchScheduler::new(config)?.run()
}
