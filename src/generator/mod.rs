// src/generator/mod.rs
pub mod floor;
pub mod rng;

pub use floor::{FloorGenerator, Sweep};
pub use rng::WalkRng;

use serde::{Deserialize, Serialize};

use crate::error::DungeonError;

// Tuning constants for the random-walk fill.
pub const MAX_DOMAIN: f64 = 0.34; // Floor coverage at which generation stops
pub const MAX_WALKERS: usize = 5;
pub const SPAWN_RATE: f64 = 0.02;
pub const DEATH_RATE: f64 = 0.75;

/// Smallest side length that still leaves an interior cell.
pub const MIN_SIDE: usize = 3;

/// Largest grid, in cells, the generator will allocate.
pub const MAX_AREA: usize = 1 << 30;

/// Checks that a `width` x `height` grid can be allocated and rasterized,
/// returning its area.
pub fn check_size(width: usize, height: usize) -> Result<usize, DungeonError> {
    let fits_image = u32::try_from(width).is_ok() && u32::try_from(height).is_ok();
    width
        .checked_mul(height)
        .filter(|&area| fits_image && area <= MAX_AREA)
        .ok_or(DungeonError::OversizedMap { width, height })
}

/// Tuning knobs for [`FloorGenerator`]. Defaults are the constants above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub coverage_threshold: f64,
    pub max_walkers: usize,
    pub spawn_rate: f64,
    pub death_rate: f64,
    /// Upper bound on sweeps before giving up. `None` runs until coverage is reached.
    pub max_sweeps: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            coverage_threshold: MAX_DOMAIN,
            max_walkers: MAX_WALKERS,
            spawn_rate: SPAWN_RATE,
            death_rate: DEATH_RATE,
            max_sweeps: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), DungeonError> {
        if !(self.coverage_threshold > 0.0 && self.coverage_threshold <= 1.0) {
            return Err(DungeonError::InvalidConfig(format!(
                "coverage_threshold must be in (0, 1], got {}",
                self.coverage_threshold
            )));
        }
        if self.max_walkers == 0 {
            return Err(DungeonError::InvalidConfig("max_walkers must be at least 1".into()));
        }
        for (name, rate) in [("spawn_rate", self.spawn_rate), ("death_rate", self.death_rate)] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(DungeonError::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {rate}"
                )));
            }
        }
        if self.max_sweeps == Some(0) {
            return Err(DungeonError::InvalidConfig("max_sweeps must be positive".into()));
        }
        Ok(())
    }
}
