// src/generator/floor.rs

use log::{debug, trace};

use crate::error::DungeonError;
use crate::generator::{check_size, GeneratorConfig, WalkRng, MIN_SIDE};
use crate::map::{Direction, Grid, Walker};

/// Snapshot handed to an observer after every sweep of the walk.
#[derive(Debug)]
pub struct Sweep<'a> {
    /// 1-based sweep ordinal.
    pub index: u64,
    pub floor_cells: usize,
    pub grid: &'a Grid,
    /// Every walker that acted this sweep, including ones marked dead.
    pub walkers: &'a [Walker],
}

/// Drunkard's-walk floor generator.
///
/// A small, fluctuating population of walkers wanders the grid interior,
/// carving floor as it goes, until the floor covers `coverage_threshold` of
/// the whole grid.
#[derive(Debug, Clone, Default)]
pub struct FloorGenerator {
    config: GeneratorConfig,
}

impl FloorGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, DungeonError> {
        config.validate()?;
        Ok(FloorGenerator { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a floor using the thread-local RNG.
    pub fn generate(&self, width: usize, height: usize) -> Result<Grid, DungeonError> {
        self.generate_with_rng(width, height, &mut rand::rng())
    }

    pub fn generate_with_rng<R: WalkRng>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Grid, DungeonError> {
        self.generate_observed(width, height, rng, |_| {})
    }

    /// Runs the walk, calling `observer` once at the end of every sweep.
    pub fn generate_observed<R, F>(
        &self,
        width: usize,
        height: usize,
        rng: &mut R,
        mut observer: F,
    ) -> Result<Grid, DungeonError>
    where
        R: WalkRng,
        F: FnMut(&Sweep<'_>),
    {
        self.check_dimensions(width, height)?;

        let config = &self.config;
        let mut grid = Grid::new(width, height);
        let mut walkers = vec![Walker::centered(&grid)];
        // Indices marked dead during the previous sweep.
        let mut dead: Vec<usize> = Vec::new();
        let mut sweep: u64 = 0;

        loop {
            if walkers.len() > 1 && !dead.is_empty() {
                let mut i = 0;
                walkers.retain(|_| {
                    let keep = !dead.contains(&i);
                    i += 1;
                    keep
                });
            }
            dead.clear();

            let population = walkers.len();
            let mut i = 0;
            // Walkers spawned below are appended and still act this sweep.
            while i < walkers.len() {
                let (x, y) = walkers[i].position();
                grid.set_floor(x, y);

                if walkers.len() < config.max_walkers && rng.unit() <= config.spawn_rate {
                    walkers.push(Walker::new(x, y));
                }

                let direction = Direction::from_roll(rng.roll());
                walkers[i].step(direction, &grid);

                // The last unmarked walker is never marked, so pruning cannot empty the population.
                if population > 1 && rng.unit() <= config.death_rate && dead.len() + 1 < walkers.len() {
                    dead.push(i);
                }
                i += 1;
            }

            sweep += 1;
            let floor_cells = grid.floor_count();
            trace!(
                "sweep {sweep}: {floor_cells} floor cells, {} walkers, {} dying",
                walkers.len(),
                dead.len()
            );
            observer(&Sweep {
                index: sweep,
                floor_cells,
                grid: &grid,
                walkers: &walkers,
            });

            if floor_cells > 0 && grid.coverage() >= config.coverage_threshold {
                break;
            }
            if let Some(limit) = config.max_sweeps {
                if sweep >= limit {
                    return Err(DungeonError::SweepLimitExceeded { limit });
                }
            }
        }

        debug!(
            "generated {width}x{height} floor in {sweep} sweeps ({:.3} coverage)",
            grid.coverage()
        );
        Ok(grid)
    }

    fn check_dimensions(&self, width: usize, height: usize) -> Result<(), DungeonError> {
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(DungeonError::DegenerateDimension { width, height });
        }
        let area = check_size(width, height)?;
        let reachable = ((width - 2) * (height - 2)) as f64 / area as f64;
        if reachable < self.config.coverage_threshold {
            return Err(DungeonError::UnreachableCoverage {
                width,
                height,
                threshold: self.config.coverage_threshold,
            });
        }
        Ok(())
    }
}
