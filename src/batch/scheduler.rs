// src/batch/scheduler.rs

use std::fs;
use std::path::PathBuf;
use std::thread;

use log::{debug, error, info};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::ThreadPoolBuilder;

use crate::batch::{artifact_path, BatchConfig, JobQueue, JobSpec};
use crate::error::{DungeonError, JobFailure};
use crate::generator::FloorGenerator;
use crate::raster::MapRasterizer;

/// Result of a batch in which every job succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub total: usize,
    /// Written artifacts, ordered by job ordinal.
    pub artifacts: Vec<PathBuf>,
}

#[derive(Default)]
struct Outcome {
    artifacts: Vec<(usize, PathBuf)>,
    failures: Vec<JobFailure>,
}

/// Fans a batch of randomly sized maps out over a fixed worker pool.
pub struct BatchScheduler {
    config: BatchConfig,
    generator: FloorGenerator,
    rasterizer: MapRasterizer,
}

impl BatchScheduler {
    pub fn new(config: BatchConfig) -> Result<Self, DungeonError> {
        config.validate()?;
        let generator = FloorGenerator::new(config.generator.clone())?;
        let rasterizer = MapRasterizer::new(config.format);
        Ok(BatchScheduler {
            config,
            generator,
            rasterizer,
        })
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Number of workers to spawn: available parallelism minus one for the
    /// coordinator, or the configured override.
    pub fn worker_count(&self) -> Result<usize, DungeonError> {
        let available = match self.config.workers {
            Some(workers) => workers.saturating_add(1),
            None => thread::available_parallelism()?.get(),
        };
        match available.saturating_sub(1) {
            0 => Err(DungeonError::InsufficientParallelism { available }),
            workers => Ok(workers),
        }
    }

    /// Draws the size and seed of every job up front.
    pub fn plan<R: Rng>(&self, rng: &mut R) -> Vec<JobSpec> {
        let config = &self.config;
        let total = config.count;
        (0..total)
            .map(|index| JobSpec {
                index,
                total,
                width: config.base_width + rng.random_range(0..=config.variance),
                height: config.base_height + rng.random_range(0..=config.variance),
                path: artifact_path(&config.output_dir, index, config.format),
                seed: rng.random(),
            })
            .collect()
    }

    /// Runs the whole batch and blocks until every job has been attempted.
    ///
    /// A failing job does not stop the others; the call only succeeds if
    /// every artifact was written.
    pub fn run(&self) -> Result<BatchReport, DungeonError> {
        let workers = self.worker_count()?;
        fs::create_dir_all(&self.config.output_dir)?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let jobs = self.plan(&mut rng);
        let total = jobs.len();
        let queue = JobQueue::from_jobs(jobs);

        info!("CPU count: {}", workers + 1);
        info!("Creating {workers} worker(s) for {total} dungeon map(s)...");

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("dungeon-worker-{i}"))
            .build()?;

        let outcome = Mutex::new(Outcome::default());
        pool.scope(|s| {
            for worker in 0..workers {
                let queue = &queue;
                let outcome = &outcome;
                s.spawn(move |_| self.work(worker, queue, outcome));
            }
        });

        let Outcome {
            mut artifacts,
            failures,
        } = outcome.into_inner();

        if !failures.is_empty() {
            error!("{} of {total} dungeon map(s) failed", failures.len());
            return Err(DungeonError::BatchFailed { total, failures });
        }

        artifacts.sort_by_key(|(index, _)| *index);
        info!("Batch complete: {total} dungeon map(s) written to {}", self.config.output_dir.display());
        Ok(BatchReport {
            total,
            artifacts: artifacts.into_iter().map(|(_, path)| path).collect(),
        })
    }

    /// Worker loop: pull jobs until the queue reports it is drained.
    fn work(&self, worker: usize, queue: &JobQueue, outcome: &Mutex<Outcome>) {
        debug!("worker {worker} started");
        let mut done = 0usize;
        while let Some(job) = queue.dequeue() {
            match self.run_job(&job) {
                Ok(()) => {
                    info!(
                        "Created a {}x{} dungeon map ({} / {})",
                        job.width,
                        job.height,
                        job.index + 1,
                        job.total
                    );
                    outcome.lock().artifacts.push((job.index, job.path));
                }
                Err(err) => {
                    error!("job {} ({}x{}) failed: {err}", job.index, job.width, job.height);
                    outcome.lock().failures.push(JobFailure { job, error: err });
                }
            }
            done += 1;
        }
        debug!("worker {worker} exiting after {done} job(s)");
    }

    fn run_job(&self, job: &JobSpec) -> Result<(), DungeonError> {
        let mut rng = StdRng::seed_from_u64(job.seed);
        let grid = self.generator.generate_with_rng(job.width, job.height, &mut rng)?;
        self.rasterizer.save(&grid, &job.path)
    }
}
