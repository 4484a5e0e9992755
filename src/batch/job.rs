// src/batch/job.rs

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use parking_lot::Mutex;

use crate::raster::OutputFormat;

/// One requested map in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub index: usize,
    pub total: usize,
    pub width: usize,
    pub height: usize,
    pub path: PathBuf,
    /// Seed for this job's walk.
    pub seed: u64,
}

/// Builds the artifact path for ordinal `index`, e.g. `maps/dungeon-7.png`.
pub fn artifact_path(dir: &Path, index: usize, format: OutputFormat) -> PathBuf {
    dir.join(format!("dungeon-{index}.{}", format.extension()))
}

/// Multi-consumer job queue.
///
/// Wraps an mpsc channel whose receiver is shared by every worker. Once the
/// producing side is dropped, [`JobQueue::dequeue`] hands out what is left and
/// then returns `None` for good.
pub struct JobQueue {
    receiver: Mutex<Receiver<JobSpec>>,
}

impl JobQueue {
    pub fn channel() -> (Sender<JobSpec>, JobQueue) {
        let (tx, rx) = mpsc::channel();
        (tx, JobQueue { receiver: Mutex::new(rx) })
    }

    /// Enqueues every job and closes the queue.
    pub fn from_jobs(jobs: Vec<JobSpec>) -> JobQueue {
        let (tx, queue) = JobQueue::channel();
        for job in jobs {
            // `queue` owns the receiver, so the channel is still connected.
            tx.send(job).expect("job queue receiver dropped while enqueuing");
        }
        queue
    }

    /// Blocks until a job is available. `None` means the queue is closed and drained.
    pub fn dequeue(&self) -> Option<JobSpec> {
        self.receiver.lock().recv().ok()
    }
}
