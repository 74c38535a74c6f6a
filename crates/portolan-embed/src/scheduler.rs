// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Background worker pool for engine-submitted tasks.
//!
//! One scheduler instance is owned by the map facade and handed to the map
//! engine at construction. The engine submits tile loading and other
//! processing work here; results surface later as frame updates through the
//! renderer frontend, never through this pool.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use portolan_core::control::{Task, TaskScheduler};

/// Default number of worker threads when the host expresses no preference.
const DEFAULT_WORKERS: usize = 4;

/// A fixed pool of named worker threads fed by an unbounded channel.
///
/// Submission never blocks. Tasks from a single submitter are picked up in
/// FIFO order; across submitters and across workers there is no ordering
/// guarantee. Dropping the scheduler disconnects the channel and joins every
/// worker.
pub struct WorkScheduler {
    tx: Option<Sender<Task>>,
    workers: Vec<thread::JoinHandle<()>>,
    running: Arc<AtomicBool>,
}

impl WorkScheduler {
    /// Spawns a pool with `workers` threads.
    ///
    /// # Panics
    /// Panics if `workers` is zero or a worker thread cannot be spawned.
    pub fn new(workers: usize) -> Self {
        assert!(workers > 0, "worker pool requires at least one thread");

        let (tx, rx) = crossbeam_channel::unbounded::<Task>();
        let running = Arc::new(AtomicBool::new(true));

        let handles = (0..workers)
            .map(|index| {
                let rx: Receiver<Task> = rx.clone();
                let running = Arc::clone(&running);
                thread::Builder::new()
                    .name(format!("portolan-worker-{index}"))
                    .spawn(move || {
                        while running.load(Ordering::SeqCst) {
                            match rx.recv() {
                                Ok(task) => task(),
                                Err(_) => break,
                            }
                        }
                        log::debug!("Worker thread exiting.");
                    })
                    .expect("failed to spawn worker thread")
            })
            .collect();

        log::info!("Work scheduler started with {workers} worker(s).");
        Self {
            tx: Some(tx),
            workers: handles,
            running,
        }
    }
}

impl Default for WorkScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

impl TaskScheduler for WorkScheduler {
    fn schedule(&self, task: Task) {
        let Some(tx) = self.tx.as_ref() else {
            log::error!("Task scheduled on a shut-down pool; dropping it.");
            return;
        };
        if tx.send(task).is_err() {
            log::error!("Worker channel disconnected; dropping scheduled task.");
        }
    }
}

impl Drop for WorkScheduler {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        // Disconnect the channel so blocked workers wake up and exit.
        self.tx.take();
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                log::error!("Worker thread panicked during shutdown.");
            }
        }
    }
}
