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

//! Host-thread run loop: a mailbox of deferred closures.
//!
//! Work posted from any thread is executed on whichever thread calls
//! [`RunLoop::run_once`], by convention the host thread, once per host loop
//! iteration. Posting never blocks; draining executes tasks strictly in
//! posting order.
//!
//! Hosts that run a single map typically use the process-wide
//! [`RunLoop::shared`] instance. Hosts that run several maps with
//! independent event delivery create one [`RunLoop::new`] per map; nothing
//! in this layer hard-codes the shared instance.

use std::sync::OnceLock;

use portolan_core::control::Task;

/// A thread-safe mailbox with an explicit host-thread drain step.
///
/// Cloning is cheap and shares the underlying queue, so a clone works both
/// as a posting handle and as a drain handle.
#[derive(Clone)]
pub struct RunLoop {
    tx: flume::Sender<Task>,
    rx: flume::Receiver<Task>,
}

static SHARED: OnceLock<RunLoop> = OnceLock::new();

impl RunLoop {
    /// Creates a run loop with an empty, unbounded queue.
    pub fn new() -> Self {
        let (tx, rx) = flume::unbounded();
        Self { tx, rx }
    }

    /// Returns the process-wide run loop, initialized on first use.
    pub fn shared() -> &'static RunLoop {
        SHARED.get_or_init(|| {
            log::debug!("Initializing shared run loop.");
            RunLoop::new()
        })
    }

    /// Enqueues `task` for the next drain. Non-blocking; safe to call from
    /// any thread.
    pub fn post(&self, task: Task) {
        // Cannot disconnect while `self` also owns a receiver clone, but a
        // send error must not panic the posting thread either way.
        if self.tx.send(task).is_err() {
            log::error!("Run loop queue disconnected; dropping posted task.");
        }
    }

    /// Executes every task that was queued when the call started, in FIFO
    /// order, on the calling thread. Returns the number of tasks run.
    ///
    /// Tasks posted *during* the drain stay queued for the next call, so a
    /// task that re-posts cannot spin the loop forever.
    pub fn run_once(&self) -> usize {
        let queued = self.rx.len();
        let mut ran = 0;
        for _ in 0..queued {
            match self.rx.try_recv() {
                Ok(task) => {
                    task();
                    ran += 1;
                }
                Err(_) => break,
            }
        }
        ran
    }

    /// Returns `true` if nothing is waiting to be drained.
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl Default for RunLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[test]
    fn run_once_executes_in_posting_order() {
        let run_loop = RunLoop::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for i in 0..5 {
            let seen = Arc::clone(&seen);
            run_loop.post(Box::new(move || seen.lock().unwrap().push(i)));
        }

        assert_eq!(run_loop.run_once(), 5);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3, 4]);
        assert!(run_loop.is_empty());
    }

    #[test]
    fn tasks_posted_during_drain_wait_for_next_drain() {
        let run_loop = RunLoop::new();
        let count = Arc::new(AtomicUsize::new(0));

        let reposter = {
            let run_loop = run_loop.clone();
            let count = Arc::clone(&count);
            Box::new(move || {
                count.fetch_add(1, Ordering::SeqCst);
                let count = Arc::clone(&count);
                run_loop.post(Box::new(move || {
                    count.fetch_add(1, Ordering::SeqCst);
                }));
            })
        };
        run_loop.post(reposter);

        assert_eq!(run_loop.run_once(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(run_loop.run_once(), 1);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn posting_from_other_threads_preserves_per_thread_order() {
        let run_loop = RunLoop::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let run_loop = run_loop.clone();
            let seen = Arc::clone(&seen);
            std::thread::spawn(move || {
                for i in 0..10 {
                    let seen = Arc::clone(&seen);
                    run_loop.post(Box::new(move || seen.lock().unwrap().push(i)));
                }
            })
        };
        handle.join().unwrap();

        run_loop.run_once();
        assert_eq!(*seen.lock().unwrap(), (0..10).collect::<Vec<_>>());
    }
}
