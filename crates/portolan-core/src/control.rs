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

//! Work scheduling contract handed to the map engine.

/// A unit of background work submitted by the map engine.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Executes engine-submitted work off the host's main thread.
///
/// The contract is deliberately loose: tasks submitted from one thread are
/// started in FIFO order, but there is no ordering guarantee across
/// submitters and no completion notification. The engine uses this for tile
/// loading and other background processing; results come back through its
/// own channels, ultimately surfacing as a new frame update.
pub trait TaskScheduler: Send + Sync {
    /// Submits `task` for execution on a background thread.
    ///
    /// Never blocks the caller.
    fn schedule(&self, task: Task);
}
