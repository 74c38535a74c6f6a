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

//! # Portolan Embed
//!
//! Concrete implementations of the embedding boundary declared in
//! `portolan-core`: the host GL context adapter, the host run-loop mailbox,
//! the cross-thread observer forwarder, the render session, the background
//! work scheduler, and the map facade.
//!
//! Two execution contexts meet here. The **host thread** owns the surface,
//! drives camera calls and `render()`, and drains the run loop. The
//! **engine context** produces frame updates and raises renderer lifecycle
//! events from whichever of its threads finished the work. Everything that
//! crosses between the two goes through either the single-slot pending-frame
//! handoff in [`session::RenderSession`] or the mailbox in
//! [`forward::ForwardingObserver`].

pub mod forward;
pub mod graphics;
pub mod map;
pub mod run_loop;
pub mod scheduler;
pub mod session;

pub use forward::ForwardingObserver;
pub use graphics::{ContextScope, HostGlContext};
pub use map::{EngineDeps, Map};
pub use run_loop::RunLoop;
pub use scheduler::WorkScheduler;
pub use session::RenderSession;
