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

//! Contracts between the embedding layer and the map engine's renderer.
//!
//! The renderer itself is an external collaborator: the engine constructs it,
//! and this layer drives it through [`MapRenderer`] while receiving its
//! lifecycle events through [`RendererObserver`]. Update parameters flow the
//! other way, from the engine into the render session, through
//! [`RendererFrontend`].

pub mod error;
pub mod frontend;
pub mod observer;

pub use error::ResourceError;
pub use frontend::{FrameUpdate, FrontendHooks, RendererFrontend};
pub use observer::{RenderMode, RendererObserver, StyleImageMissingDone};

use std::sync::Arc;

use crate::graphics::RenderTarget;

/// The consumed renderer interface.
///
/// Provided by the external map engine. The render session owns exactly one
/// instance per map, constructed with the host's pixel ratio, and disposes it
/// on `reset()`.
pub trait MapRenderer: Send {
    /// Installs the observer that receives this renderer's lifecycle events.
    ///
    /// Replaces any previously installed observer.
    fn set_observer(&mut self, observer: Arc<dyn RendererObserver>);

    /// Draws one frame from `update` into the target.
    ///
    /// The target's context is already active when this is called; the
    /// renderer binds the default target itself via
    /// [`Renderable::bind_default_target`](crate::graphics::Renderable::bind_default_target).
    fn render(&mut self, target: &mut dyn RenderTarget, update: &Arc<dyn FrameUpdate>);
}
