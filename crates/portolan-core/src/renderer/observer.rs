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

//! Renderer lifecycle observer contract.
//!
//! The renderer raises these events from its own execution context, usually
//! whichever engine thread finished a piece of work rather than the host
//! thread. A
//! host observer is therefore never installed on the renderer directly; the
//! render session wraps it in the cross-thread forwarder from
//! `portolan-embed`, which redelivers every event on the host's run loop in
//! the order raised.

use std::sync::Arc;

use super::error::ResourceError;

/// Completion callback for [`RendererObserver::on_style_image_missing`].
///
/// The host calls it once it has added the missing image (or decided not to);
/// shareable because it crosses the forwarder by value.
pub type StyleImageMissingDone = Arc<dyn Fn() + Send + Sync>;

/// How much of the frame the renderer produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Only a subset of layers was rendered.
    Partial,
    /// The full frame was rendered.
    Full,
}

/// Discrete notifications about renderer progress.
///
/// All methods have no-op defaults so hosts implement only what they need.
/// Implementations must be cheap and non-blocking: events are delivered on
/// the host's run loop, one drain per loop iteration.
pub trait RendererObserver: Send + Sync {
    /// The rendered state is out of date and a redraw should be scheduled.
    fn on_invalidate(&self) {}

    /// A resource failed to load or apply. Transport only; the host owns
    /// the retry policy.
    fn on_resource_error(&self, error: ResourceError) {
        let _ = error;
    }

    /// The renderer is about to start rendering the map for the first time.
    fn on_will_start_rendering_map(&self) {}

    /// A render pass is about to begin.
    fn on_will_start_rendering_frame(&self) {}

    /// A render pass finished.
    fn on_did_finish_rendering_frame(
        &self,
        mode: RenderMode,
        repaint_needed: bool,
        placement_changed: bool,
    ) {
        let _ = (mode, repaint_needed, placement_changed);
    }

    /// The map is fully rendered and idle.
    fn on_did_finish_rendering_map(&self) {}

    /// The style references an image this layer does not know; the host may
    /// supply it and then call `done`.
    fn on_style_image_missing(&self, id: &str, done: StyleImageMissingDone) {
        let _ = id;
        done();
    }

    /// Images previously supplied for the style are no longer referenced.
    fn on_remove_unused_style_images(&self, ids: &[String]) {
        let _ = ids;
    }
}
