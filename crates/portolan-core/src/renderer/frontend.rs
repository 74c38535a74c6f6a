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

//! The frontend seam between the map engine and the render session.
//!
//! The engine produces a new update-parameters value whenever its internal
//! state changes and pushes it through [`RendererFrontend::update`], from
//! whichever engine thread produced it. The session buffers only the most
//! recent value (last-write-wins) and draws it when the host next calls
//! render.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An opaque frame-update value produced by the map engine.
///
/// The embedding layer never inspects it; it is shared between the producing
/// engine thread and the host render thread as `Arc<dyn FrameUpdate>`, and
/// handed back to the engine's renderer at draw time. `as_any` lets the
/// engine recover its concrete type on the other side of the boundary.
pub trait FrameUpdate: Send + Sync + 'static {
    /// Downcast support for the engine's own renderer.
    fn as_any(&self) -> &dyn Any;
}

/// The handle the map engine uses to deliver new update parameters.
///
/// Implemented by the render session in `portolan-embed`. `update` is safe
/// to call from any engine thread; it replaces the pending frame atomically
/// with respect to a concurrent render and asks the host (through the
/// invalidate hook) to schedule a future redraw.
pub trait RendererFrontend: Send + Sync {
    /// Replaces the pending frame with `update` and requests a redraw.
    fn update(&self, update: Arc<dyn FrameUpdate>);
}

/// Reports the host's device pixel ratio.
pub type PixelRatioFn = Box<dyn Fn() -> f32 + Send>;

/// Asks the host to schedule a future render call on the host thread.
///
/// May be invoked from any thread.
pub type InvalidateFn = Box<dyn Fn() + Send + Sync>;

/// A one-shot teardown hook, consumed once when the session is destroyed.
pub type FrontendReleaseFn = Box<dyn FnOnce() + Send>;

/// The injected bundle of host frontend operations.
///
/// Mirrors [`ContextHooks`](crate::graphics::ContextHooks): required hooks
/// are non-optional by construction, `release` may be absent.
pub struct FrontendHooks {
    /// Device pixel ratio. Read once, when the renderer is constructed.
    pub pixel_ratio: PixelRatioFn,
    /// Marks the surface dirty so the host eventually calls render again.
    pub invalidate: InvalidateFn,
    /// Optional teardown hook, invoked exactly once at session destruction.
    pub release: Option<FrontendReleaseFn>,
}

impl fmt::Debug for FrontendHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrontendHooks")
            .field("release", &self.release.is_some())
            .finish_non_exhaustive()
    }
}
