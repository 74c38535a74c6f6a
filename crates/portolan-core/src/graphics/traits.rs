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

//! Context capability traits consumed by the map engine's renderer.
//!
//! These replace a framework base-class hierarchy with two narrow traits:
//! [`GraphicsContext`] for context lifetime operations and [`Renderable`] for
//! default-target operations. A single adapter type implements both; the
//! renderer only ever sees the combined [`RenderTarget`] view.

use super::hooks::ProcAddress;
use crate::math::Extent2D;

/// The binding state the adapter asserts for the default render target.
///
/// Re-recorded on every [`Renderable::bind_default_target`] call; the adapter
/// never assumes the host has preserved GPU binding state between calls,
/// because host GL contexts are frequently shared and mutated externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceBinding {
    /// The bound framebuffer object. Always 0 (the default framebuffer).
    pub framebuffer: u32,
    /// The asserted viewport, spanning the full current surface size.
    pub viewport: Extent2D,
}

/// Context lifetime operations a renderer requires from the host GL context.
///
/// `activate` and `deactivate` are not reentrant: one `activate` must be
/// paired with exactly one `deactivate` before the context may be activated
/// again. Callers hold the adapter by `&mut`, so exclusivity is carried by
/// the borrow rather than a runtime lock.
pub trait GraphicsContext {
    /// Makes the host context current on the calling thread.
    fn activate(&mut self);

    /// Clears the current context on the calling thread.
    fn deactivate(&mut self);

    /// Resolves a GL extension function by name.
    fn resolve_extension(&self, name: &str) -> ProcAddress;

    /// Returns the last surface size pushed by the host.
    ///
    /// Never performs a fresh GPU query; size changes are host-driven,
    /// not polled.
    fn current_size(&self) -> Extent2D;
}

/// Default-render-target operations a renderer requires while drawing.
pub trait Renderable {
    /// Re-asserts binding of the default framebuffer and a full
    /// current-size viewport.
    ///
    /// Invoked by the renderer at the start of every pass; must make no
    /// assumptions about GPU state left over from previous passes.
    fn bind_default_target(&mut self);

    /// Presents the drawn surface through the host presentation hook.
    ///
    /// Only valid while the context is active.
    fn present(&mut self);
}

/// The combined context view handed to the renderer during a render pass.
pub trait RenderTarget: GraphicsContext + Renderable {}

impl<T: GraphicsContext + Renderable> RenderTarget for T {}
