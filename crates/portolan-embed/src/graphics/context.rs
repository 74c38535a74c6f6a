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

//! Adapts a host-supplied [`ContextHooks`] bundle into the context the
//! renderer expects.
//!
//! The adapter owns nothing GPU-side. It delegates context operations to
//! the host hooks, tracks the host-pushed surface size, and re-asserts the
//! default-target binding on every pass because host GL contexts are
//! frequently shared and mutated externally between passes.

use portolan_core::graphics::{
    ContextHooks, GraphicsContext, ProcAddress, Renderable, SurfaceBinding,
};
use portolan_core::math::Extent2D;

/// The concrete context adapter handed to the renderer as a
/// [`RenderTarget`](portolan_core::graphics::RenderTarget).
pub struct HostGlContext {
    hooks: ContextHooks,
    size: Extent2D,
    binding: SurfaceBinding,
}

impl HostGlContext {
    /// Builds the adapter from the host's capability bundle.
    ///
    /// The surface size is read from the `surface_size` hook once, here;
    /// afterwards it only changes when the host pushes a new value through
    /// [`set_size`](Self::set_size).
    pub fn new(hooks: ContextHooks) -> Self {
        let size = (hooks.surface_size)();
        log::info!(
            "Host GL context adapter created ({}x{} px).",
            size.width,
            size.height
        );
        Self {
            hooks,
            size,
            binding: SurfaceBinding::default(),
        }
    }

    /// Host push of a new surface size.
    pub fn set_size(&mut self, size: Extent2D) {
        log::debug!("Surface size set to {}x{} px.", size.width, size.height);
        self.size = size;
    }

    /// The binding most recently asserted by
    /// [`bind_default_target`](Renderable::bind_default_target).
    pub fn binding(&self) -> SurfaceBinding {
        self.binding
    }
}

impl GraphicsContext for HostGlContext {
    fn activate(&mut self) {
        (self.hooks.make_current)();
    }

    fn deactivate(&mut self) {
        (self.hooks.clear_current)();
    }

    fn resolve_extension(&self, name: &str) -> ProcAddress {
        (self.hooks.extension_lookup)(name)
    }

    fn current_size(&self) -> Extent2D {
        self.size
    }
}

impl Renderable for HostGlContext {
    fn bind_default_target(&mut self) {
        // Framebuffer 0 and the full viewport, every time. Host GPU state
        // is not assumed to survive between calls.
        self.binding = SurfaceBinding {
            framebuffer: 0,
            viewport: self.size,
        };
    }

    fn present(&mut self) {
        (self.hooks.present)();
    }
}

impl Drop for HostGlContext {
    fn drop(&mut self) {
        if let Some(release) = self.hooks.release.take() {
            log::debug!("Releasing host GL context.");
            release();
        }
    }
}
