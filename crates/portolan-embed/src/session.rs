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

//! The render session: owns the renderer, the adapted context, and the
//! pending-frame handoff between the engine and the host.
//!
//! The engine may request redraws far more often than the host can present
//! frames, so update parameters are buffered last-write-wins in a single
//! slot rather than queued: the renderer always draws the most current
//! state, never a stale intermediate one, and no backlog can build up.
//!
//! `update` may be called from any engine thread. `render_frame` runs on
//! the host thread only and is never self-concurrent (the host serializes
//! render calls, typically off a display refresh callback).

use std::sync::{Arc, Mutex};

use portolan_core::graphics::GraphicsContext;
use portolan_core::math::Extent2D;
use portolan_core::renderer::frontend::{FrontendReleaseFn, InvalidateFn};
use portolan_core::renderer::{
    FrameUpdate, FrontendHooks, MapRenderer, RendererFrontend, RendererObserver,
};

use crate::forward::ForwardingObserver;
use crate::graphics::{ContextScope, HostGlContext};
use crate::run_loop::RunLoop;

/// Coordinates "request a redraw" (engine, asynchronous) with "perform a
/// redraw" (host, synchronous).
///
/// Created once per map instance; destroyed when the host releases the map.
/// Teardown order is strict: forwarder closed first, then the frontend
/// release hook fires, then the renderer drops, then the context (which
/// fires the host's context release hook last).
pub struct RenderSession {
    // Field declaration order is drop order: the observer relay must close
    // before the renderer goes away, and the renderer before the context.
    observer: Mutex<Option<Arc<ForwardingObserver>>>,
    renderer: Mutex<Option<Box<dyn MapRenderer>>>,
    backend: Mutex<HostGlContext>,
    pending: Mutex<Option<Arc<dyn FrameUpdate>>>,
    invalidate: InvalidateFn,
    release: Mutex<Option<FrontendReleaseFn>>,
    run_loop: RunLoop,
}

impl RenderSession {
    /// Builds a session around an adapted context and the host's frontend
    /// hooks.
    ///
    /// `renderer_factory` receives the host's device pixel ratio (read from
    /// the hook exactly once, here) and constructs the engine's renderer.
    pub fn new(
        backend: HostGlContext,
        hooks: FrontendHooks,
        run_loop: RunLoop,
        renderer_factory: impl FnOnce(f32) -> Box<dyn MapRenderer>,
    ) -> Self {
        let pixel_ratio = (hooks.pixel_ratio)();
        log::info!("Render session created (pixel ratio {pixel_ratio}).");
        Self {
            observer: Mutex::new(None),
            renderer: Mutex::new(Some(renderer_factory(pixel_ratio))),
            backend: Mutex::new(backend),
            pending: Mutex::new(None),
            invalidate: hooks.invalidate,
            release: Mutex::new(hooks.release),
            run_loop,
        }
    }

    /// Installs `observer` as the receiver of renderer lifecycle events.
    ///
    /// The previous forwarder, if any, is closed first: events the renderer
    /// raises against it afterwards, enqueued or not, never reach the old
    /// observer.
    ///
    /// # Panics
    /// Panics if called after [`reset`](Self::reset).
    pub fn set_observer(&self, observer: Arc<dyn RendererObserver>) {
        let forwarder = Arc::new(ForwardingObserver::new(self.run_loop.clone(), observer));

        let mut slot = self.observer.lock().unwrap();
        if let Some(old) = slot.take() {
            old.close();
        }
        *slot = Some(Arc::clone(&forwarder));
        drop(slot);

        self.renderer
            .lock()
            .unwrap()
            .as_mut()
            .expect("set_observer() called after reset()")
            .set_observer(forwarder as Arc<dyn RendererObserver>);
    }

    /// Draws the buffered frame, if any.
    ///
    /// No pending frame means nothing new to draw: the context is not
    /// activated and the renderer is not invoked. Otherwise the context is
    /// activated for the duration of the pass (deactivation is unconditional,
    /// unwinds included), the renderer draws the current snapshot, and one
    /// run-loop iteration is drained so lifecycle events raised during the
    /// draw are observed promptly.
    ///
    /// The snapshot is cloned, not taken: a later `render_frame` without an
    /// intervening update redraws the same parameters.
    ///
    /// # Panics
    /// Panics if called after [`reset`](Self::reset).
    pub fn render_frame(&self) {
        let update = match self.pending.lock().unwrap().clone() {
            Some(update) => update,
            None => return,
        };

        let mut renderer = self.renderer.lock().unwrap();
        let renderer = renderer
            .as_mut()
            .expect("render_frame() called after reset()");

        let mut backend = self.backend.lock().unwrap();
        let mut scope = ContextScope::new(&mut *backend);
        renderer.render(&mut *scope, &update);
        self.run_loop.run_once();
    }

    /// Host push of a new surface size into the context adapter.
    pub fn set_size(&self, size: Extent2D) {
        self.backend.lock().unwrap().set_size(size);
    }

    /// The current surface size, as last pushed by the host.
    pub fn surface_size(&self) -> Extent2D {
        self.backend.lock().unwrap().current_size()
    }

    /// Disposes the renderer. Irreversible: rendering operations afterwards
    /// are a programming error.
    ///
    /// # Panics
    /// Panics if called twice.
    pub fn reset(&self) {
        let disposed = self.renderer.lock().unwrap().take();
        assert!(disposed.is_some(), "reset() called twice");
        log::info!("Render session reset; renderer disposed.");
    }
}

impl RendererFrontend for RenderSession {
    fn update(&self, update: Arc<dyn FrameUpdate>) {
        // Last write wins; a concurrent render_frame sees either the old or
        // the new snapshot, never a torn one.
        *self.pending.lock().unwrap() = Some(update);
        (self.invalidate)();
    }
}

impl Drop for RenderSession {
    fn drop(&mut self) {
        if let Some(forwarder) = self.observer.get_mut().unwrap().take() {
            forwarder.close();
        }
        if let Some(release) = self.release.get_mut().unwrap().take() {
            release();
        }
        // Renderer and context fields drop in declaration order after this,
        // firing the context release hook last.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portolan_core::graphics::{ContextHooks, RenderTarget};
    use std::ptr;

    struct NullRenderer;

    impl MapRenderer for NullRenderer {
        fn set_observer(&mut self, _observer: Arc<dyn RendererObserver>) {}

        fn render(&mut self, _target: &mut dyn RenderTarget, _update: &Arc<dyn FrameUpdate>) {}
    }

    fn null_session() -> RenderSession {
        let hooks = ContextHooks {
            extension_lookup: Box::new(|_| ptr::null()),
            surface_size: Box::new(|| Extent2D::new(16, 16)),
            make_current: Box::new(|| {}),
            clear_current: Box::new(|| {}),
            present: Box::new(|| {}),
            release: None,
        };
        RenderSession::new(
            HostGlContext::new(hooks),
            FrontendHooks {
                pixel_ratio: Box::new(|| 1.0),
                invalidate: Box::new(|| {}),
                release: None,
            },
            RunLoop::new(),
            |_| Box::new(NullRenderer),
        )
    }

    #[test]
    #[should_panic(expected = "render_frame() called after reset()")]
    fn render_after_reset_is_a_precondition_violation() {
        struct Frame;
        impl FrameUpdate for Frame {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }

        let session = null_session();
        session.update(Arc::new(Frame));
        session.reset();
        session.render_frame();
    }

    #[test]
    #[should_panic(expected = "reset() called twice")]
    fn double_reset_is_a_precondition_violation() {
        let session = null_session();
        session.reset();
        session.reset();
    }
}
