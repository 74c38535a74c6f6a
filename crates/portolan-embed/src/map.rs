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

//! The map facade: thin orchestration over the session, the scheduler, and
//! the external map engine.
//!
//! Camera operations are pure pass-throughs; the engine owns all map
//! semantics. The facade's own responsibilities are wiring (handing the
//! engine its frontend and scheduler at construction), size fan-out to both
//! the engine and the context adapter, and delegating `render` to the
//! session.

use std::sync::Arc;

use portolan_core::camera::{AnimationOptions, CameraOptions};
use portolan_core::control::TaskScheduler;
use portolan_core::engine::{MapEngine, MapOptions, ResourceOptions};
use portolan_core::math::{Extent2D, ScreenCoordinate};
use portolan_core::renderer::{RendererFrontend, RendererObserver};

use crate::scheduler::WorkScheduler;
use crate::session::RenderSession;

/// Everything the external map engine needs from this layer at construction.
pub struct EngineDeps {
    /// Where the engine pushes new update parameters.
    pub frontend: Arc<dyn RendererFrontend>,
    /// Where the engine submits background work.
    pub scheduler: Arc<dyn TaskScheduler>,
    /// Construction options, passed through verbatim.
    pub options: MapOptions,
    /// Resource configuration, passed through verbatim.
    pub resources: ResourceOptions,
}

/// An embedded map bound to one host surface.
pub struct Map {
    // Declaration order is drop order: engine first (it may hold frontend
    // and scheduler handles), then the session, then the worker pool.
    engine: Box<dyn MapEngine>,
    session: Arc<RenderSession>,
    #[allow(dead_code)]
    scheduler: Arc<WorkScheduler>,
}

impl Map {
    /// Wires a map together: hands the engine its frontend and scheduler,
    /// constructs it through `engine_factory`, and loads the initial style
    /// URL if the options carry one.
    pub fn new(
        session: Arc<RenderSession>,
        scheduler: Arc<WorkScheduler>,
        options: MapOptions,
        resources: ResourceOptions,
        engine_factory: impl FnOnce(EngineDeps) -> Box<dyn MapEngine>,
    ) -> Self {
        let style_url = options.style_url.clone();
        let mut engine = engine_factory(EngineDeps {
            frontend: Arc::clone(&session) as Arc<dyn RendererFrontend>,
            scheduler: Arc::clone(&scheduler) as Arc<dyn TaskScheduler>,
            options,
            resources,
        });

        if let Some(url) = style_url {
            log::info!("Loading initial style: {url}");
            engine.load_style_url(&url);
        }

        Self {
            engine,
            session,
            scheduler,
        }
    }

    /// Draws the buffered frame, if any. Host thread only.
    pub fn render(&self) {
        self.session.render_frame();
    }

    /// Installs the host's renderer observer (wrapped in the cross-thread
    /// forwarder by the session).
    pub fn set_observer(&self, observer: Arc<dyn RendererObserver>) {
        self.session.set_observer(observer);
    }

    /// Applies a camera mutation immediately.
    pub fn jump_to(&mut self, camera: &CameraOptions) {
        self.engine.jump_to(camera);
    }

    /// Applies a camera mutation as an animated transition.
    pub fn ease_to(&mut self, camera: &CameraOptions, animation: &AnimationOptions) {
        self.engine.ease_to(camera, animation);
    }

    /// Pans by a screen-pixel offset. `None` animation means engine default.
    pub fn move_by(&mut self, offset: ScreenCoordinate, animation: Option<&AnimationOptions>) {
        self.engine.move_by(offset, animation);
    }

    /// Scales by `factor`, optionally around a fixed anchor.
    pub fn scale_by(
        &mut self,
        factor: f64,
        anchor: Option<ScreenCoordinate>,
        animation: Option<&AnimationOptions>,
    ) {
        self.engine.scale_by(factor, anchor, animation);
    }

    /// Propagates a new surface size to both the engine and the context
    /// adapter.
    pub fn set_size(&mut self, size: Extent2D) {
        self.engine.set_size(size);
        self.session.set_size(size);
    }

    /// Returns the options the engine was constructed with.
    pub fn options(&self) -> MapOptions {
        self.engine.options()
    }

    /// The render session backing this map.
    pub fn session(&self) -> &Arc<RenderSession> {
        &self.session
    }
}
