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

use std::any::Any;
use std::ptr;
use std::sync::{Arc, Mutex};
use std::thread::{self, ThreadId};
use std::time::Duration;

use anyhow::Result;
use portolan_core::camera::{AnimationOptions, CameraOptions};
use portolan_core::engine::{MapEngine, MapOptions, ResourceOptions};
use portolan_core::graphics::{ContextHooks, RenderTarget};
use portolan_core::math::{Extent2D, LngLat, ScreenCoordinate};
use portolan_core::renderer::{
    FrameUpdate, FrontendHooks, MapRenderer, RenderMode, RendererFrontend, RendererObserver,
};
use portolan_embed::{EngineDeps, HostGlContext, Map, RenderSession, RunLoop, WorkScheduler};

// --- Test doubles -----------------------------------------------------------

struct TestFrame {
    id: u32,
}

impl FrameUpdate for TestFrame {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Pass-through recorder standing in for the external map engine. Every
/// camera mutation produces a fresh frame update, the way the real engine
/// requests a redraw after changing its transform state.
struct MockEngine {
    frontend: Arc<dyn RendererFrontend>,
    options: MapOptions,
    calls: Arc<Mutex<Vec<String>>>,
    next_frame: u32,
}

impl MockEngine {
    fn publish(&mut self) {
        self.next_frame += 1;
        self.frontend.update(Arc::new(TestFrame {
            id: self.next_frame,
        }));
    }
}

impl MapEngine for MockEngine {
    fn jump_to(&mut self, camera: &CameraOptions) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("jump_to:{:?}:{:?}", camera.center, camera.zoom));
        self.publish();
    }

    fn ease_to(&mut self, camera: &CameraOptions, animation: &AnimationOptions) {
        self.calls.lock().unwrap().push(format!(
            "ease_to:{:?}:{:?}",
            camera.zoom, animation.duration
        ));
        self.publish();
    }

    fn move_by(&mut self, offset: ScreenCoordinate, animation: Option<&AnimationOptions>) {
        self.calls.lock().unwrap().push(format!(
            "move_by:{}:{}:{}",
            offset.x,
            offset.y,
            animation.is_some()
        ));
        self.publish();
    }

    fn scale_by(
        &mut self,
        factor: f64,
        anchor: Option<ScreenCoordinate>,
        animation: Option<&AnimationOptions>,
    ) {
        self.calls.lock().unwrap().push(format!(
            "scale_by:{}:{}:{}",
            factor,
            anchor.is_some(),
            animation.is_some()
        ));
        self.publish();
    }

    fn set_size(&mut self, size: Extent2D) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("set_size:{}x{}", size.width, size.height));
    }

    fn load_style_url(&mut self, url: &str) {
        self.calls.lock().unwrap().push(format!("style:{url}"));
    }

    fn options(&self) -> MapOptions {
        self.options.clone()
    }
}

struct DrawRecorder {
    observer: Arc<Mutex<Option<Arc<dyn RendererObserver>>>>,
    draws: Arc<Mutex<Vec<(u32, Extent2D)>>>,
}

impl MapRenderer for DrawRecorder {
    fn set_observer(&mut self, observer: Arc<dyn RendererObserver>) {
        *self.observer.lock().unwrap() = Some(observer);
    }

    fn render(&mut self, target: &mut dyn RenderTarget, update: &Arc<dyn FrameUpdate>) {
        let observer = self.observer.lock().unwrap().clone();
        if let Some(observer) = &observer {
            observer.on_will_start_rendering_frame();
        }

        target.bind_default_target();
        let id = update
            .as_any()
            .downcast_ref::<TestFrame>()
            .expect("foreign frame type")
            .id;
        self.draws.lock().unwrap().push((id, target.current_size()));
        target.present();

        if let Some(observer) = &observer {
            observer.on_did_finish_rendering_frame(RenderMode::Full, false, false);
        }
    }
}

/// Records frame lifecycle events with the thread they were delivered on.
#[derive(Default)]
struct LifecycleObserver {
    events: Mutex<Vec<(&'static str, ThreadId)>>,
}

impl RendererObserver for LifecycleObserver {
    fn on_will_start_rendering_frame(&self) {
        self.events
            .lock()
            .unwrap()
            .push(("will_start_frame", thread::current().id()));
    }

    fn on_did_finish_rendering_frame(
        &self,
        _mode: RenderMode,
        _repaint_needed: bool,
        _placement_changed: bool,
    ) {
        self.events
            .lock()
            .unwrap()
            .push(("did_finish_frame", thread::current().id()));
    }
}

struct MapHarness {
    map: Map,
    calls: Arc<Mutex<Vec<String>>>,
    draws: Arc<Mutex<Vec<(u32, Extent2D)>>>,
}

fn map_harness(options: MapOptions) -> MapHarness {
    let _ = env_logger::builder().is_test(true).try_init();

    let calls = Arc::new(Mutex::new(Vec::new()));
    let draws = Arc::new(Mutex::new(Vec::new()));
    let installed = Arc::new(Mutex::new(None));
    let size = options.size;

    let hooks = ContextHooks {
        extension_lookup: Box::new(|_| ptr::null()),
        surface_size: Box::new(move || size),
        make_current: Box::new(|| {}),
        clear_current: Box::new(|| {}),
        present: Box::new(|| {}),
        release: None,
    };
    let renderer_draws = Arc::clone(&draws);
    let session = Arc::new(RenderSession::new(
        HostGlContext::new(hooks),
        FrontendHooks {
            pixel_ratio: Box::new(|| 1.0),
            invalidate: Box::new(|| {}),
            release: None,
        },
        RunLoop::new(),
        move |_| {
            Box::new(DrawRecorder {
                observer: installed,
                draws: renderer_draws,
            })
        },
    ));

    let engine_calls = Arc::clone(&calls);
    let map = Map::new(
        session,
        Arc::new(WorkScheduler::new(2)),
        options,
        ResourceOptions::new().with_access_token("pk.test"),
        move |deps: EngineDeps| {
            Box::new(MockEngine {
                frontend: deps.frontend,
                options: deps.options,
                calls: engine_calls,
                next_frame: 0,
            })
        },
    );

    MapHarness { map, calls, draws }
}

// --- Tests ------------------------------------------------------------------

#[test]
fn initial_style_url_is_loaded_at_construction() {
    let h = map_harness(
        MapOptions::default()
            .with_size(Extent2D::new(800, 600))
            .with_style_url("https://styles.example/dark.json"),
    );

    assert_eq!(
        h.calls.lock().unwrap().first().map(String::as_str),
        Some("style:https://styles.example/dark.json")
    );
    assert_eq!(
        h.map.options().style_url.as_deref(),
        Some("https://styles.example/dark.json")
    );
}

#[test]
fn camera_calls_pass_through_verbatim() {
    let mut h = map_harness(MapOptions::default().with_size(Extent2D::new(800, 600)));

    h.map
        .jump_to(&CameraOptions::new().with_center(LngLat::new(0.0, 0.0)).with_zoom(2.0));
    h.map.ease_to(
        &CameraOptions::new().with_zoom(4.0),
        &AnimationOptions::with_duration(Duration::from_millis(300)),
    );
    h.map.move_by(ScreenCoordinate::new(12.0, -4.0), None);
    h.map.scale_by(2.0, Some(ScreenCoordinate::new(400.0, 300.0)), None);

    let calls = h.calls.lock().unwrap();
    assert_eq!(calls.len(), 4);
    assert!(calls[0].starts_with("jump_to:Some(LngLat"));
    assert_eq!(calls[1], "ease_to:Some(4.0):Some(300ms)");
    assert_eq!(calls[2], "move_by:12:-4:false");
    assert_eq!(calls[3], "scale_by:2:true:false");
}

#[test]
fn set_size_reaches_engine_and_context_adapter() {
    let mut h = map_harness(MapOptions::default().with_size(Extent2D::new(800, 600)));

    h.map.set_size(Extent2D::new(1024, 768));

    assert_eq!(
        h.calls.lock().unwrap().as_slice(),
        &["set_size:1024x768".to_string()]
    );
    assert_eq!(h.map.session().surface_size(), Extent2D::new(1024, 768));
}

#[test]
fn end_to_end_camera_to_frame_scenario() -> Result<()> {
    let mut h = map_harness(MapOptions::default().with_size(Extent2D::new(800, 600)));

    let observer = Arc::new(LifecycleObserver::default());
    h.map.set_observer(observer.clone());

    // Camera mutation → engine publishes frame 1 → host renders at 800x600.
    h.map
        .jump_to(&CameraOptions::new().with_center(LngLat::new(0.0, 0.0)).with_zoom(2.0));
    h.map.render();

    // Host resize → engine publishes frame 2 → host renders at 400x300.
    h.map.set_size(Extent2D::new(400, 300));
    h.map.move_by(ScreenCoordinate::new(1.0, 1.0), None);
    h.map.render();

    assert_eq!(
        h.draws.lock().unwrap().as_slice(),
        &[
            (1, Extent2D::new(800, 600)),
            (2, Extent2D::new(400, 300)),
        ]
    );

    // Frame lifecycle events: exactly two of each, in relative order, all
    // delivered on the host thread.
    let host = thread::current().id();
    let events = observer.events.lock().unwrap();
    assert_eq!(
        events
            .iter()
            .map(|&(name, _)| name)
            .collect::<Vec<_>>(),
        vec![
            "will_start_frame",
            "did_finish_frame",
            "will_start_frame",
            "did_finish_frame",
        ]
    );
    assert!(events.iter().all(|&(_, thread)| thread == host));
    Ok(())
}
