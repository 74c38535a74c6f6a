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

//! Cross-thread renderer event forwarder.
//!
//! The renderer raises lifecycle events from the engine's execution context.
//! [`ForwardingObserver`] implements [`RendererObserver`] by capturing each
//! event's arguments by value and posting the delivery onto the host run
//! loop: fire-and-forget, non-blocking for the raising thread, FIFO per
//! forwarder instance, no coalescing.
//!
//! The forwarder is closable. After `close()`, newly raised events are
//! dropped at the enqueue side and events already sitting in the mailbox are
//! dropped at the delivery side: the relay re-checks its closed flag on the
//! host thread. Dropped events are a silent loss by design; closing only
//! happens while the session that owns the delegate is tearing down or
//! replacing it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use portolan_core::renderer::{
    RenderMode, RendererObserver, ResourceError, StyleImageMissingDone,
};

use crate::run_loop::RunLoop;

/// The closable link between posted deliveries and the real observer.
struct ObserverRelay {
    delegate: Arc<dyn RendererObserver>,
    closed: AtomicBool,
}

impl ObserverRelay {
    /// Runs `deliver` against the delegate unless the relay has been closed.
    fn deliver(&self, deliver: impl FnOnce(&dyn RendererObserver)) {
        if self.closed.load(Ordering::Acquire) {
            log::trace!("Relay closed; dropping enqueued renderer event.");
            return;
        }
        deliver(&*self.delegate);
    }
}

/// Redelivers renderer lifecycle events on the host run loop, in order.
///
/// Installed on the renderer by the render session in place of the host's
/// own observer. The renderer may keep raising events from its threads after
/// the session has moved on to a new observer; those events hit the closed
/// relay and go nowhere.
pub struct ForwardingObserver {
    relay: Arc<ObserverRelay>,
    run_loop: RunLoop,
}

impl ForwardingObserver {
    /// Wraps `delegate`, binding deliveries to `run_loop`.
    pub fn new(run_loop: RunLoop, delegate: Arc<dyn RendererObserver>) -> Self {
        Self {
            relay: Arc::new(ObserverRelay {
                delegate,
                closed: AtomicBool::new(false),
            }),
            run_loop,
        }
    }

    /// Closes the relay: no event is delivered afterwards, enqueued or not.
    ///
    /// Closing twice is a no-op.
    pub fn close(&self) {
        self.relay.closed.store(true, Ordering::Release);
    }

    /// Returns `true` once the relay has been closed.
    pub fn is_closed(&self) -> bool {
        self.relay.closed.load(Ordering::Acquire)
    }

    fn post(&self, deliver: impl FnOnce(&dyn RendererObserver) + Send + 'static) {
        if self.is_closed() {
            log::trace!("Relay closed; dropping raised renderer event.");
            return;
        }
        let relay = Arc::clone(&self.relay);
        self.run_loop.post(Box::new(move || relay.deliver(deliver)));
    }
}

impl RendererObserver for ForwardingObserver {
    fn on_invalidate(&self) {
        self.post(|observer| observer.on_invalidate());
    }

    fn on_resource_error(&self, error: ResourceError) {
        self.post(move |observer| observer.on_resource_error(error));
    }

    fn on_will_start_rendering_map(&self) {
        self.post(|observer| observer.on_will_start_rendering_map());
    }

    fn on_will_start_rendering_frame(&self) {
        self.post(|observer| observer.on_will_start_rendering_frame());
    }

    fn on_did_finish_rendering_frame(
        &self,
        mode: RenderMode,
        repaint_needed: bool,
        placement_changed: bool,
    ) {
        self.post(move |observer| {
            observer.on_did_finish_rendering_frame(mode, repaint_needed, placement_changed)
        });
    }

    fn on_did_finish_rendering_map(&self) {
        self.post(|observer| observer.on_did_finish_rendering_map());
    }

    fn on_style_image_missing(&self, id: &str, done: StyleImageMissingDone) {
        let id = id.to_owned();
        self.post(move |observer| observer.on_style_image_missing(&id, done));
    }

    fn on_remove_unused_style_images(&self, ids: &[String]) {
        let ids = ids.to_vec();
        self.post(move |observer| observer.on_remove_unused_style_images(&ids));
    }
}

impl Drop for ForwardingObserver {
    fn drop(&mut self) {
        // Guarantees the relay is closed before the delegate can go away.
        self.close();
    }
}
