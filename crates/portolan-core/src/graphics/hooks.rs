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

//! Host-provided GL context capability bundle.
//!
//! The host owns the GL context and surface; this layer never creates either.
//! Instead the host hands over a [`ContextHooks`] value at construction. The
//! required operations are non-optional boxed closures, so a misconfigured
//! host fails at construction rather than at first use. Only the `release`
//! hook may be absent (a legal no-op).
//!
//! All hooks must be safe to call from the thread that performs `render()`;
//! they are assumed infallible (host contract, not validated here).

use std::ffi::c_void;
use std::fmt;

use crate::math::Extent2D;

/// A resolved GL extension function pointer, or null if the host does not
/// provide the requested extension.
pub type ProcAddress = *const c_void;

/// Resolves a GL extension function by name.
pub type ExtensionLookupFn = Box<dyn Fn(&str) -> ProcAddress + Send>;

/// Reports the current drawable surface size in pixels.
pub type SurfaceSizeFn = Box<dyn Fn() -> Extent2D + Send>;

/// A parameterless context operation (make-current, clear-current, present).
pub type ContextOpFn = Box<dyn Fn() + Send>;

/// A one-shot teardown hook, consumed exactly once at adapter destruction.
pub type ReleaseFn = Box<dyn FnOnce() + Send>;

/// The injected bundle of host GL context operations.
///
/// Immutable once constructed: the adapter in `portolan-embed` holds it for
/// its entire lifetime and never swaps individual hooks. The bundle is a
/// value, not a live object: dropping it without ever constructing an
/// adapter does not invoke `release`.
pub struct ContextHooks {
    /// Looks up a GL extension function pointer by name.
    pub extension_lookup: ExtensionLookupFn,
    /// Reports the surface size. Read once, at adapter construction; size
    /// changes afterwards are pushed by the host, never polled.
    pub surface_size: SurfaceSizeFn,
    /// Makes the host GL context current on the calling thread.
    pub make_current: ContextOpFn,
    /// Clears the current GL context on the calling thread.
    pub clear_current: ContextOpFn,
    /// Presents the drawn surface. Only valid while the context is current.
    pub present: ContextOpFn,
    /// Optional teardown hook, invoked exactly once when the adapter is
    /// destroyed. `None` is a legal no-op.
    pub release: Option<ReleaseFn>,
}

impl fmt::Debug for ContextHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextHooks")
            .field("release", &self.release.is_some())
            .finish_non_exhaustive()
    }
}
