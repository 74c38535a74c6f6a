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

//! Provides the public, host-agnostic graphics contracts for the embedding layer.
//!
//! This module defines the "common language" between the host's GL context and
//! the map engine's renderer. The host injects its context as a
//! [`ContextHooks`] capability bundle instead of subclassing anything; the
//! renderer consumes the adapted context through the narrow
//! [`GraphicsContext`] and [`Renderable`] traits. The concrete adapter that
//! connects the two lives in `portolan-embed`.

pub mod hooks;
pub mod traits;

pub use hooks::{ContextHooks, ProcAddress};
pub use traits::{GraphicsContext, RenderTarget, Renderable, SurfaceBinding};
