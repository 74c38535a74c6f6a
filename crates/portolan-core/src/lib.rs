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

//! # Portolan Core
//!
//! Foundational crate containing traits, core types, and interface contracts
//! for embedding a native map-rendering engine into a host application.
//!
//! The host supplies its graphics context and event loop through small
//! capability bundles ([`graphics::ContextHooks`]); the map engine and its
//! renderer are consumed through narrow trait contracts ([`engine::MapEngine`],
//! [`renderer::MapRenderer`]). The concrete machinery (context adapter,
//! cross-thread observer forwarder, render session, and map facade) lives
//! in `portolan-embed`.

#![warn(missing_docs)]

pub mod camera;
pub mod control;
pub mod engine;
pub mod graphics;
pub mod math;
pub mod renderer;

pub use camera::{AnimationOptions, CameraOptions};
pub use math::{EdgeInsets, Extent2D, LngLat, ScreenCoordinate};
