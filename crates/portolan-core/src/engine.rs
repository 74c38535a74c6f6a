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

//! Consumed map-engine contract and its construction options.
//!
//! The map engine is an external collaborator: it owns all map semantics
//! (projection, animation timing, style handling, tile loading). The facade
//! in `portolan-embed` forwards camera calls to it verbatim and owns no map
//! logic itself.

use std::path::PathBuf;

use crate::camera::{AnimationOptions, CameraOptions};
use crate::math::{Extent2D, ScreenCoordinate};

/// The consumed map-engine interface.
///
/// All camera operations are pass-through: the engine mutates its internal
/// state and, when it needs a redraw, pushes a new frame update through the
/// [`RendererFrontend`](crate::renderer::RendererFrontend) it was given at
/// construction.
pub trait MapEngine: Send {
    /// Applies `camera` immediately, without animation.
    fn jump_to(&mut self, camera: &CameraOptions);

    /// Applies `camera` as an animated transition.
    ///
    /// Animation progress is driven by the engine's own timing, not by the
    /// embedding layer.
    fn ease_to(&mut self, camera: &CameraOptions, animation: &AnimationOptions);

    /// Pans the map by a screen-pixel offset.
    ///
    /// `None` animation means "engine default", which is distinct from an
    /// explicit zero-duration animation.
    fn move_by(&mut self, offset: ScreenCoordinate, animation: Option<&AnimationOptions>);

    /// Scales the map by `factor`, optionally around a fixed screen anchor.
    fn scale_by(
        &mut self,
        factor: f64,
        anchor: Option<ScreenCoordinate>,
        animation: Option<&AnimationOptions>,
    );

    /// Propagates a new surface size into the engine's transform state.
    fn set_size(&mut self, size: Extent2D);

    /// Loads a style document by URL.
    fn load_style_url(&mut self, url: &str);

    /// Returns the options the engine was constructed with.
    fn options(&self) -> MapOptions;
}

/// Construction-time options passed through to the map engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    /// Initial surface size in pixels.
    pub size: Extent2D,
    /// Device pixel ratio of the host surface.
    pub pixel_ratio: f32,
    /// Style URL to load immediately after construction, if any.
    pub style_url: Option<String>,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            size: Extent2D::default(),
            pixel_ratio: 1.0,
            style_url: None,
        }
    }
}

impl MapOptions {
    /// Sets the initial surface size.
    pub fn with_size(mut self, size: Extent2D) -> Self {
        self.size = size;
        self
    }

    /// Sets the device pixel ratio.
    pub fn with_pixel_ratio(mut self, pixel_ratio: f32) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    /// Sets the style URL loaded at construction.
    pub fn with_style_url(mut self, url: impl Into<String>) -> Self {
        self.style_url = Some(url.into());
        self
    }
}

/// Resource configuration passed through to the map engine.
///
/// Pure pass-through value setters; this layer owns no network or on-disk
/// format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResourceOptions {
    /// On-disk cache location for the engine's resource loader.
    pub cache_path: Option<PathBuf>,
    /// Access token sent with tile and style requests.
    pub access_token: Option<String>,
}

impl ResourceOptions {
    /// Creates empty resource options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the engine cache path.
    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// Sets the access token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}
