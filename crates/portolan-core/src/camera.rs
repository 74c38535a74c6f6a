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

//! Camera mutation and animation values.
//!
//! These are stateless request values: constructed per call, consumed
//! immediately by the map engine, never persisted by the embedding layer.
//! Absent fields mean "leave unchanged". "No animation" is expressed by
//! passing no [`AnimationOptions`] at all, never by a zero-duration value;
//! the engine treats the two differently.

use std::time::Duration;

use crate::math::{EdgeInsets, LngLat, ScreenCoordinate};

/// A camera mutation request.
///
/// Every field is optional; the engine applies only the fields that are set
/// and leaves the rest of its camera state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraOptions {
    /// Geographic point to center the viewport on.
    pub center: Option<LngLat>,
    /// Zoom level.
    pub zoom: Option<f64>,
    /// Bearing in degrees, measured clockwise from north.
    pub bearing: Option<f64>,
    /// Pitch in degrees away from the nadir.
    pub pitch: Option<f64>,
    /// Screen point to keep fixed while the other fields are applied.
    pub anchor: Option<ScreenCoordinate>,
    /// Edge insets shrinking the area the center is placed within.
    pub padding: Option<EdgeInsets>,
}

impl CameraOptions {
    /// Creates an empty request that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the center coordinate.
    pub fn with_center(mut self, center: LngLat) -> Self {
        self.center = Some(center);
        self
    }

    /// Sets the zoom level.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Sets the bearing in degrees.
    pub fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = Some(bearing);
        self
    }

    /// Sets the pitch in degrees.
    pub fn with_pitch(mut self, pitch: f64) -> Self {
        self.pitch = Some(pitch);
        self
    }

    /// Sets the anchor point.
    pub fn with_anchor(mut self, anchor: ScreenCoordinate) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Sets the edge padding.
    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = Some(padding);
        self
    }
}

/// An easing curve for animated camera transitions.
///
/// Animation progress is driven by the map engine's own timing; this layer
/// only carries the curve description through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Constant-velocity interpolation.
    Linear,
    /// A cubic bezier curve through `(0,0)`, the two control points, and `(1,1)`.
    CubicBezier {
        /// First control point.
        p1: (f64, f64),
        /// Second control point.
        p2: (f64, f64),
    },
}

impl Easing {
    /// The engine's default ease-in-ease-out curve.
    pub fn ease() -> Self {
        Easing::CubicBezier {
            p1: (0.25, 0.1),
            p2: (0.25, 1.0),
        }
    }
}

/// Options describing an animated camera transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationOptions {
    /// Total duration of the transition. Absent lets the engine choose.
    pub duration: Option<Duration>,
    /// Easing curve. Absent lets the engine choose.
    pub easing: Option<Easing>,
}

impl AnimationOptions {
    /// Creates options with the given duration and no explicit easing.
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration: Some(duration),
            easing: None,
        }
    }

    /// Sets the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}
