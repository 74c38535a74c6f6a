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

//! Provides structs for representing surface extents and screen offsets.
//!
//! These types describe the dimensions of the host-owned drawable surface and
//! positions within it. Extents use integer (`u32`) components, making them
//! suitable for pixel-based sizes; screen coordinates use `f64` because hosts
//! report sub-pixel pointer positions.

/// A two-dimensional extent, typically representing the surface width and height.
///
/// The surface size is host-authoritative: it is pushed into this layer by the
/// host and never queried back from the GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent2D {
    /// The width component of the extent, in pixels.
    pub width: u32,
    /// The height component of the extent, in pixels.
    pub height: u32,
}

impl Extent2D {
    /// Creates a new extent from a width and height in pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    ///
    /// A zero-sized surface cannot be drawn into; callers typically skip a
    /// render pass entirely when this holds.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A point or offset in screen pixels.
///
/// Used for pan offsets and scale anchors. Components are `f64` to carry
/// sub-pixel precision from host input events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenCoordinate {
    /// The x-coordinate, in pixels from the left edge of the surface.
    pub x: f64,
    /// The y-coordinate, in pixels from the top edge of the surface.
    pub y: f64,
}

impl ScreenCoordinate {
    /// Creates a new screen coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Insets from the four edges of the surface, in screen pixels.
///
/// Shrinks the area the camera centers content within, e.g. to keep the
/// focal point clear of host UI overlaying the map.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    /// Inset from the top edge, in pixels.
    pub top: f64,
    /// Inset from the left edge, in pixels.
    pub left: f64,
    /// Inset from the bottom edge, in pixels.
    pub bottom: f64,
    /// Inset from the right edge, in pixels.
    pub right: f64,
}

impl EdgeInsets {
    /// Creates insets from the four edge values.
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Returns `true` if every inset is zero.
    pub fn is_flush(&self) -> bool {
        self.top == 0.0 && self.left == 0.0 && self.bottom == 0.0 && self.right == 0.0
    }
}
