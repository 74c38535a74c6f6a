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

//! Geographic position type passed through to the map engine.

/// A geographic coordinate in degrees (WGS84).
///
/// This layer performs no projection or wrapping; the value is handed to the
/// map engine verbatim as part of a camera mutation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LngLat {
    /// Longitude in degrees. East is positive.
    pub lng: f64,
    /// Latitude in degrees. North is positive.
    pub lat: f64,
}

impl LngLat {
    /// Creates a new coordinate from longitude and latitude in degrees.
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}
