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

//! Defines the error value delivered through the renderer observer.

use std::fmt;

/// A resource loading or runtime error raised by the map engine.
///
/// Delivered to the host through
/// [`RendererObserver::on_resource_error`](super::RendererObserver::on_resource_error).
/// This layer is purely a transport for these: it neither retries nor
/// suppresses them, and all retry policy belongs to the engine. The value is
/// cloneable so it can cross the event forwarder by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// A network fetch for a style, tile, or glyph resource failed.
    Network {
        /// The URL that failed, when the engine reports one.
        url: Option<String>,
        /// Detailed error message from the engine's network stack.
        message: String,
    },
    /// A style document could not be parsed or applied.
    Style {
        /// Detailed error message from the style parser.
        message: String,
    },
    /// A requested resource does not exist.
    NotFound {
        /// The resource that was requested.
        resource: String,
    },
    /// Any other engine-reported failure.
    Other(String),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Network { url, message } => match url {
                Some(url) => write!(f, "Network request for '{url}' failed: {message}"),
                None => write!(f, "Network request failed: {message}"),
            },
            ResourceError::Style { message } => {
                write!(f, "Style could not be loaded: {message}")
            }
            ResourceError::NotFound { resource } => {
                write!(f, "Resource not found: {resource}")
            }
            ResourceError::Other(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ResourceError {}
