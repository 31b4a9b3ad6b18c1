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


//! The default loader lanes.
//!
//! Each lane decodes one asset type. Lanes that build on another asset type
//! request it through the [`Content`] they are given instead of decoding it
//! themselves.

mod aseprite_loader_lane;
mod font_loader_lane;
mod image_loader_lane;
mod sprite_font_loader_lane;
mod text_loader_lane;
mod texture_loader_lane;

pub use aseprite_loader_lane::*;
pub use font_loader_lane::*;
pub use image_loader_lane::*;
pub use sprite_font_loader_lane::*;
pub use text_loader_lane::*;
pub use texture_loader_lane::*;

use khora_core::content::{Content, LoadError};
use std::io::Read;

/// Reads the whole file at `path` from the content source.
///
/// The stream is closed before returning, on success and on failure.
fn read_stream(content: &dyn Content, path: &str) -> Result<Vec<u8>, LoadError> {
    let mut stream = content.source().open_read(path)?;
    let mut bytes = Vec::new();
    stream
        .read_to_end(&mut bytes)
        .map_err(|e| LoadError::io(path, e))?;
    Ok(bytes)
}
