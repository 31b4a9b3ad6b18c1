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

//! Image decoding.

use super::read_stream;
use khora_core::asset::{AssetLoader, LoadArgs};
use khora_core::content::{Content, LoadError};
use khora_data::assets::Image;

/// A lane dedicated to decoding image files (PNG, JPEG, BMP, ...) on the CPU.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageLoaderLane;

impl AssetLoader for ImageLoaderLane {
    type Asset = Image;

    fn load(&self, content: &dyn Content, path: &str, _args: &LoadArgs) -> Result<Image, LoadError> {
        let bytes = read_stream(content, path)?;
        decode_image(path, &bytes)
    }
}

/// Decodes an encoded image into RGBA8 pixels.
fn decode_image(path: &str, bytes: &[u8]) -> Result<Image, LoadError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| LoadError::decode(path, e))?;

    // Convert to RGBA8 (keep in sRGB space)
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Image::new(width, height, rgba.into_raw())
        .ok_or_else(|| LoadError::decode(path, "image has no pixels"))
}
