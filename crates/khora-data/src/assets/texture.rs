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

//! Defines the CPU-side texture asset.

use super::Image;
use khora_core::asset::{Asset, AssetTypeKey};

/// The pixel format of a [`Texture`].
///
/// Decoded images are always sRGB encoded RGBA8, so that is the only format
/// a loaded texture can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// 8-bit RGBA, sRGB encoded.
    Rgba8UnormSrgb,
}

/// A texture ready to be uploaded to the GPU.
///
/// Textures are built from an [`Image`]; the texture loader obtains that image
/// through the content manager rather than decoding files itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// The texel format of `pixels`.
    pub format: TextureFormat,
    /// The number of mip levels present in `pixels`. Only the base level is produced on load.
    pub mip_level_count: u32,
    /// The raw texel data.
    pub pixels: Vec<u8>,
}

impl Texture {
    /// Wraps a decoded image as an sRGB texture with a single mip level.
    pub fn from_image(image: Image) -> Self {
        let (width, height) = (image.width(), image.height());

        Self {
            width,
            height,
            format: TextureFormat::Rgba8UnormSrgb,
            mip_level_count: 1,
            pixels: image.into_pixels(),
        }
    }
}

impl From<Image> for Texture {
    fn from(image: Image) -> Self {
        Self::from_image(image)
    }
}

impl Asset for Texture {
    const TYPE_KEY: AssetTypeKey = AssetTypeKey::new("texture");
}
