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

//! Defines the decoded image asset.

use khora_core::asset::{Asset, AssetTypeKey};

/// A decoded raster image with 8-bit RGBA pixels, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// The number of bytes per pixel.
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Creates an image from raw RGBA8 pixels.
    ///
    /// Returns `None` if either dimension is zero or if `pixels` does not hold
    /// exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(Self::BYTES_PER_PIXEL)?;

        if width == 0 || height == 0 || pixels.len() != expected {
            return None;
        }

        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA8 pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes the image and returns its pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Returns the RGBA value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let offset = (y as usize * self.width as usize + x as usize) * Self::BYTES_PER_PIXEL;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + Self::BYTES_PER_PIXEL]);
        Some(rgba)
    }
}

impl Asset for Image {
    const TYPE_KEY: AssetTypeKey = AssetTypeKey::new("image");
}
