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

//! Defines the font asset.

use khora_core::asset::{Asset, AssetTypeKey};
use std::sync::Arc;

/// Global vertical metrics of a font, in font units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontMetrics {
    /// The number of font units per em square.
    pub units_per_em: u16,
    /// Distance from the baseline to the top of the tallest glyphs.
    pub ascender: i16,
    /// Distance from the baseline to the bottom of the lowest glyphs, usually negative.
    pub descender: i16,
    /// Extra spacing between lines.
    pub line_gap: i16,
    /// The number of glyphs in the font.
    pub glyph_count: u16,
}

/// A parsed TrueType/OpenType font.
///
/// The raw font data is kept so that derived assets (such as a
/// [`SpriteFont`](super::SpriteFont)) can query glyphs without reading the file
/// again.
#[derive(Debug, Clone)]
pub struct Font {
    data: Arc<[u8]>,
    family: Option<String>,
    metrics: FontMetrics,
}

impl Font {
    /// Creates a font from its raw data and the metrics read from it.
    pub fn new(data: impl Into<Arc<[u8]>>, family: Option<String>, metrics: FontMetrics) -> Self {
        Self {
            data: data.into(),
            family,
            metrics,
        }
    }

    /// The raw font file data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The font family name, if the font declares one.
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// The font's global metrics.
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// The factor converting font units to pixels at `pixel_size`.
    pub fn scale(&self, pixel_size: f32) -> f32 {
        pixel_size / f32::from(self.metrics.units_per_em.max(1))
    }
}

impl Asset for Font {
    const TYPE_KEY: AssetTypeKey = AssetTypeKey::new("font");
}
