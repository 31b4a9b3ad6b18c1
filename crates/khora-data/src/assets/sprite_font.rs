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

//! Defines the sprite font asset: a font prepared at a fixed pixel size.

use super::Font;
use khora_core::asset::{Asset, AssetTypeKey};
use std::collections::HashMap;

/// Layout information for one character of a [`SpriteFont`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteGlyph {
    /// The character this glyph renders.
    pub character: char,
    /// The horizontal advance in pixels.
    pub advance: f32,
}

/// A [`Font`] sized for rendering at a fixed pixel size.
#[derive(Debug, Clone)]
pub struct SpriteFont {
    font: Font,
    size: f32,
    ascent: f32,
    descent: f32,
    line_gap: f32,
    glyphs: HashMap<char, SpriteGlyph>,
}

impl SpriteFont {
    /// Creates a sprite font of `size` pixels from `font`, without glyphs.
    pub fn new(font: Font, size: f32) -> Self {
        let scale = font.scale(size);
        let metrics = font.metrics();

        Self {
            ascent: f32::from(metrics.ascender) * scale,
            descent: f32::from(metrics.descender) * scale,
            line_gap: f32::from(metrics.line_gap) * scale,
            font,
            size,
            glyphs: HashMap::new(),
        }
    }

    /// Adds glyphs to the sprite font, replacing existing entries for the same character.
    pub fn with_glyphs(mut self, glyphs: impl IntoIterator<Item = SpriteGlyph>) -> Self {
        self.glyphs
            .extend(glyphs.into_iter().map(|glyph| (glyph.character, glyph)));
        self
    }

    /// The font this sprite font was built from.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// The pixel size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Distance in pixels from the baseline to the top of a line.
    pub fn ascent(&self) -> f32 {
        self.ascent
    }

    /// Distance in pixels from the baseline to the bottom of a line, usually negative.
    pub fn descent(&self) -> f32 {
        self.descent
    }

    /// Distance in pixels between two consecutive baselines.
    pub fn line_height(&self) -> f32 {
        self.ascent - self.descent + self.line_gap
    }

    /// Returns the glyph for `character`, if the sprite font has one.
    pub fn glyph(&self, character: char) -> Option<&SpriteGlyph> {
        self.glyphs.get(&character)
    }

    /// The number of glyphs available.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// The width in pixels of a single line of `text`.
    ///
    /// Characters without a glyph do not contribute to the width.
    pub fn measure(&self, text: &str) -> f32 {
        text.chars()
            .filter_map(|c| self.glyph(c))
            .map(|glyph| glyph.advance)
            .sum()
    }
}

impl Asset for SpriteFont {
    const TYPE_KEY: AssetTypeKey = AssetTypeKey::new("sprite_font");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::FontMetrics;

    fn font() -> Font {
        Font::new(
            Vec::new(),
            None,
            FontMetrics {
                units_per_em: 1000,
                ascender: 800,
                descender: -200,
                line_gap: 100,
                glyph_count: 2,
            },
        )
    }

    #[test]
    fn test_metrics_scale_with_size() {
        let sprite_font = SpriteFont::new(font(), 20.0);

        assert_eq!(sprite_font.size(), 20.0);
        assert!((sprite_font.ascent() - 16.0).abs() < 1e-4);
        assert!((sprite_font.descent() + 4.0).abs() < 1e-4);
        assert!((sprite_font.line_height() - 22.0).abs() < 1e-4);
    }

    #[test]
    fn test_measure_skips_unknown_characters() {
        let sprite_font = SpriteFont::new(font(), 10.0).with_glyphs([
            SpriteGlyph {
                character: 'a',
                advance: 5.0,
            },
            SpriteGlyph {
                character: 'b',
                advance: 6.0,
            },
        ]);

        assert_eq!(sprite_font.glyph_count(), 2);
        assert_eq!(sprite_font.measure("abz"), 11.0);
    }
}
