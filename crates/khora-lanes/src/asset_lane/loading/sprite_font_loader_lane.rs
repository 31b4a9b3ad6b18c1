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

//! Builds sprite fonts on top of the font loader.

use khora_core::asset::{AssetLoader, LoadArgs};
use khora_core::content::{Content, LoadError};
use khora_data::assets::{Font, SpriteFont, SpriteGlyph};
use ttf_parser::Face;

/// The pixel size used when a request carries no size argument.
pub const DEFAULT_SPRITE_FONT_SIZE: f32 = 16.0;

/// A lane turning a [`Font`] into a [`SpriteFont`] at a requested pixel size.
///
/// The font itself is requested through the content manager at the same
/// path, so any loader registered for [`Font`] is honored.
///
/// # Arguments
/// - `0`: the pixel size, as an `Int` or `Float`. When absent, or of another
///   type, the lane's default size is used. A numeric size that is not a
///   positive finite number is rejected with [`LoadError::InvalidArgument`].
///
/// Further arguments are ignored.
#[derive(Debug, Clone)]
pub struct SpriteFontLoaderLane {
    default_size: f32,
    charset: Vec<char>,
}

impl Default for SpriteFontLoaderLane {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SPRITE_FONT_SIZE,
            charset: (' '..='~').collect(),
        }
    }
}

impl SpriteFontLoaderLane {
    /// Creates a lane with the default size and the printable ASCII charset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size used when a request carries no size argument.
    ///
    /// Sizes that are not positive finite numbers are ignored.
    pub fn with_default_size(mut self, size: f32) -> Self {
        if size.is_finite() && size > 0.0 {
            self.default_size = size;
        } else {
            log::warn!(
                "Ignoring invalid default sprite font size {size}, keeping {}",
                self.default_size
            );
        }
        self
    }

    /// Sets the characters glyph metrics are prepared for.
    pub fn with_charset(mut self, charset: impl IntoIterator<Item = char>) -> Self {
        self.charset = charset.into_iter().collect();
        self
    }

    /// The size used when a request carries no size argument.
    pub fn default_size(&self) -> f32 {
        self.default_size
    }

    /// Reads the pixel size from `args`.
    fn size_from(&self, args: &LoadArgs) -> Result<f32, LoadError> {
        if args.len() > 1 {
            log::debug!("Ignoring {} extra sprite font argument(s)", args.len() - 1);
        }

        let Some(arg) = args.get(0) else {
            return Ok(self.default_size);
        };

        let Some(size) = arg.as_number() else {
            log::warn!(
                "Sprite font size argument is a {}, using default size {}",
                arg.type_name(),
                self.default_size
            );
            return Ok(self.default_size);
        };

        let size = size as f32;
        if !size.is_finite() || size <= 0.0 {
            return Err(LoadError::invalid_argument(
                0,
                format!("sprite font size must be a positive number, got {size}"),
            ));
        }

        Ok(size)
    }

    /// Measures the charset in `font` at `size` pixels.
    ///
    /// Characters the font has no glyph for are skipped. Font data that
    /// cannot be parsed is a decode error for `path`.
    fn glyphs(&self, path: &str, font: &Font, size: f32) -> Result<Vec<SpriteGlyph>, LoadError> {
        let face = Face::parse(font.data(), 0).map_err(|e| LoadError::decode(path, e))?;

        let scale = font.scale(size);
        let glyphs = self
            .charset
            .iter()
            .filter_map(|&character| {
                let id = face.glyph_index(character)?;
                let advance = face.glyph_hor_advance(id)?;
                Some(SpriteGlyph {
                    character,
                    advance: f32::from(advance) * scale,
                })
            })
            .collect();

        Ok(glyphs)
    }
}

impl AssetLoader for SpriteFontLoaderLane {
    type Asset = SpriteFont;

    fn load(
        &self,
        content: &dyn Content,
        path: &str,
        args: &LoadArgs,
    ) -> Result<SpriteFont, LoadError> {
        let size = self.size_from(args)?;
        let font = content.load::<Font>(path, &LoadArgs::new())?;
        let glyphs = self.glyphs(path, &font, size)?;

        Ok(SpriteFont::new(font, size).with_glyphs(glyphs))
    }
}
