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

//! Implements an asset loader for TrueType and OpenType fonts.

use super::read_stream;
use khora_core::asset::{AssetLoader, LoadArgs};
use khora_core::content::{Content, LoadError};
use khora_data::assets::{Font, FontMetrics};
use ttf_parser::{name_id, Face};

/// An `AssetLoader` that validates a font file and reads its global metrics.
///
/// Only the first face of a font collection is used.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontLoaderLane;

impl AssetLoader for FontLoaderLane {
    type Asset = Font;

    fn load(&self, content: &dyn Content, path: &str, _args: &LoadArgs) -> Result<Font, LoadError> {
        let data = read_stream(content, path)?;
        parse_font(path, data)
    }
}

/// Parses `data` as a font and keeps it alongside its metrics.
fn parse_font(path: &str, data: Vec<u8>) -> Result<Font, LoadError> {
    let (family, metrics) = {
        let face = Face::parse(&data, 0).map_err(|e| LoadError::decode(path, e))?;

        let family = face
            .names()
            .into_iter()
            .filter(|name| name.name_id == name_id::FAMILY)
            .find_map(|name| name.to_string());

        let metrics = FontMetrics {
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            descender: face.descender(),
            line_gap: face.line_gap(),
            glyph_count: face.number_of_glyphs(),
        };

        (family, metrics)
    };

    log::trace!(
        "Parsed font '{path}' ({} glyphs, family {:?})",
        metrics.glyph_count,
        family
    );

    Ok(Font::new(data, family, metrics))
}
