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


//! The default loader set.

use super::{ContentConfig, LoaderRegistry};
use khora_lanes::asset_lane::{
    AsepriteLoaderLane, FontLoaderLane, ImageLoaderLane, SpriteFontLoaderLane, TextLoaderLane,
    TextureLoaderLane,
};

/// Builds a registry holding the default loader for every built-in asset type.
///
/// | Key | Loader |
/// |---|---|
/// | `text` | [`TextLoaderLane`] |
/// | `image` | [`ImageLoaderLane`] |
/// | `texture` | [`TextureLoaderLane`] |
/// | `font` | [`FontLoaderLane`] |
/// | `sprite_font` | [`SpriteFontLoaderLane`] |
/// | `sprite_sheet` | [`AsepriteLoaderLane`] |
///
/// Each call returns a new registry; nothing is shared between them.
pub fn default_loaders() -> LoaderRegistry {
    default_loaders_with(&ContentConfig::default())
}

/// Like [`default_loaders`], with loader defaults taken from `config`.
pub fn default_loaders_with(config: &ContentConfig) -> LoaderRegistry {
    let registry = LoaderRegistry::new();

    registry.register(TextLoaderLane);
    registry.register(ImageLoaderLane);
    registry.register(TextureLoaderLane);
    registry.register(FontLoaderLane);
    registry.register(SpriteFontLoaderLane::new().with_default_size(config.sprite_font_size));
    registry.register(AsepriteLoaderLane);

    registry
}
