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

//! Texture loading.

use khora_core::asset::{AssetLoader, LoadArgs};
use khora_core::content::{Content, LoadError};
use khora_data::assets::{Image, Texture};

/// A lane producing CPU-side textures.
///
/// Decoding is delegated to whatever loader is registered for [`Image`]: the
/// lane requests the image at the same path and wraps it. Errors from that
/// inner load are returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextureLoaderLane;

impl AssetLoader for TextureLoaderLane {
    type Asset = Texture;

    fn load(
        &self,
        content: &dyn Content,
        path: &str,
        _args: &LoadArgs,
    ) -> Result<Texture, LoadError> {
        let image = content.load::<Image>(path, &LoadArgs::new())?;
        Ok(Texture::from_image(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset_lane::loading::test_util::{png_bytes, TestContent};
    use khora_core::content::LoadErrorKind;
    use khora_data::assets::TextureFormat;

    #[test]
    fn test_texture_loader_delegates_to_image() {
        let content = TestContent::with_file("sprite.png", png_bytes(5, 3));

        let texture = TextureLoaderLane
            .load(&content, "sprite.png", &LoadArgs::new())
            .unwrap();

        assert_eq!((texture.width, texture.height), (5, 3));
        assert_eq!(texture.format, TextureFormat::Rgba8UnormSrgb);
        assert_eq!(texture.pixels.len(), 5 * 3 * 4);
    }

    #[test]
    fn test_texture_loader_keeps_inner_error() {
        let content = TestContent::with_file("sprite.png", png_bytes(1, 1));

        let err = TextureLoaderLane
            .load(&content, "missing.png", &LoadArgs::new())
            .unwrap_err();

        assert_eq!(err.kind(), LoadErrorKind::NotFound);
    }
}
