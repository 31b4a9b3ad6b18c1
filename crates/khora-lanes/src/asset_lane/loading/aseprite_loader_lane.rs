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


//! Decodes Aseprite files into sprite sheets.

use khora_core::asset::{AssetLoader, LoadArgs};
use khora_core::content::{Content, LoadError};
use khora_data::assets::{Image, SpriteFrame, SpriteSheet, SpriteTag};
use std::time::Duration;

/// A lane that flattens every frame of an `.aseprite`/`.ase` file.
///
/// Layers are composited the way the editor shows them. Tags become
/// [`SpriteTag`]s with inclusive frame ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsepriteLoaderLane;

impl AssetLoader for AsepriteLoaderLane {
    type Asset = SpriteSheet;

    fn load(
        &self,
        content: &dyn Content,
        path: &str,
        _args: &LoadArgs,
    ) -> Result<SpriteSheet, LoadError> {
        let file = {
            let stream = content.source().open_read(path)?;
            asefile::AsepriteFile::read(stream)
                .map_err(|e| LoadError::decode(path, format!("{e:?}")))?
        };

        let width = file.width() as u32;
        let height = file.height() as u32;

        let mut frames = Vec::with_capacity(file.num_frames() as usize);
        for index in 0..file.num_frames() {
            let frame = file.frame(index);
            let duration = Duration::from_millis(u64::from(frame.duration()));
            let rgba = frame.image();
            let image = Image::new(rgba.width(), rgba.height(), rgba.into_raw())
                .ok_or_else(|| LoadError::decode(path, format!("frame {index} has no pixels")))?;
            frames.push(SpriteFrame { image, duration });
        }

        let tags = (0..file.num_tags())
            .map(|index| {
                let tag = file.tag(index);
                SpriteTag {
                    name: tag.name().to_owned(),
                    from: tag.from_frame() as usize,
                    to: tag.to_frame() as usize,
                }
            })
            .collect();

        log::trace!("Decoded sprite sheet '{path}' with {} frame(s)", frames.len());

        Ok(SpriteSheet {
            width,
            height,
            frames,
            tags,
        })
    }
}
