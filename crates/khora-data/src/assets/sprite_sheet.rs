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

//! Defines the sprite sheet asset, decoded from an animated sprite file.

use super::Image;
use khora_core::asset::{Asset, AssetTypeKey};
use std::time::Duration;

/// One animation frame of a [`SpriteSheet`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteFrame {
    /// The flattened frame image.
    pub image: Image,
    /// How long the frame is displayed.
    pub duration: Duration,
}

/// A named, inclusive range of frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteTag {
    /// The tag name, e.g. `"walk"`.
    pub name: String,
    /// Index of the first frame.
    pub from: usize,
    /// Index of the last frame, inclusive.
    pub to: usize,
}

/// An animated sprite: a sequence of equally sized frames plus tags.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// All frames, in playback order.
    pub frames: Vec<SpriteFrame>,
    /// Animation tags.
    pub tags: Vec<SpriteTag>,
}

impl SpriteSheet {
    /// Returns the tag called `name`.
    pub fn tag(&self, name: &str) -> Option<&SpriteTag> {
        self.tags.iter().find(|tag| tag.name == name)
    }

    /// Returns the frames covered by the tag called `name`.
    ///
    /// Out-of-range tags are clamped to the available frames.
    pub fn tag_frames(&self, name: &str) -> Option<&[SpriteFrame]> {
        let tag = self.tag(name)?;
        let end = (tag.to + 1).min(self.frames.len());
        self.frames.get(tag.from.min(end)..end)
    }

    /// The sum of all frame durations.
    pub fn total_duration(&self) -> Duration {
        self.frames.iter().map(|frame| frame.duration).sum()
    }
}

impl Asset for SpriteSheet {
    const TYPE_KEY: AssetTypeKey = AssetTypeKey::new("sprite_sheet");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(ms: u64) -> SpriteFrame {
        SpriteFrame {
            image: Image::new(1, 1, vec![0; 4]).unwrap(),
            duration: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_tag_frames() {
        let sheet = SpriteSheet {
            width: 1,
            height: 1,
            frames: vec![frame(100), frame(100), frame(50)],
            tags: vec![
                SpriteTag {
                    name: "idle".into(),
                    from: 0,
                    to: 0,
                },
                SpriteTag {
                    name: "run".into(),
                    from: 1,
                    to: 5,
                },
            ],
        };

        assert_eq!(sheet.tag_frames("idle").map(<[_]>::len), Some(1));
        assert_eq!(sheet.tag_frames("run").map(<[_]>::len), Some(2));
        assert!(sheet.tag_frames("jump").is_none());
        assert_eq!(sheet.total_duration(), Duration::from_millis(250));
    }
}
