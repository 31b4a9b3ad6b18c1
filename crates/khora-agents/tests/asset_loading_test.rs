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


use anyhow::Result;
use image::{ImageFormat, Rgba, RgbaImage};
use khora_agents::asset_agent::{ContentConfig, ContentManager, LoaderRegistry};
use khora_core::asset::{Asset, AssetLoader, AssetTypeKey, LoadArgs};
use khora_core::content::{Content, LoadError, LoadErrorKind};
use khora_core::load_args;
use khora_data::assets::{Font, FontMetrics, Image, SpriteFont, SpriteSheet, Texture};
use khora_io::{FileSystemSource, MemorySource};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use tempfile::tempdir;

// --- Test Setup: fixtures and stub loaders ---

const TEST_FONT: &[u8] = include_bytes!("../../khora-lanes/tests/fixtures/khora-test.ttf");
const WALK_ASEPRITE: &[u8] = include_bytes!("../../khora-lanes/tests/fixtures/walk.aseprite");

fn write_png(path: &Path, width: u32, height: u32) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255])).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// A content root holding `sprite.png` (8x6) and no `missing.png`.
fn sprite_root() -> Result<(tempfile::TempDir, ContentManager)> {
    let dir = tempdir()?;
    write_png(&dir.path().join("sprite.png"), 8, 6)?;
    let manager = ContentManager::new(FileSystemSource::new(dir.path()));
    Ok((dir, manager))
}

#[derive(Debug)]
struct Level(String);

impl Asset for Level {
    const TYPE_KEY: AssetTypeKey = AssetTypeKey::new("level");
}

/// An image loader that counts its calls and returns a 1x1 image.
struct CountingImageLoader(Arc<AtomicUsize>);

impl AssetLoader for CountingImageLoader {
    type Asset = Image;

    fn load(&self, _: &dyn Content, path: &str, _: &LoadArgs) -> Result<Image, LoadError> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Image::new(1, 1, vec![0, 0, 0, 255]).ok_or_else(|| LoadError::decode(path, "empty"))
    }
}

/// Answers every font request with the test font data, under another family name.
struct StubFontLoader;

impl AssetLoader for StubFontLoader {
    type Asset = Font;

    fn load(&self, _: &dyn Content, _: &str, _: &LoadArgs) -> Result<Font, LoadError> {
        Ok(Font::new(
            TEST_FONT,
            Some("Stub".to_string()),
            FontMetrics {
                units_per_em: 1000,
                ascender: 800,
                descender: -200,
                ..Default::default()
            },
        ))
    }
}

/// Answers every font request with data no font parser accepts.
struct GarbageFontLoader;

impl AssetLoader for GarbageFontLoader {
    type Asset = Font;

    fn load(&self, _: &dyn Content, _: &str, _: &LoadArgs) -> Result<Font, LoadError> {
        Ok(Font::new(vec![1u8, 2, 3, 4], None, FontMetrics::default()))
    }
}

/// Builds a level from a text file, to check composition with a custom type.
struct LevelLoader;

impl AssetLoader for LevelLoader {
    type Asset = Level;

    fn load(&self, content: &dyn Content, path: &str, _: &LoadArgs) -> Result<Level, LoadError> {
        let text = content.load::<String>(path, &LoadArgs::new())?;
        Ok(Level(text.trim().to_uppercase()))
    }
}
// ---

#[test]
fn test_load_image_and_texture_from_disk() -> Result<()> {
    let (_dir, manager) = sprite_root()?;

    let image: Image = manager.load_default("sprite.png")?;
    assert_eq!((image.width(), image.height()), (8, 6));
    assert_eq!(image.pixel(7, 5), Some([10, 20, 30, 255]));

    let texture: Texture = manager.load_default("sprite.png")?;
    assert_eq!((texture.width, texture.height), (8, 6));

    let err = manager.load_default::<Image>("missing.png").unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::NotFound);
    Ok(())
}

#[test]
fn test_composed_load_keeps_inner_error() -> Result<()> {
    let (dir, manager) = sprite_root()?;

    let err = manager.load_default::<Texture>("missing.png").unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::NotFound);

    std::fs::write(dir.path().join("broken.png"), b"not a png")?;
    let err = manager.load_default::<Texture>("broken.png").unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Decode);

    // Without an image loader, the texture loader reports the missing image loader.
    manager.registry().unregister_type::<Image>();
    let err = manager.load_default::<Texture>("sprite.png").unwrap_err();
    assert!(matches!(err, LoadError::NoLoaderForType { key } if key == Image::TYPE_KEY));
    Ok(())
}

#[test]
fn test_unregistered_type_fails_before_io() -> Result<()> {
    let (_dir, manager) = sprite_root()?;

    for path in ["sprite.png", "missing.png", ""] {
        let err = manager.load_default::<Level>(path).unwrap_err();
        assert!(matches!(err, LoadError::NoLoaderForType { key } if key == Level::TYPE_KEY));
    }
    Ok(())
}

#[test]
fn test_register_overrides_default_loader() -> Result<()> {
    let (_dir, manager) = sprite_root()?;
    let calls = Arc::new(AtomicUsize::new(0));

    assert!(manager.register_loader(CountingImageLoader(calls.clone())));

    let image: Image = manager.load_default("sprite.png")?;
    assert_eq!((image.width(), image.height()), (1, 1));

    // The texture loader composes through the override too.
    let texture: Texture = manager.load_default("missing.png")?;
    assert_eq!(texture.width, 1);

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[test]
fn test_unregister_only_loader() -> Result<()> {
    let (_dir, manager) = sprite_root()?;
    let loader = CountingImageLoader(Arc::new(AtomicUsize::new(0)));

    assert!(manager.unregister_loader(&loader));
    assert!(!manager.unregister_loader(&loader));

    let err = manager.load_default::<Image>("sprite.png").unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::NoLoaderForType);
    Ok(())
}

#[test]
fn test_sprite_font_size_argument() -> Result<()> {
    let manager = ContentManager::new(MemorySource::new());
    manager.register_loader(StubFontLoader);

    let font: SpriteFont = manager.load("fonts/any.ttf", &load_args![24])?;
    assert_eq!(font.size(), 24.0);
    assert_eq!(font.font().family(), Some("Stub"));

    let font: SpriteFont = manager.load_default("fonts/any.ttf")?;
    assert_eq!(font.size(), 16.0);

    let err = manager
        .load::<SpriteFont>("fonts/any.ttf", &load_args![-4])
        .unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::InvalidArgument);
    Ok(())
}

#[test]
fn test_sprite_font_rejects_unparseable_font() -> Result<()> {
    let manager = ContentManager::new(MemorySource::new());
    manager.register_loader(GarbageFontLoader);

    let err = manager.load_default::<SpriteFont>("fonts/any.ttf").unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Decode);
    Ok(())
}

#[test]
fn test_load_fonts_and_sprite_sheet_from_disk() -> Result<()> {
    let dir = tempdir()?;
    std::fs::create_dir_all(dir.path().join("fonts"))?;
    std::fs::create_dir_all(dir.path().join("sprites"))?;
    std::fs::write(dir.path().join("fonts/test.ttf"), TEST_FONT)?;
    std::fs::write(dir.path().join("sprites/walk.aseprite"), WALK_ASEPRITE)?;
    let manager = ContentManager::new(FileSystemSource::new(dir.path()));

    let font: Font = manager.load_default("fonts/test.ttf")?;
    assert_eq!(font.family(), Some("Khora Test"));
    assert_eq!(font.metrics().units_per_em, 1000);
    assert_eq!(font.metrics().glyph_count, 4);

    let sprite_font: SpriteFont = manager.load("fonts/test.ttf", &load_args![20])?;
    assert!(sprite_font.glyph_count() > 0);
    let advance = sprite_font.glyph('A').map_or(0.0, |glyph| glyph.advance);
    assert!((advance - 12.0).abs() < 1e-4);
    assert!((sprite_font.measure("AA") - 24.0).abs() < 1e-4);

    let sheet: SpriteSheet = manager.load_default("sprites/walk.aseprite")?;
    assert_eq!(sheet.frames.len(), 3);
    assert_eq!(sheet.total_duration().as_millis(), 450);
    assert_eq!(sheet.tag_frames("walk").map(<[_]>::len), Some(2));
    Ok(())
}

#[test]
fn test_paths_above_the_root_are_not_found() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("content");
    std::fs::create_dir_all(&root)?;
    std::fs::write(dir.path().join("secret.txt"), "hidden")?;
    std::fs::write(root.join("greeting.txt"), "hello")?;

    let disk = ContentManager::new(FileSystemSource::new(&root));
    let memory = ContentManager::new(MemorySource::new().with_file("greeting.txt", "hello"));

    for manager in [&disk, &memory] {
        for path in ["../secret.txt", "fonts/../../secret.txt", "fonts/../greeting.txt"] {
            let err = manager.load_default::<String>(path).unwrap_err();
            assert_eq!(err.kind(), LoadErrorKind::NotFound, "{path}");
            assert!(!manager.exists(path));
        }
        assert_eq!(manager.load_default::<String>("greeting.txt")?, "hello");
    }
    Ok(())
}

#[test]
fn test_custom_loader_composes_with_text() -> Result<()> {
    let source = MemorySource::new().with_file("levels/one.txt", "\u{feff}forest\n");
    let manager = ContentManager::with_registry(source, LoaderRegistry::new());

    // Only the custom loader: the nested text request has nothing to resolve.
    manager.register_loader(LevelLoader);
    let err = manager.load_default::<Level>("levels/one.txt").unwrap_err();
    assert!(matches!(err, LoadError::NoLoaderForType { key } if key == String::TYPE_KEY));

    manager.register_loader(khora_lanes::asset_lane::TextLoaderLane);
    let level: Level = manager.load_default("levels/one.txt")?;
    assert_eq!(level.0, "FOREST");
    Ok(())
}

#[test]
fn test_concurrent_loads_while_registering() -> Result<()> {
    let (_dir, manager) = sprite_root()?;
    let manager = Arc::new(manager);

    let loaders: Vec<_> = (0..4)
        .map(|_| {
            let manager = Arc::clone(&manager);
            thread::spawn(move || -> Result<(), LoadError> {
                for _ in 0..25 {
                    let image: Image = manager.load_default("sprite.png")?;
                    assert!(image.width() > 0);
                    let _level = manager.load_default::<Level>("sprite.png");
                }
                Ok(())
            })
        })
        .collect();

    let registrar = {
        let manager = Arc::clone(&manager);
        thread::spawn(move || {
            for _ in 0..50 {
                manager.register_loader(LevelLoader);
                manager.registry().unregister_type::<Level>();
            }
        })
    };

    for handle in loaders {
        handle.join().expect("loader thread panicked")?;
    }
    registrar.join().expect("registrar thread panicked");

    assert!(!manager.registry().contains(Level::TYPE_KEY));
    Ok(())
}

#[test]
fn test_enumeration_through_manager() -> Result<()> {
    let (dir, manager) = sprite_root()?;
    write_png(&dir.path().join("ui/icons/close.png"), 2, 2)?;
    std::fs::write(dir.path().join("ui/readme.txt"), "icons")?;

    let top: Vec<String> = manager.enumerate_files("", "*.png", false)?.collect();
    assert_eq!(top, vec!["sprite.png"]);

    let all: Vec<String> = manager.enumerate_files("", "*.png", true)?.collect();
    assert_eq!(all, vec!["sprite.png", "ui/icons/close.png"]);

    let dirs: Vec<String> = manager.enumerate_directories("ui", "*", true)?.collect();
    assert_eq!(dirs, vec!["ui/icons"]);

    assert!(manager.directory_exists("ui/icons"));
    assert_eq!(manager.read_all_text("ui/readme.txt")?, "icons");

    let err = manager.enumerate_files("nope", "*", false).err().unwrap();
    assert_eq!(err.kind(), LoadErrorKind::NotFound);
    Ok(())
}

#[test]
fn test_manager_from_config_file() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("content");
    std::fs::create_dir_all(&root)?;
    std::fs::write(root.join("greeting.txt"), "hello")?;

    let config_path = dir.path().join("Content.toml");
    std::fs::write(
        &config_path,
        format!(
            "root = {:?}\nsprite_font_size = 20.0\n",
            root.to_string_lossy()
        ),
    )?;

    let config = ContentConfig::load(&config_path)?;
    assert_eq!(config.sprite_font_size, 20.0);

    let manager = ContentManager::from_config(&config);
    assert_eq!(manager.load_default::<String>("greeting.txt")?, "hello");

    manager.register_loader(StubFontLoader);
    let font: SpriteFont = manager.load_default("fonts/any.ttf")?;
    assert_eq!(font.size(), 20.0);

    let defaults = ContentConfig::load(dir.path().join("Absent.toml"))?;
    assert_eq!(defaults, ContentConfig::default());

    std::fs::write(&config_path, "root = [")?;
    assert!(ContentConfig::load(&config_path).is_err());
    Ok(())
}
