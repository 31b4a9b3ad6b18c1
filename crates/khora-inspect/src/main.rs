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


//! Lists and loads content from a content root.
//!
//! Run with: cargo run -p khora-inspect -- <command>

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use khora_agents::asset_agent::{ContentConfig, ContentManager};
use khora_core::asset::LoadArgs;
use khora_data::assets::{Font, Image, SpriteFont, SpriteSheet, Texture};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Configuration file. Defaults apply when it does not exist.
    #[arg(long, default_value = "Content.toml")]
    config: PathBuf,

    /// Content root, overriding the configured one.
    #[arg(long)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lists files below a directory.
    Files {
        /// Directory relative to the root.
        #[arg(default_value = "")]
        dir: String,
        /// Glob applied to file names.
        #[arg(long, short, default_value = "*")]
        pattern: String,
        /// Descend into subdirectories.
        #[arg(long, short)]
        recursive: bool,
    },
    /// Lists directories below a directory.
    Dirs {
        /// Directory relative to the root.
        #[arg(default_value = "")]
        dir: String,
        /// Glob applied to directory names.
        #[arg(long, short, default_value = "*")]
        pattern: String,
        /// Descend into subdirectories.
        #[arg(long, short)]
        recursive: bool,
    },
    /// Loads one asset and prints a summary of it.
    Load {
        /// The asset type to load.
        kind: Kind,
        /// Path relative to the root.
        path: String,
        /// Pixel size, for sprite fonts.
        #[arg(long)]
        size: Option<f64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Text,
    Image,
    Texture,
    Font,
    SpriteFont,
    SpriteSheet,
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = ContentConfig::load(&cli.config)
        .with_context(|| format!("Failed to load '{}'", cli.config.display()))?;
    if let Some(root) = cli.root {
        config.root = root;
    }

    let manager = ContentManager::from_config(&config);

    match cli.command {
        Command::Files {
            dir,
            pattern,
            recursive,
        } => {
            for path in manager
                .enumerate_files(&dir, &pattern, recursive)
                .with_context(|| format!("Failed to list files in '{dir}'"))?
            {
                println!("{path}");
            }
        }
        Command::Dirs {
            dir,
            pattern,
            recursive,
        } => {
            for path in manager
                .enumerate_directories(&dir, &pattern, recursive)
                .with_context(|| format!("Failed to list directories in '{dir}'"))?
            {
                println!("{path}");
            }
        }
        Command::Load { kind, path, size } => {
            let start = Instant::now();
            let summary = load_summary(&manager, kind, &path, size)
                .with_context(|| format!("Failed to load '{path}' as {kind:?}"))?;
            println!("{summary}");
            log::info!("Loaded in {:.2}ms", start.elapsed().as_secs_f64() * 1000.0);
        }
    }

    Ok(())
}

/// Loads `path` as `kind` and describes the result in one line.
fn load_summary(
    manager: &ContentManager,
    kind: Kind,
    path: &str,
    size: Option<f64>,
) -> Result<String> {
    let summary = match kind {
        Kind::Text => {
            let text: String = manager.load_default(path)?;
            format!("text: {} bytes, {} lines", text.len(), text.lines().count())
        }
        Kind::Image => {
            let image: Image = manager.load_default(path)?;
            format!("image: {}x{}", image.width(), image.height())
        }
        Kind::Texture => {
            let texture: Texture = manager.load_default(path)?;
            format!(
                "texture: {}x{} {:?}",
                texture.width, texture.height, texture.format
            )
        }
        Kind::Font => {
            let font: Font = manager.load_default(path)?;
            let metrics = font.metrics();
            format!(
                "font: {} ({} glyphs, {} units/em)",
                font.family().unwrap_or("<unnamed>"),
                metrics.glyph_count,
                metrics.units_per_em
            )
        }
        Kind::SpriteFont => {
            let args = match size {
                Some(size) => LoadArgs::new().with(size),
                None => LoadArgs::new(),
            };
            let font: SpriteFont = manager.load(path, &args)?;
            format!(
                "sprite font: {}px, {} glyphs, line height {:.1}",
                font.size(),
                font.glyph_count(),
                font.line_height()
            )
        }
        Kind::SpriteSheet => {
            let sheet: SpriteSheet = manager.load_default(path)?;
            format!(
                "sprite sheet: {}x{}, {} frames, {} tags, {:?}",
                sheet.width,
                sheet.height,
                sheet.frames.len(),
                sheet.tags.len(),
                sheet.total_duration()
            )
        }
    };

    Ok(summary)
}
