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


use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while reading a [`ContentConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read content configuration '{path}'")]
    Read {
        /// The configuration file.
        path: PathBuf,
        /// The I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file is not valid TOML or has unexpected fields.
    #[error("failed to parse content configuration '{path}'")]
    Parse {
        /// The configuration file.
        path: PathBuf,
        /// The parser failure.
        #[source]
        source: toml::de::Error,
    },
}

/// Represents the structure of a `Content.toml` file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    /// The directory content paths are relative to.
    pub root: PathBuf,
    /// The size sprite fonts are built at when a request does not name one.
    pub sprite_font_size: f32,
}

impl Default for ContentConfig {
    /// Provides a default configuration if `Content.toml` is not found.
    ///
    /// The default root is `resources/assets`, the default sprite font size 16.
    fn default() -> Self {
        Self {
            root: PathBuf::from("resources/assets"),
            sprite_font_size: khora_lanes::asset_lane::DEFAULT_SPRITE_FONT_SIZE,
        }
    }
}

impl ContentConfig {
    /// Parses a configuration from TOML text. Missing fields take their defaults.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Loads the configuration at `path`.
    ///
    /// If the file does not exist, it returns the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "No '{}' found. Using default content configuration.",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        log::info!("Found '{}'. Loading content configuration.", path.display());
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
