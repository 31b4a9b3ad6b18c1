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

//! Loads plain text files.
//!
//! A leading UTF-8 byte order mark is stripped by the content source.

use khora_core::asset::{AssetLoader, LoadArgs};
use khora_core::content::{Content, LoadError};

/// Loads a whole file as UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextLoaderLane;

impl AssetLoader for TextLoaderLane {
    type Asset = String;

    fn load(&self, content: &dyn Content, path: &str, _args: &LoadArgs) -> Result<String, LoadError> {
        content.source().read_all_text(path)
    }
}
