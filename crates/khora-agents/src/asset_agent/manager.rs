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


//! The content manager, the single entry point for loading assets.

use std::any::Any;
use std::time::Instant;

use khora_core::asset::{Asset, AssetLoader, AssetTypeKey, LoadArgs};
use khora_core::content::{Content, ContentSource, ContentStream, LoadError, PathIter};
use khora_io::FileSystemSource;

use super::{default_loaders, default_loaders_with, ContentConfig, LoaderRegistry};

/// Loads typed assets from a content root.
///
/// A load resolves the loader registered for the requested type, then runs it
/// with this manager as its [`Content`], so loaders can build on other asset
/// types. Results and failures are returned unchanged: there is no caching,
/// no retry and no placeholder asset.
///
/// The manager is `Send + Sync` and may be shared through an `Arc`. Loads run
/// on the calling thread.
pub struct ContentManager {
    source: Box<dyn ContentSource>,
    registry: LoaderRegistry,
}

impl ContentManager {
    /// Creates a manager over `source` with the [default loaders](default_loaders).
    pub fn new(source: impl ContentSource + 'static) -> Self {
        Self::with_registry(source, default_loaders())
    }

    /// Creates a manager over `source` using `registry` as is.
    pub fn with_registry(source: impl ContentSource + 'static, registry: LoaderRegistry) -> Self {
        Self {
            source: Box::new(source),
            registry,
        }
    }

    /// Creates a manager over the configured directory root, with the default
    /// loaders set up from `config`.
    pub fn from_config(config: &ContentConfig) -> Self {
        log::info!("Content root: '{}'", config.root.display());
        Self::with_registry(
            FileSystemSource::new(&config.root),
            default_loaders_with(config),
        )
    }

    /// Loads the asset of type `A` at `path`.
    ///
    /// # Errors
    /// - [`LoadError::NoLoaderForType`] when nothing is registered for `A`,
    ///   before the source is touched.
    /// - Otherwise whatever the loader reports, unchanged.
    pub fn load<A: Asset>(&self, path: &str, args: &LoadArgs) -> Result<A, LoadError> {
        self.as_content().load(path, args)
    }

    /// Loads the asset of type `A` at `path` without arguments.
    pub fn load_default<A: Asset>(&self, path: &str) -> Result<A, LoadError> {
        self.load(path, &LoadArgs::new())
    }

    /// Registers `loader` for its asset type, replacing any previous one.
    ///
    /// Returns `true` if a loader was replaced.
    pub fn register_loader<L: AssetLoader>(&self, loader: L) -> bool {
        self.registry.register(loader)
    }

    /// Removes the loader registered for `loader`'s asset type.
    pub fn unregister_loader<L: AssetLoader>(&self, loader: &L) -> bool {
        self.registry.unregister(loader)
    }

    /// The loader registry.
    pub fn registry(&self) -> &LoaderRegistry {
        &self.registry
    }

    /// The source content is read from.
    pub fn source(&self) -> &dyn ContentSource {
        self.source.as_ref()
    }

    fn as_content(&self) -> &dyn Content {
        self
    }

    // Passthroughs to the source.

    /// See [`ContentSource::exists`].
    pub fn exists(&self, path: &str) -> bool {
        self.source.exists(path)
    }

    /// See [`ContentSource::file_exists`].
    pub fn file_exists(&self, path: &str) -> bool {
        self.source.file_exists(path)
    }

    /// See [`ContentSource::directory_exists`].
    pub fn directory_exists(&self, path: &str) -> bool {
        self.source.directory_exists(path)
    }

    /// See [`ContentSource::enumerate_files`].
    pub fn enumerate_files(
        &self,
        path: &str,
        pattern: &str,
        recursive: bool,
    ) -> Result<PathIter<'_>, LoadError> {
        self.source.enumerate_files(path, pattern, recursive)
    }

    /// See [`ContentSource::enumerate_directories`].
    pub fn enumerate_directories(
        &self,
        path: &str,
        pattern: &str,
        recursive: bool,
    ) -> Result<PathIter<'_>, LoadError> {
        self.source.enumerate_directories(path, pattern, recursive)
    }

    /// See [`ContentSource::open_read`].
    pub fn open_read(&self, path: &str) -> Result<ContentStream<'_>, LoadError> {
        self.source.open_read(path)
    }

    /// See [`ContentSource::read_all_bytes`].
    pub fn read_all_bytes(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        self.source.read_all_bytes(path)
    }

    /// See [`ContentSource::read_all_text`].
    pub fn read_all_text(&self, path: &str) -> Result<String, LoadError> {
        self.source.read_all_text(path)
    }
}

impl Content for ContentManager {
    fn source(&self) -> &dyn ContentSource {
        self.source.as_ref()
    }

    fn load_erased(
        &self,
        key: AssetTypeKey,
        path: &str,
        args: &LoadArgs,
    ) -> Result<Box<dyn Any + Send>, LoadError> {
        let loader = match self.registry.resolve(key) {
            Ok(loader) => loader,
            Err(e) => {
                log::debug!("No loader registered for asset type '{key}' (requested '{path}')");
                return Err(e);
            }
        };

        log::trace!(
            "Loading '{path}' as '{key}' with {} ({} argument(s))",
            loader.loader_name(),
            args.len()
        );
        let start = Instant::now();

        let result = loader.load_any(self, path, args);

        match &result {
            Ok(_) => log::debug!("Loaded '{path}' as '{key}' in {:?}", start.elapsed()),
            Err(e) => log::debug!(
                "Failed to load '{path}' as '{key}' after {:?}: {e}",
                start.elapsed()
            ),
        }

        result
    }
}

impl std::fmt::Debug for ContentManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentManager")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
