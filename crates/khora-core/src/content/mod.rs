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

//! Content access contracts.
//!
//! A [`ContentSource`] knows where bytes live. A [`Content`] combines a source
//! with a way to dispatch typed load requests, and is what every
//! [`AssetLoader`](crate::asset::AssetLoader) receives so it can read raw data
//! or request other asset types.

mod error;
pub mod path;
mod pattern;
mod source;

pub use error::*;
pub use pattern::NamePattern;
pub use source::*;

use crate::asset::{Asset, AssetTypeKey, LoadArgs};
use std::any::Any;

/// A content root capable of resolving typed load requests.
///
/// This trait is object-safe so loaders can live in crates that know nothing
/// about the concrete manager. The typed entry point is [`load`](Self::load)
/// on `dyn Content`.
pub trait Content: Send + Sync {
    /// The source raw data is read from.
    fn source(&self) -> &dyn ContentSource;

    /// Resolves the loader registered for `key` and runs it.
    ///
    /// The returned box holds the asset produced by that loader.
    fn load_erased(
        &self,
        key: AssetTypeKey,
        path: &str,
        args: &LoadArgs,
    ) -> Result<Box<dyn Any + Send>, LoadError>;
}

impl dyn Content + '_ {
    /// Loads an asset of type `A` from `path`.
    ///
    /// # Errors
    /// Fails with [`LoadError::NoLoaderForType`] before any I/O when nothing is
    /// registered for `A`, and otherwise propagates the loader's error unchanged.
    pub fn load<A: Asset>(&self, path: &str, args: &LoadArgs) -> Result<A, LoadError> {
        let asset = self.load_erased(A::TYPE_KEY, path, args)?;

        asset
            .downcast::<A>()
            .map(|asset| *asset)
            .map_err(|_| LoadError::TypeMismatch { key: A::TYPE_KEY })
    }

    /// Loads an asset of type `A` from `path` without arguments.
    pub fn load_default<A: Asset>(&self, path: &str) -> Result<A, LoadError> {
        self.load(path, &LoadArgs::new())
    }
}
