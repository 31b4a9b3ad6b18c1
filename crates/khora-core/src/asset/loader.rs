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

use super::{Asset, LoadArgs};
use crate::content::{Content, LoadError};

/// A trait for types that can turn a relative content path into one specific
/// kind of asset.
///
/// Each `AssetLoader` is specialized for a single asset type, declared through
/// [`AssetLoader::Asset`]. The registry key of a loader is
/// `<Self::Asset as Asset>::TYPE_KEY`, so the binding cannot change once the
/// loader has been registered.
///
/// # Composition
/// A loader receives the [`Content`] it was invoked through and may load other
/// asset types from it (a texture loader asking for the image at the same
/// path, for example). Errors from such nested loads should be returned
/// unchanged.
///
/// A loader must never request its own asset type at the same path: the
/// content manager does not detect such cycles and the load would recurse
/// without bound.
pub trait AssetLoader: Send + Sync + 'static {
    /// The asset type this loader produces.
    type Asset: Asset;

    /// Loads one asset from `path`.
    ///
    /// # Parameters
    /// - `content`: The content the request came through. Raw data is read via
    ///   [`Content::source`], dependent assets via `content.load::<U>(..)`.
    /// - `path`: The path, relative to the content root.
    /// - `args`: Loader-specific arguments. Missing arguments fall back to the
    ///   loader's defaults.
    ///
    /// # Errors
    /// Never returns a partially constructed asset: any failure is reported as
    /// a [`LoadError`].
    fn load(
        &self,
        content: &dyn Content,
        path: &str,
        args: &LoadArgs,
    ) -> Result<Self::Asset, LoadError>;
}
