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

//! Foundational contracts of the asset system.
//!
//! An [`Asset`] is any decoded, in-memory value the engine can produce from
//! content. Each asset type names itself with a static [`AssetTypeKey`], which
//! is the key the content manager uses to find the [`AssetLoader`] for it.

mod args;
mod key;
mod loader;

pub use args::*;
pub use key::*;
pub use loader::*;

/// A marker trait for types that can be produced by an [`AssetLoader`].
///
/// Implementors must be thread-safe and own their data, as the result of a load
/// is handed over to the caller and may cross threads.
pub trait Asset: Send + Sync + 'static {
    /// The key this asset type is registered and resolved under.
    ///
    /// Keys must be unique among the asset types used with a given registry.
    const TYPE_KEY: AssetTypeKey;
}

impl Asset for String {
    const TYPE_KEY: AssetTypeKey = AssetTypeKey::new("text");
}
