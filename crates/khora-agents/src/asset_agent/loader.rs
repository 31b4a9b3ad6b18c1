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


//! A registry for asset loaders, enabling dynamic loading of different asset types by key.

use khora_core::asset::{Asset, AssetLoader, AssetTypeKey, LoadArgs};
use khora_core::content::{Content, LoadError};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Internal trait for loading any asset type.
trait ErasedLoader: Send + Sync {
    fn load_any(
        &self,
        content: &dyn Content,
        path: &str,
        args: &LoadArgs,
    ) -> Result<Box<dyn Any + Send>, LoadError>;

    fn loader_name(&self) -> &'static str;
}

/// A "wrapper" that takes a generic `AssetLoader` and implements `ErasedLoader`.
struct AssetLoaderWrapper<L: AssetLoader>(L);

impl<L: AssetLoader> ErasedLoader for AssetLoaderWrapper<L> {
    fn load_any(
        &self,
        content: &dyn Content,
        path: &str,
        args: &LoadArgs,
    ) -> Result<Box<dyn Any + Send>, LoadError> {
        // Call the GENERIC and TYPE-SAFE load() method...
        let asset: L::Asset = self.0.load(content, path, args)?;

        // ...and return the result in a Box<dyn Any>.
        Ok(Box::new(asset))
    }

    fn loader_name(&self) -> &'static str {
        std::any::type_name::<L>()
    }
}

/// Errors raised by [`LoaderRegistry::try_register`].
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    /// A loader is already registered for the key.
    #[error("a loader is already registered for asset type '{key}' ({existing})")]
    Duplicate {
        /// The contested key.
        key: AssetTypeKey,
        /// Type name of the loader currently registered.
        existing: &'static str,
    },
}

/// A loader resolved from a [`LoaderRegistry`].
///
/// Holding one keeps the loader alive even if it is unregistered meanwhile.
#[derive(Clone)]
pub struct ResolvedLoader {
    key: AssetTypeKey,
    loader: Arc<dyn ErasedLoader>,
}

impl ResolvedLoader {
    /// The key the loader was resolved under.
    pub fn key(&self) -> AssetTypeKey {
        self.key
    }

    /// The type name of the concrete loader.
    pub fn loader_name(&self) -> &'static str {
        self.loader.loader_name()
    }

    /// Runs the loader and downcasts its output to `A`.
    pub fn load<A: Asset>(
        &self,
        content: &dyn Content,
        path: &str,
        args: &LoadArgs,
    ) -> Result<A, LoadError> {
        let asset = self.load_any(content, path, args)?;

        asset
            .downcast::<A>()
            .map(|asset| *asset)
            .map_err(|_| LoadError::TypeMismatch { key: self.key })
    }

    pub(crate) fn load_any(
        &self,
        content: &dyn Content,
        path: &str,
        args: &LoadArgs,
    ) -> Result<Box<dyn Any + Send>, LoadError> {
        self.loader.load_any(content, path, args)
    }
}

impl fmt::Debug for ResolvedLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedLoader")
            .field("key", &self.key)
            .field("loader", &self.loader_name())
            .finish()
    }
}

/// Maps asset type keys to the loader producing that type.
///
/// The map sits behind a read/write lock. Resolution clones the loader out
/// and releases the lock before the loader runs, so a loader may load other
/// types through the same registry and other threads may register or
/// unregister loaders while loads are in flight. Such changes affect the
/// next resolution only.
#[derive(Default)]
pub struct LoaderRegistry {
    loaders: RwLock<HashMap<AssetTypeKey, Arc<dyn ErasedLoader>>>,
}

impl LoaderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // A panic inside a loader never happens while the lock is held, and no
    // write leaves the map half-updated, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<AssetTypeKey, Arc<dyn ErasedLoader>>> {
        self.loaders.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<AssetTypeKey, Arc<dyn ErasedLoader>>> {
        self.loaders.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `loader` for its asset type.
    ///
    /// A loader already registered for the same key is replaced. Returns
    /// `true` when that happened.
    pub fn register<L: AssetLoader>(&self, loader: L) -> bool {
        let key = <L::Asset as Asset>::TYPE_KEY;
        let previous = self
            .write()
            .insert(key, Arc::new(AssetLoaderWrapper(loader)));

        match &previous {
            Some(old) => log::debug!(
                "Replaced loader {} for asset type '{key}' with {}",
                old.loader_name(),
                std::any::type_name::<L>()
            ),
            None => log::trace!(
                "Registered loader {} for asset type '{key}'",
                std::any::type_name::<L>()
            ),
        }

        previous.is_some()
    }

    /// Registers `loader` unless its asset type already has a loader.
    pub fn try_register<L: AssetLoader>(&self, loader: L) -> Result<(), RegistrationError> {
        let key = <L::Asset as Asset>::TYPE_KEY;
        let mut loaders = self.write();

        if let Some(existing) = loaders.get(&key) {
            return Err(RegistrationError::Duplicate {
                key,
                existing: existing.loader_name(),
            });
        }

        loaders.insert(key, Arc::new(AssetLoaderWrapper(loader)));
        Ok(())
    }

    /// Removes the loader registered for `loader`'s asset type.
    ///
    /// Whatever loader currently holds that key is removed, not only one of
    /// type `L`. Returns whether an entry was removed.
    pub fn unregister<L: AssetLoader>(&self, _loader: &L) -> bool {
        self.remove(<L::Asset as Asset>::TYPE_KEY)
    }

    /// Removes the loader registered for asset type `A`.
    pub fn unregister_type<A: Asset>(&self) -> bool {
        self.remove(A::TYPE_KEY)
    }

    fn remove(&self, key: AssetTypeKey) -> bool {
        let removed = self.write().remove(&key).is_some();
        if removed {
            log::trace!("Unregistered loader for asset type '{key}'");
        }
        removed
    }

    /// Whether a loader is registered for `key`.
    pub fn contains(&self, key: AssetTypeKey) -> bool {
        self.read().contains_key(&key)
    }

    /// The registered keys, sorted.
    pub fn keys(&self) -> Vec<AssetTypeKey> {
        let mut keys: Vec<_> = self.read().keys().copied().collect();
        keys.sort();
        keys
    }

    /// The number of registered loaders.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no loader is registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Looks up the loader for `key`.
    ///
    /// # Errors
    /// [`LoadError::NoLoaderForType`] if nothing is registered for `key`.
    pub fn resolve(&self, key: AssetTypeKey) -> Result<ResolvedLoader, LoadError> {
        let loader = self
            .read()
            .get(&key)
            .cloned()
            .ok_or(LoadError::NoLoaderForType { key })?;

        Ok(ResolvedLoader { key, loader })
    }
}

impl fmt::Debug for LoaderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loaders = self.read();
        let mut entries: Vec<_> = loaders
            .iter()
            .map(|(key, loader)| (*key, loader.loader_name()))
            .collect();
        entries.sort();

        f.debug_map().entries(entries).finish()
    }
}
