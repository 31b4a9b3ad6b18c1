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

use std::fmt;

/// A string identifier naming one asset type (e.g. `"texture"`, `"font"`).
///
/// The key is chosen at compile time by the [`Asset`](super::Asset)
/// implementation, so resolving a loader never relies on runtime type
/// introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetTypeKey(&'static str);

impl AssetTypeKey {
    /// Creates a key from a static name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the name of the key.
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for AssetTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
