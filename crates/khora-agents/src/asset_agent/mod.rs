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


//! Orchestration of asset loading.
//!
//! This module provides the public-facing API for requesting assets: the
//! [`ContentManager`]. It owns a [`LoaderRegistry`] mapping asset types to the
//! lanes that decode them, and delegates the actual work of loading to the
//! `asset_lane` loaders found there.

mod config;
mod defaults;
mod loader;
mod manager;

pub use config::*;
pub use defaults::*;
pub use loader::*;
pub use manager::*;
