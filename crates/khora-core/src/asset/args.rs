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

//! Loader-specific arguments passed alongside a load request.

/// A single, loosely-typed load argument.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadArg {
    /// An integer value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean flag.
    Bool(bool),
    /// A string value.
    Str(String),
}

impl LoadArg {
    /// Returns the value as a number if the argument is an `Int` or a `Float`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            LoadArg::Int(i) => Some(*i as f64),
            LoadArg::Float(f) => Some(*f),
            LoadArg::Bool(_) | LoadArg::Str(_) => None,
        }
    }

    /// Returns the value if the argument is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            LoadArg::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value if the argument is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            LoadArg::Str(s) => Some(s),
            _ => None,
        }
    }

    /// A short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            LoadArg::Int(_) => "int",
            LoadArg::Float(_) => "float",
            LoadArg::Bool(_) => "bool",
            LoadArg::Str(_) => "string",
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for LoadArg {
            fn from(value: $ty) -> Self {
                LoadArg::Int(value as i64)
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for LoadArg {
    fn from(value: f32) -> Self {
        LoadArg::Float(value as f64)
    }
}

impl From<f64> for LoadArg {
    fn from(value: f64) -> Self {
        LoadArg::Float(value)
    }
}

impl From<bool> for LoadArg {
    fn from(value: bool) -> Self {
        LoadArg::Bool(value)
    }
}

impl From<&str> for LoadArg {
    fn from(value: &str) -> Self {
        LoadArg::Str(value.to_owned())
    }
}

impl From<String> for LoadArg {
    fn from(value: String) -> Self {
        LoadArg::Str(value)
    }
}

/// An ordered list of [`LoadArg`]s.
///
/// There is no fixed schema: each loader documents the positional contract it
/// reads. Loaders fall back to their configured defaults when an argument is
/// absent and ignore trailing arguments they do not use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadArgs(Vec<LoadArg>);

impl LoadArgs {
    /// Creates an empty argument list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends an argument, builder style.
    pub fn with(mut self, arg: impl Into<LoadArg>) -> Self {
        self.0.push(arg.into());
        self
    }

    /// Appends an argument.
    pub fn push(&mut self, arg: impl Into<LoadArg>) {
        self.0.push(arg.into());
    }

    /// Returns the argument at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&LoadArg> {
        self.0.get(index)
    }

    /// Returns the argument at `index` as a number, if it is present and numeric.
    pub fn number(&self, index: usize) -> Option<f64> {
        self.get(index).and_then(LoadArg::as_number)
    }

    /// The number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the arguments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, LoadArg> {
        self.0.iter()
    }
}

impl From<Vec<LoadArg>> for LoadArgs {
    fn from(args: Vec<LoadArg>) -> Self {
        Self(args)
    }
}

impl FromIterator<LoadArg> for LoadArgs {
    fn from_iter<I: IntoIterator<Item = LoadArg>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LoadArgs {
    type Item = &'a LoadArg;
    type IntoIter = std::slice::Iter<'a, LoadArg>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds a [`LoadArgs`] list from values convertible into [`LoadArg`].
///
/// ```
/// use khora_core::{asset::LoadArg, load_args};
///
/// let args = load_args![24, "bold"];
/// assert_eq!(args.get(0), Some(&LoadArg::Int(24)));
/// ```
#[macro_export]
macro_rules! load_args {
    () => {
        $crate::asset::LoadArgs::new()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::asset::LoadArgs::from(vec![$($crate::asset::LoadArg::from($arg)),+])
    };
}
