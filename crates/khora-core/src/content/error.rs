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

//! Defines the error type shared by content sources, loaders and the content manager.

use crate::asset::AssetTypeKey;
use std::fmt;
use std::io;
use thiserror::Error;

/// An error raised while resolving or loading content.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The requested path does not exist under the content root.
    #[error("content not found: '{path}'")]
    NotFound {
        /// The relative path that was requested.
        path: String,
    },

    /// No loader is registered for the requested asset type.
    #[error("no loader registered for asset type '{key}'")]
    NoLoaderForType {
        /// The key of the requested asset type.
        key: AssetTypeKey,
    },

    /// The data was read successfully but is malformed or unsupported.
    #[error("failed to decode '{path}': {message}")]
    Decode {
        /// The relative path of the data.
        path: String,
        /// A description of the decoding failure.
        message: String,
    },

    /// A load argument is present but not valid for the loader.
    #[error("invalid load argument at position {index}: {reason}")]
    InvalidArgument {
        /// The position of the offending argument.
        index: usize,
        /// Why the argument was rejected.
        reason: String,
    },

    /// An enumeration name pattern is malformed.
    #[error("invalid name pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// Why the pattern was rejected.
        reason: String,
    },

    /// Reading from the content source failed for a reason other than a missing path.
    #[error("I/O error while reading '{path}'")]
    Io {
        /// The relative path being read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The loader registered under a key produced another type than requested.
    ///
    /// This only happens when two asset types declare the same key.
    #[error("loader for asset type '{key}' produced a different type than requested")]
    TypeMismatch {
        /// The key that was resolved.
        key: AssetTypeKey,
    },
}

/// The category of a [`LoadError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadErrorKind {
    /// See [`LoadError::NotFound`].
    NotFound,
    /// See [`LoadError::NoLoaderForType`].
    NoLoaderForType,
    /// See [`LoadError::Decode`].
    Decode,
    /// See [`LoadError::InvalidArgument`] and [`LoadError::InvalidPattern`].
    InvalidArgument,
    /// See [`LoadError::Io`].
    Io,
    /// See [`LoadError::TypeMismatch`].
    TypeMismatch,
}

impl LoadError {
    /// Creates a [`LoadError::NotFound`] for `path`.
    pub fn not_found(path: impl Into<String>) -> Self {
        LoadError::NotFound { path: path.into() }
    }

    /// Creates a [`LoadError::Decode`] for `path` from any displayable error.
    pub fn decode(path: impl Into<String>, error: impl fmt::Display) -> Self {
        LoadError::Decode {
            path: path.into(),
            message: error.to_string(),
        }
    }

    /// Creates a [`LoadError::InvalidArgument`].
    pub fn invalid_argument(index: usize, reason: impl Into<String>) -> Self {
        LoadError::InvalidArgument {
            index,
            reason: reason.into(),
        }
    }

    /// Maps an I/O error raised while accessing `path`.
    ///
    /// `ErrorKind::NotFound` becomes [`LoadError::NotFound`], everything else
    /// is kept as [`LoadError::Io`].
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            _ => LoadError::Io { path, source },
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::NotFound { .. } => LoadErrorKind::NotFound,
            LoadError::NoLoaderForType { .. } => LoadErrorKind::NoLoaderForType,
            LoadError::Decode { .. } => LoadErrorKind::Decode,
            LoadError::InvalidArgument { .. } | LoadError::InvalidPattern { .. } => {
                LoadErrorKind::InvalidArgument
            }
            LoadError::Io { .. } => LoadErrorKind::Io,
            LoadError::TypeMismatch { .. } => LoadErrorKind::TypeMismatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_not_found_maps_to_not_found() {
        let err = LoadError::io("a.png", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.kind(), LoadErrorKind::NotFound);

        let err = LoadError::io("a.png", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.kind(), LoadErrorKind::Io);
    }

    #[test]
    fn test_messages_name_the_subject() {
        let err = LoadError::NoLoaderForType {
            key: AssetTypeKey::new("mesh"),
        };
        assert_eq!(err.to_string(), "no loader registered for asset type 'mesh'");

        let err = LoadError::decode("fonts/a.ttf", "bad magic");
        assert_eq!(err.to_string(), "failed to decode 'fonts/a.ttf': bad magic");
    }
}
