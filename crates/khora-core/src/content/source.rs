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

use super::LoadError;
use std::io::Read;
use std::sync::Arc;

/// A lazy sequence of root-relative paths produced by enumeration.
pub type PathIter<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// A readable stream handed out by [`ContentSource::open_read`].
///
/// The underlying handle is released when the stream is dropped.
pub type ContentStream<'a> = Box<dyn Read + Send + 'a>;

/// Abstracts byte-level and path-level access to a content root.
///
/// All paths are relative to the root and use `/` as separator (see
/// [`path`](super::path)). Implementations must support concurrent read-only
/// access and must not cache file contents.
pub trait ContentSource: Send + Sync {
    /// Whether `path` is an existing file.
    fn file_exists(&self, path: &str) -> bool;

    /// Whether `path` is an existing directory.
    fn directory_exists(&self, path: &str) -> bool;

    /// Whether `path` is an existing file or directory.
    fn exists(&self, path: &str) -> bool {
        self.file_exists(path) || self.directory_exists(path)
    }

    /// Enumerates files under the directory `path` whose name matches `pattern`.
    ///
    /// With `recursive == false` only immediate children are yielded. Calling
    /// this again restarts the enumeration.
    ///
    /// # Errors
    /// [`LoadError::NotFound`] if `path` is not a directory,
    /// [`LoadError::InvalidPattern`] if the pattern is malformed.
    fn enumerate_files(
        &self,
        path: &str,
        pattern: &str,
        recursive: bool,
    ) -> Result<PathIter<'_>, LoadError>;

    /// Enumerates directories under `path`, symmetric to [`enumerate_files`](Self::enumerate_files).
    fn enumerate_directories(
        &self,
        path: &str,
        pattern: &str,
        recursive: bool,
    ) -> Result<PathIter<'_>, LoadError>;

    /// Opens the file at `path` for reading.
    ///
    /// # Errors
    /// [`LoadError::NotFound`] if `path` does not resolve to a readable file.
    fn open_read(&self, path: &str) -> Result<ContentStream<'_>, LoadError>;

    /// Reads the whole file at `path`.
    fn read_all_bytes(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let mut stream = self.open_read(path)?;
        let mut bytes = Vec::new();
        stream
            .read_to_end(&mut bytes)
            .map_err(|e| LoadError::io(path, e))?;
        Ok(bytes)
    }

    /// Reads the whole file at `path` as UTF-8 text.
    ///
    /// # Errors
    /// [`LoadError::Decode`] if the file is not valid UTF-8.
    fn read_all_text(&self, path: &str) -> Result<String, LoadError> {
        decode_text(path, self.read_all_bytes(path)?)
    }
}

/// Decodes UTF-8 text, dropping a leading byte-order mark.
pub fn decode_text(path: &str, mut bytes: Vec<u8>) -> Result<String, LoadError> {
    const BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

    if bytes.starts_with(BOM) {
        bytes.drain(..BOM.len());
    }

    String::from_utf8(bytes).map_err(|e| LoadError::decode(path, e))
}

impl<S: ContentSource + ?Sized> ContentSource for Arc<S> {
    fn file_exists(&self, path: &str) -> bool {
        (**self).file_exists(path)
    }

    fn directory_exists(&self, path: &str) -> bool {
        (**self).directory_exists(path)
    }

    fn exists(&self, path: &str) -> bool {
        (**self).exists(path)
    }

    fn enumerate_files(
        &self,
        path: &str,
        pattern: &str,
        recursive: bool,
    ) -> Result<PathIter<'_>, LoadError> {
        (**self).enumerate_files(path, pattern, recursive)
    }

    fn enumerate_directories(
        &self,
        path: &str,
        pattern: &str,
        recursive: bool,
    ) -> Result<PathIter<'_>, LoadError> {
        (**self).enumerate_directories(path, pattern, recursive)
    }

    fn open_read(&self, path: &str) -> Result<ContentStream<'_>, LoadError> {
        (**self).open_read(path)
    }

    fn read_all_bytes(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        (**self).read_all_bytes(path)
    }

    fn read_all_text(&self, path: &str) -> Result<String, LoadError> {
        (**self).read_all_text(path)
    }
}
