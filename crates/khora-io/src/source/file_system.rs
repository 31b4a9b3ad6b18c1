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

//! A content source backed by a directory on the local filesystem.

use khora_core::content::{
    path, ContentSource, ContentStream, LoadError, NamePattern, PathIter,
};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolves content paths against a root directory.
#[derive(Debug, Clone)]
pub struct FileSystemSource {
    root: PathBuf,
}

impl FileSystemSource {
    /// Creates a source rooted at `root`. The directory does not need to exist yet.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a content path below the root. Paths with `..` segments resolve
    /// to nothing, so they can never reach outside the root.
    fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let relative = path::normalize(relative)?;
        if relative.is_empty() {
            Some(self.root.clone())
        } else {
            Some(self.root.join(relative))
        }
    }

    /// Resolves `relative` to an existing regular file.
    fn resolve_file(&self, relative: &str) -> Result<PathBuf, LoadError> {
        self.resolve(relative)
            .filter(|full| full.is_file())
            .ok_or_else(|| LoadError::not_found(relative))
    }

    /// Walks `relative` and yields the root-relative paths of entries that
    /// match `pattern`. `directories` selects directories instead of files.
    fn walk(
        &self,
        relative: &str,
        pattern: &str,
        recursive: bool,
        directories: bool,
    ) -> Result<PathIter<'_>, LoadError> {
        let start = self
            .resolve(relative)
            .filter(|start| start.is_dir())
            .ok_or_else(|| LoadError::not_found(relative))?;

        let pattern = NamePattern::new(pattern)?;
        let max_depth = if recursive { usize::MAX } else { 1 };
        let root = self.root.clone();

        let entries = WalkDir::new(start)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable content entry: {e}");
                    None
                }
            })
            .filter(move |entry| {
                let file_type = entry.file_type();
                if directories {
                    file_type.is_dir()
                } else {
                    file_type.is_file()
                }
            })
            .filter(move |entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| pattern.matches(name))
            })
            .filter_map(move |entry| to_content_path(&root, entry.path()));

        Ok(Box::new(entries))
    }
}

/// Converts an absolute path below `root` into a `/`-separated content path.
fn to_content_path(root: &Path, full: &Path) -> Option<String> {
    let relative = full.strip_prefix(root).ok()?;
    let segments = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    Some(segments.join("/"))
}

impl ContentSource for FileSystemSource {
    fn file_exists(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|full| full.is_file())
    }

    fn directory_exists(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|full| full.is_dir())
    }

    fn enumerate_files(
        &self,
        path: &str,
        pattern: &str,
        recursive: bool,
    ) -> Result<PathIter<'_>, LoadError> {
        self.walk(path, pattern, recursive, false)
    }

    fn enumerate_directories(
        &self,
        path: &str,
        pattern: &str,
        recursive: bool,
    ) -> Result<PathIter<'_>, LoadError> {
        self.walk(path, pattern, recursive, true)
    }

    fn open_read(&self, path: &str) -> Result<ContentStream<'_>, LoadError> {
        let full = self.resolve_file(path)?;

        log::trace!("Opening '{}'", full.display());
        let file = File::open(&full).map_err(|e| LoadError::io(path, e))?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn read_all_bytes(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        let full = self.resolve_file(path)?;

        fs::read(&full).map_err(|e| LoadError::io(path, e))
    }
}
