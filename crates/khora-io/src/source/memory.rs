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

//! An in-memory content source.
//!
//! Stands in for archive- or network-backed sources: every file is held in
//! memory and directories exist implicitly through the paths of the files
//! below them.

use khora_core::content::{
    path, ContentSource, ContentStream, LoadError, NamePattern, PathIter,
};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Cursor;
use std::sync::Arc;

/// A content source holding all files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<String, Arc<[u8]>>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, builder style.
    pub fn with_file(mut self, path: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(path, bytes);
        self
    }

    /// Adds or replaces the file at `path`.
    ///
    /// Paths with `..` segments are not content paths; such files are skipped
    /// with a warning.
    pub fn insert(&mut self, path: &str, bytes: impl Into<Vec<u8>>) {
        let Some(key) = path::normalize(path) else {
            log::warn!("Skipping in-memory file with a parent segment: '{path}'");
            return;
        };
        let bytes: Vec<u8> = bytes.into();
        self.files.insert(key, Arc::from(bytes));
    }

    /// Removes the file at `path`, returning whether it existed.
    pub fn remove(&mut self, path: &str) -> bool {
        path::normalize(path).is_some_and(|key| self.files.remove(&key).is_some())
    }

    /// The number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the source holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Returns the prefix every path below the directory `dir` starts with.
    fn prefix_of(dir: &str) -> String {
        if dir.is_empty() {
            String::new()
        } else {
            format!("{dir}/")
        }
    }

    /// Iterates over all file paths below `prefix`, in order.
    fn files_under(&self, prefix: String) -> impl Iterator<Item = &String> + '_ {
        self.files
            .range(prefix.clone()..)
            .map(|(key, _)| key)
            .take_while(move |key| key.starts_with(prefix.as_str()))
    }

    fn file(&self, path: &str) -> Result<&Arc<[u8]>, LoadError> {
        path::normalize(path)
            .and_then(|key| self.files.get(&key))
            .ok_or_else(|| LoadError::not_found(path))
    }

    fn open_directory(&self, dir: &str) -> Result<String, LoadError> {
        match path::normalize(dir) {
            Some(normalized) if self.directory_exists(&normalized) => {
                Ok(Self::prefix_of(&normalized))
            }
            _ => Err(LoadError::not_found(dir)),
        }
    }
}

impl ContentSource for MemorySource {
    fn file_exists(&self, path: &str) -> bool {
        path::normalize(path).is_some_and(|key| self.files.contains_key(&key))
    }

    fn directory_exists(&self, path: &str) -> bool {
        let Some(dir) = path::normalize(path) else {
            return false;
        };
        if dir.is_empty() {
            return true;
        }
        self.files_under(Self::prefix_of(&dir)).next().is_some()
    }

    fn enumerate_files(
        &self,
        path: &str,
        pattern: &str,
        recursive: bool,
    ) -> Result<PathIter<'_>, LoadError> {
        let prefix = self.open_directory(path)?;
        let pattern = NamePattern::new(pattern)?;
        let skip = prefix.len();

        let files = self
            .files_under(prefix)
            .filter(move |key| recursive || !key[skip..].contains('/'))
            .filter(move |key| pattern.matches(path::file_name(key)))
            .cloned();

        Ok(Box::new(files))
    }

    fn enumerate_directories(
        &self,
        path: &str,
        pattern: &str,
        recursive: bool,
    ) -> Result<PathIter<'_>, LoadError> {
        let prefix = self.open_directory(path)?;
        let pattern = NamePattern::new(pattern)?;

        // Directories are implied by file paths, so collect the distinct ones first.
        let mut directories = BTreeSet::new();
        for key in self.files_under(prefix.clone()) {
            let segments: Vec<&str> = key[prefix.len()..].split('/').collect();
            let depth = segments.len() - 1;
            let depth = if recursive { depth } else { depth.min(1) };

            for end in 1..=depth {
                directories.insert(format!("{prefix}{}", segments[..end].join("/")));
            }
        }

        let directories = directories
            .into_iter()
            .filter(move |dir| pattern.matches(path::file_name(dir)));

        Ok(Box::new(directories))
    }

    fn open_read(&self, path: &str) -> Result<ContentStream<'_>, LoadError> {
        let bytes = self.file(path)?;
        Ok(Box::new(Cursor::new(Arc::clone(bytes))))
    }

    fn read_all_bytes(&self, path: &str) -> Result<Vec<u8>, LoadError> {
        self.file(path).map(|bytes| bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use khora_core::content::LoadErrorKind;

    fn source() -> MemorySource {
        MemorySource::new()
            .with_file("readme.txt", "hello")
            .with_file("sprites/hero.png", [1u8, 2, 3])
            .with_file("sprites/hero.ase", [4u8])
            .with_file("sprites/ui/button.png", [5u8])
            .with_file("sprites_extra.png", [6u8])
    }

    #[test]
    fn test_directories_are_implied() {
        let source = source();

        assert!(source.directory_exists(""));
        assert!(source.directory_exists("sprites"));
        assert!(source.directory_exists("sprites/ui/"));
        assert!(!source.directory_exists("sprit"));
        assert!(!source.directory_exists("sprites/hero.png"));
        assert!(source.exists("sprites/hero.png"));
    }

    #[test]
    fn test_enumerate_files() {
        let source = source();

        let top: Vec<_> = source.enumerate_files("sprites", "*.png", false).unwrap().collect();
        assert_eq!(top, vec!["sprites/hero.png"]);

        let all: Vec<_> = source.enumerate_files("", "*.png", true).unwrap().collect();
        assert_eq!(
            all,
            vec!["sprites/hero.png", "sprites/ui/button.png", "sprites_extra.png"]
        );

        let root: Vec<_> = source.enumerate_files("", "", false).unwrap().collect();
        assert_eq!(root, vec!["readme.txt", "sprites_extra.png"]);

        let err = source.enumerate_files("sprites", "[png", false).err().unwrap();
        assert!(matches!(err, LoadError::InvalidPattern { ref pattern, .. } if pattern == "[png"));
    }

    #[test]
    fn test_enumerate_directories() {
        let source = source();

        let top: Vec<_> = source.enumerate_directories("", "*", false).unwrap().collect();
        assert_eq!(top, vec!["sprites"]);

        let all: Vec<_> = source.enumerate_directories("", "*", true).unwrap().collect();
        assert_eq!(all, vec!["sprites", "sprites/ui"]);

        let err = source.enumerate_directories("fonts", "*", true).err().unwrap();
        assert_eq!(err.kind(), LoadErrorKind::NotFound);
    }

    #[test]
    fn test_reads() {
        let source = source();

        assert_eq!(source.read_all_text("readme.txt").unwrap(), "hello");

        let mut stream = source.open_read("sprites/hero.png").unwrap();
        let mut bytes = Vec::new();
        std::io::Read::read_to_end(&mut stream, &mut bytes).unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);

        let err = source.read_all_bytes("missing.png").unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::NotFound);
    }

    #[test]
    fn test_parent_segments_are_not_found() {
        let mut source = source();

        for path in ["../readme.txt", "sprites/../readme.txt", "sprites/ui/../../readme.txt"] {
            assert!(!source.exists(path), "{path}");
            assert_eq!(source.read_all_bytes(path).unwrap_err().kind(), LoadErrorKind::NotFound);
            assert_eq!(source.open_read(path).err().unwrap().kind(), LoadErrorKind::NotFound);
        }

        assert!(!source.directory_exists("sprites/.."));
        let err = source.enumerate_files("sprites/..", "*", true).err().unwrap();
        assert_eq!(err.kind(), LoadErrorKind::NotFound);

        // Such paths cannot be stored either.
        source.insert("../escape.txt", "nope");
        assert_eq!(source.len(), 5);
        assert!(!source.remove("sprites/../readme.txt"));
        assert!(source.exists("readme.txt"));
    }
}
