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

//! Helpers for root-relative content paths.
//!
//! Content paths always use `/` as separator, never start with one, and
//! contain no empty, `.` or `..` segments. The root itself is the empty string.
//! A path with a `..` segment could name something outside the content root,
//! so it is not a content path at all.

/// Normalizes a relative content path.
///
/// Backslashes become `/`, and leading separators, empty segments and `.`
/// segments are dropped. Returns `None` if any segment is `..`.
pub fn normalize(path: &str) -> Option<String> {
    let mut segments = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => return None,
            segment => segments.push(segment),
        }
    }
    Some(segments.join("/"))
}

/// Joins two content paths and normalizes the result.
pub fn join(base: &str, path: &str) -> Option<String> {
    normalize(&format!("{base}/{path}"))
}

/// Returns the last segment of a normalized path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Returns everything before the last segment of a normalized path.
pub fn parent(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(parent, _)| parent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("/sprites//hero.png").as_deref(), Some("sprites/hero.png"));
        assert_eq!(
            normalize("sprites\\ui\\.\\button.png").as_deref(),
            Some("sprites/ui/button.png")
        );
        assert_eq!(normalize("./").as_deref(), Some(""));
        assert_eq!(normalize("").as_deref(), Some(""));
    }

    #[test]
    fn test_parent_segments_are_rejected() {
        assert_eq!(normalize("../secret.txt"), None);
        assert_eq!(normalize("sprites/../../secret.txt"), None);
        assert_eq!(normalize("sprites/../hero.png"), None);
        assert_eq!(normalize("sprites\\..\\hero.png"), None);
        assert_eq!(join("sprites", "../hero.png"), None);
        // Only whole segments count.
        assert_eq!(normalize("..hero.png").as_deref(), Some("..hero.png"));
    }

    #[test]
    fn test_segments() {
        assert_eq!(file_name("sprites/hero.png"), "hero.png");
        assert_eq!(file_name("hero.png"), "hero.png");
        assert_eq!(parent("sprites/ui/button.png"), "sprites/ui");
        assert_eq!(parent("hero.png"), "");
        assert_eq!(join("sprites/", "/hero.png").as_deref(), Some("sprites/hero.png"));
        assert_eq!(join("", "hero.png").as_deref(), Some("hero.png"));
    }
}
