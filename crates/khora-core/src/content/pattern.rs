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
use glob::Pattern;

/// A glob-style filter applied to file and directory names during enumeration.
///
/// Supports `*`, `?` and `[...]` classes. An empty pattern matches everything.
#[derive(Debug, Clone)]
pub struct NamePattern(Option<Pattern>);

impl NamePattern {
    /// Compiles `pattern`.
    ///
    /// # Errors
    /// Returns [`LoadError::InvalidPattern`] if the pattern is malformed.
    pub fn new(pattern: &str) -> Result<Self, LoadError> {
        if pattern.is_empty() || pattern == "*" {
            return Ok(Self(None));
        }

        Pattern::new(pattern)
            .map(|p| Self(Some(p)))
            .map_err(|e| LoadError::InvalidPattern {
                pattern: pattern.to_owned(),
                reason: e.to_string(),
            })
    }

    /// Whether `name` (a single path segment) matches the pattern.
    pub fn matches(&self, name: &str) -> bool {
        self.0.as_ref().map_or(true, |p| p.matches(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::LoadErrorKind;

    #[test]
    fn test_wildcards() {
        let png = NamePattern::new("*.png").unwrap();
        assert!(png.matches("hero.png"));
        assert!(!png.matches("hero.ase"));

        let single = NamePattern::new("tile_?.png").unwrap();
        assert!(single.matches("tile_1.png"));
        assert!(!single.matches("tile_10.png"));

        assert!(NamePattern::new("").unwrap().matches("anything"));
    }

    #[test]
    fn test_malformed_pattern_is_rejected() {
        let err = NamePattern::new("[unterminated").unwrap_err();

        assert!(matches!(&err, LoadError::InvalidPattern { pattern, .. } if pattern == "[unterminated"));
        assert_eq!(err.kind(), LoadErrorKind::InvalidArgument);
        assert!(err.to_string().starts_with("invalid name pattern '[unterminated'"));
    }
}
