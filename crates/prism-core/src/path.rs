//! Dotted token paths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token's position in the tree as an ordered sequence of group names
/// plus the leaf name, e.g. `color.base.red`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenPath(Vec<String>);

impl TokenPath {
    /// An empty path (the tree root).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from owned segments.
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Parse a dotted path string. Returns `None` when the string is empty
    /// or contains an empty segment (leading/trailing/double dot).
    pub fn parse(path: &str) -> Option<Self> {
        if path.is_empty() {
            return None;
        }
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return None;
        }
        Some(Self(segments))
    }

    /// The path extended by one child segment.
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The leaf segment, if the path is non-empty.
    pub fn leaf(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let path = TokenPath::parse("color.base.red").unwrap();
        assert_eq!(path.segments().len(), 3);
        assert_eq!(path.leaf(), Some("red"));
        assert_eq!(path.to_string(), "color.base.red");
    }

    #[test]
    fn parse_rejects_empty_segments() {
        assert!(TokenPath::parse("").is_none());
        assert!(TokenPath::parse(".color").is_none());
        assert!(TokenPath::parse("color.").is_none());
        assert!(TokenPath::parse("color..red").is_none());
    }

    #[test]
    fn child_extends() {
        let path = TokenPath::parse("color").unwrap();
        let child = path.child("red");
        assert_eq!(child.to_string(), "color.red");
        // parent untouched
        assert_eq!(path.to_string(), "color");
    }
}
