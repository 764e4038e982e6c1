//! Dot-separated property paths

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Path separator; never allowed inside a key.
pub const SEPARATOR: char = '.';

/// Syntactically invalid property path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid property path '{0}'")]
pub struct InvalidPath(pub String);

/// Ordered, non-empty sequence of keys addressing a node in a config tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    parents: Vec<String>,
    leaf: String,
}

impl PropertyPath {
    /// Split `path` on `.`; every segment must be non-empty.
    pub fn parse(path: &str) -> Result<Self, InvalidPath> {
        let (head, leaf) = match path.rsplit_once(SEPARATOR) {
            Some((head, leaf)) => (Some(head), leaf),
            None => (None, path),
        };
        let parents: Vec<String> = head
            .map(|head| head.split(SEPARATOR).map(str::to_string).collect())
            .unwrap_or_default();
        if !is_valid_key(leaf) || parents.iter().any(|s| !is_valid_key(s)) {
            return Err(InvalidPath(path.to_string()));
        }
        Ok(Self {
            parents,
            leaf: leaf.to_string(),
        })
    }

    /// Single root-level key.
    pub fn root_key(key: &str) -> Result<Self, InvalidPath> {
        if !is_valid_key(key) {
            return Err(InvalidPath(key.to_string()));
        }
        Ok(Self {
            parents: Vec::new(),
            leaf: key.to_string(),
        })
    }

    /// Keys from the root down to the leaf.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.parents
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.leaf.as_str()))
    }

    /// Number of keys, at least one.
    pub fn depth(&self) -> usize {
        self.parents.len() + 1
    }

    /// Terminal key and the ancestor keys leading to it.
    pub fn split_last(&self) -> (&str, &[String]) {
        (&self.leaf, &self.parents)
    }

    /// Dot-joined form of the first `depth` segments.
    pub fn prefix(&self, depth: usize) -> String {
        self.segments().take(depth).collect::<Vec<_>>().join(".")
    }
}

/// Keys are non-empty and never contain the separator.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(SEPARATOR)
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix(self.depth()))
    }
}

impl FromStr for PropertyPath {
    type Err = InvalidPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
