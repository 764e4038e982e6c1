//! Configuration Tree
//!
//! Hierarchical mapping of string keys to either scalar values or nested
//! trees. Trees own their children outright, so a clone is a deep copy and a
//! write at one path never aliases a read at another.

pub mod convert;
pub mod path;
pub mod value;

pub use path::{InvalidPath, PropertyPath};
pub use value::ConfigValue;

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Index;

static NONE_NODE: ConfigNode = ConfigNode::Value(ConfigValue::None);

/// A value in a config tree: either a leaf or a nested section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigNode {
    Value(ConfigValue),
    Tree(ConfigTree),
}

impl ConfigNode {
    pub fn is_tree(&self) -> bool {
        matches!(self, ConfigNode::Tree(_))
    }

    pub fn as_tree(&self) -> Option<&ConfigTree> {
        match self {
            ConfigNode::Tree(tree) => Some(tree),
            ConfigNode::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&ConfigValue> {
        match self {
            ConfigNode::Value(value) => Some(value),
            ConfigNode::Tree(_) => None,
        }
    }

    /// Child lookup by key; `None` for leaves and missing keys.
    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.as_tree().and_then(|tree| tree.get(key))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ConfigNode::Value(ConfigValue::None))
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_value().and_then(ConfigValue::as_bool)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_value().and_then(ConfigValue::as_i64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_value().and_then(ConfigValue::as_f64)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(ConfigValue::as_str)
    }
}

impl From<ConfigValue> for ConfigNode {
    fn from(value: ConfigValue) -> Self {
        ConfigNode::Value(value)
    }
}

macro_rules! node_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConfigNode {
                fn from(value: $ty) -> Self {
                    ConfigNode::Value(ConfigValue::from(value))
                }
            }
        )*
    };
}

node_from_scalar!(bool, i32, i64, f64, &str, String);

impl From<ConfigTree> for ConfigNode {
    fn from(tree: ConfigTree) -> Self {
        ConfigNode::Tree(tree)
    }
}

/// Indexing a leaf or a missing key yields the absent-marker, mirroring
/// `serde_json::Value` indexing.
impl Index<&str> for ConfigNode {
    type Output = ConfigNode;

    fn index(&self, key: &str) -> &ConfigNode {
        self.get(key).unwrap_or(&NONE_NODE)
    }
}

/// Hierarchical configuration mapping.
///
/// Keys are ordered so that serialization and iteration are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<String, ConfigNode>")]
pub struct ConfigTree {
    entries: BTreeMap<String, ConfigNode>,
}

impl Serialize for ConfigTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl ConfigTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigNode> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ConfigNode> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a child, rejecting keys that are empty or contain `.`.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        node: impl Into<ConfigNode>,
    ) -> Result<Option<ConfigNode>> {
        let key = key.into();
        if !path::is_valid_key(&key) {
            return Err(ConfigError::UpdateNotValid(format!("invalid key '{}'", key)));
        }
        Ok(self.entries.insert(key, node.into()))
    }

    /// Insert with a key already known to be valid.
    pub(crate) fn insert_unchecked(&mut self, key: String, node: ConfigNode) {
        self.entries.insert(key, node);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ConfigNode> {
        self.entries.iter()
    }

    /// Dotted lookup without error reporting; see [`crate::resolve`] for the
    /// failing variant.
    pub fn lookup(&self, path: &str) -> Option<&ConfigNode> {
        let path = PropertyPath::parse(path).ok()?;
        crate::resolve::resolve_path(self, &path)
    }
}

impl TryFrom<BTreeMap<String, ConfigNode>> for ConfigTree {
    type Error = InvalidPath;

    fn try_from(entries: BTreeMap<String, ConfigNode>) -> std::result::Result<Self, Self::Error> {
        if let Some(key) = entries.keys().find(|k| !path::is_valid_key(k)) {
            return Err(InvalidPath(key.clone()));
        }
        Ok(Self { entries })
    }
}

impl Index<&str> for ConfigTree {
    type Output = ConfigNode;

    fn index(&self, key: &str) -> &ConfigNode {
        self.get(key).unwrap_or(&NONE_NODE)
    }
}

impl IntoIterator for ConfigTree {
    type Item = (String, ConfigNode);
    type IntoIter = btree_map::IntoIter<String, ConfigNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigTree {
    type Item = (&'a String, &'a ConfigNode);
    type IntoIter = btree_map::Iter<'a, String, ConfigNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
