//! Conversion between raw loader data and config trees
//!
//! Loaders hand over `serde_json::Value` documents. Only mappings are accepted
//! at the root; below it, mappings become subtrees and everything else becomes
//! a leaf. Lists may hold leaves or nested lists, never mappings.

use super::{path, ConfigNode, ConfigTree, ConfigValue};
use crate::error::{ConfigError, Result};
use serde_json::{Map, Number, Value};

/// Build a tree from a raw document; `origin` names the source in errors.
pub fn tree_from_json(origin: &str, raw: Value) -> Result<ConfigTree> {
    match raw {
        Value::Object(map) => object_to_tree(origin, "", map),
        other => Err(ConfigError::not_valid(
            origin,
            format!("expected a mapping at the root, found {}", json_kind(&other)),
        )),
    }
}

fn object_to_tree(origin: &str, at: &str, map: Map<String, Value>) -> Result<ConfigTree> {
    let mut tree = ConfigTree::new();
    for (key, value) in map {
        let here = join(at, &key);
        if !path::is_valid_key(&key) {
            return Err(ConfigError::not_valid(
                origin,
                format!("key '{}' is empty or contains '.'", here),
            ));
        }
        let node = match value {
            Value::Object(child) => ConfigNode::Tree(object_to_tree(origin, &here, child)?),
            leaf => ConfigNode::Value(json_to_value(origin, &here, leaf)?),
        };
        tree.insert_unchecked(key, node);
    }
    Ok(tree)
}

fn json_to_value(origin: &str, at: &str, raw: Value) -> Result<ConfigValue> {
    Ok(match raw {
        Value::Null => ConfigValue::None,
        Value::Bool(b) => ConfigValue::Bool(b),
        Value::Number(n) => number_to_value(&n),
        Value::String(s) => ConfigValue::Text(s),
        Value::Array(items) => ConfigValue::List(
            items
                .into_iter()
                .map(|item| json_to_value(origin, at, item))
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Object(_) => {
            return Err(ConfigError::not_valid(
                origin,
                format!("list at '{}' contains a mapping", at),
            ))
        }
    })
}

fn number_to_value(n: &Number) -> ConfigValue {
    match n.as_i64() {
        Some(i) => ConfigValue::Integer(i),
        None => n.as_f64().map(ConfigValue::Float).unwrap_or(ConfigValue::None),
    }
}

fn join(at: &str, key: &str) -> String {
    if at.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", at, key)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

impl From<&ConfigValue> for Value {
    fn from(value: &ConfigValue) -> Self {
        match value {
            ConfigValue::None => Value::Null,
            ConfigValue::Bool(b) => Value::Bool(*b),
            ConfigValue::Integer(i) => Value::Number((*i).into()),
            ConfigValue::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
            ConfigValue::Text(s) => Value::String(s.clone()),
            ConfigValue::List(items) => Value::Array(items.iter().map(Value::from).collect()),
        }
    }
}

impl From<&ConfigTree> for Value {
    fn from(tree: &ConfigTree) -> Self {
        Value::Object(
            tree.iter()
                .map(|(key, node)| (key.clone(), Value::from(node)))
                .collect(),
        )
    }
}

impl From<&ConfigNode> for Value {
    fn from(node: &ConfigNode) -> Self {
        match node {
            ConfigNode::Value(value) => Value::from(value),
            ConfigNode::Tree(tree) => Value::from(tree),
        }
    }
}
