//! Property path resolution
//!
//! Reads walk a path from the root through subtrees. Writes only replace
//! nodes that already exist; they never create keys.

use crate::error::{ConfigError, Result};
use crate::tree::{ConfigNode, ConfigTree, PropertyPath};

/// Result of a multi-path query.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    /// No paths were requested
    Root(&'a ConfigTree),
    /// Exactly one path was requested
    One(&'a ConfigNode),
    /// Several paths, in request order
    Many(Vec<&'a ConfigNode>),
}

/// Walk `path` from the root. `None` if any segment is missing or passes
/// through a leaf.
pub fn resolve_path<'a>(tree: &'a ConfigTree, path: &PropertyPath) -> Option<&'a ConfigNode> {
    let (leaf, parents) = path.split_last();
    let mut current = tree;
    for segment in parents {
        current = current.get(segment)?.as_tree()?;
    }
    current.get(leaf)
}

/// Resolve a dotted path, failing with `PropertyNotFound`.
///
/// Malformed paths (empty segments) cannot name anything and fail the same way.
pub fn resolve<'a>(tree: &'a ConfigTree, path: &str) -> Result<&'a ConfigNode> {
    PropertyPath::parse(path)
        .ok()
        .and_then(|parsed| resolve_path(tree, &parsed))
        .ok_or_else(|| ConfigError::PropertyNotFound(path.to_string()))
}

/// Resolve a dotted path, returning `default` when it does not resolve.
pub fn resolve_or<'a>(tree: &'a ConfigTree, path: &str, default: &'a ConfigNode) -> &'a ConfigNode {
    resolve(tree, path).unwrap_or(default)
}

/// Resolve any number of paths independently.
///
/// A single argument holding several whitespace-separated paths is treated
/// as that many arguments. The default, when given, applies to every path of
/// this call. Without one, the first missing path fails the whole call.
pub fn select<'a, S: AsRef<str>>(
    tree: &'a ConfigTree,
    paths: &[S],
    default: Option<&'a ConfigNode>,
) -> Result<Selection<'a>> {
    let lookup = |path: &str| -> Result<&'a ConfigNode> {
        match default {
            Some(default) => Ok(resolve_or(tree, path, default)),
            None => resolve(tree, path),
        }
    };

    match paths {
        [] => Ok(Selection::Root(tree)),
        [single] => {
            let names: Vec<&str> = single.as_ref().split_whitespace().collect();
            if names.len() > 1 {
                names
                    .into_iter()
                    .map(lookup)
                    .collect::<Result<Vec<_>>>()
                    .map(Selection::Many)
            } else {
                lookup(single.as_ref()).map(Selection::One)
            }
        }
        several => several
            .iter()
            .map(|path| lookup(path.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(Selection::Many),
    }
}

/// Set the node at `path`.
///
/// Every ancestor must exist as a subtree and the terminal key must exist
/// (`PropertyNotFound` otherwise). A leaf may not be written over an existing
/// subtree (`PropertyNotScalar`); writing a subtree is allowed over anything.
pub fn assign(tree: &mut ConfigTree, path: &PropertyPath, node: ConfigNode) -> Result<()> {
    let (leaf, parents) = path.split_last();

    let mut current = tree;
    for (depth, segment) in parents.iter().enumerate() {
        current = match current.get_mut(segment) {
            Some(ConfigNode::Tree(child)) => child,
            _ => return Err(ConfigError::PropertyNotFound(path.prefix(depth + 1))),
        };
    }

    let slot = current
        .get_mut(leaf)
        .ok_or_else(|| ConfigError::PropertyNotFound(path.to_string()))?;
    if slot.is_tree() && !node.is_tree() {
        return Err(ConfigError::PropertyNotScalar(path.to_string()));
    }
    *slot = node;
    Ok(())
}
