//! Configuration merge logic
//!
//! Merge semantics, applied key by key:
//! - Key in one layer only: copied as-is (subtrees deep-copied)
//! - Subtree in both layers: merged recursively
//! - Anything else: the later layer wins outright, no partial merge

use crate::tree::{ConfigNode, ConfigTree};
use tracing::trace;

/// Merge `locals` over `defaults`. Neither input is modified.
///
/// With no locals the result is a deep copy of `defaults`.
pub fn merge(defaults: &ConfigTree, locals: Option<&ConfigTree>) -> ConfigTree {
    merge_layers(std::iter::once(defaults).chain(locals))
}

/// Merge layers in order (first is base, last has highest precedence).
pub fn merge_layers<'a>(layers: impl IntoIterator<Item = &'a ConfigTree>) -> ConfigTree {
    let mut merged = ConfigTree::new();
    for layer in layers {
        overlay(&mut merged, layer);
    }
    merged
}

fn overlay(base: &mut ConfigTree, layer: &ConfigTree) {
    for (key, node) in layer {
        let overrides = match (base.get_mut(key), node) {
            (Some(ConfigNode::Tree(existing)), ConfigNode::Tree(incoming)) => {
                overlay(existing, incoming);
                continue;
            }
            (previous, _) => previous.is_some(),
        };
        if overrides {
            trace!(key = %key, "Layer value overrides base");
        }
        base.insert_unchecked(key.clone(), node.clone());
    }
}
