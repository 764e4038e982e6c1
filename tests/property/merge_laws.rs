//! Property-based tests for merge guarantees

use dotcfg::merge::{merge, merge_layers};
use dotcfg::{ConfigNode, ConfigTree};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn scalar() -> impl Strategy<Value = ConfigNode> {
    prop_oneof![
        any::<bool>().prop_map(ConfigNode::from),
        any::<i64>().prop_map(ConfigNode::from),
        (-1.0e6f64..1.0e6).prop_map(ConfigNode::from),
        "[a-z]{0,6}".prop_map(ConfigNode::from),
    ]
}

fn to_tree(entries: BTreeMap<String, ConfigNode>) -> ConfigTree {
    ConfigTree::try_from(entries).unwrap()
}

fn node() -> impl Strategy<Value = ConfigNode> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map("[a-c]{1,2}", inner, 0..4).prop_map(|m| ConfigNode::Tree(to_tree(m)))
    })
}

fn tree() -> impl Strategy<Value = ConfigTree> {
    prop::collection::btree_map("[a-c]{1,2}", node(), 0..5).prop_map(to_tree)
}

/// Dotted paths of every scalar in `tree`.
fn scalar_leaves(tree: &ConfigTree) -> Vec<(String, ConfigNode)> {
    let mut leaves = Vec::new();
    collect(tree, "", &mut leaves);
    leaves
}

fn collect(tree: &ConfigTree, prefix: &str, out: &mut Vec<(String, ConfigNode)>) {
    for (key, node) in tree {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match node {
            ConfigNode::Tree(child) => collect(child, &path, out),
            leaf => out.push((path, leaf.clone())),
        }
    }
}

#[test]
fn test_merge_identity_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&tree(), |defaults| {
            let empty = ConfigTree::new();
            prop_assert_eq!(&merge(&defaults, None), &defaults);
            prop_assert_eq!(&merge(&defaults, Some(&empty)), &defaults);
            prop_assert_eq!(&merge(&empty, Some(&defaults)), &defaults);
            prop_assert_eq!(&merge(&defaults, Some(&defaults)), &defaults);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_locals_scalars_always_win() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(tree(), tree()), |(defaults, locals)| {
            let merged = merge(&defaults, Some(&locals));

            for (path, leaf) in scalar_leaves(&locals) {
                prop_assert_eq!(merged.lookup(&path), Some(&leaf));
            }

            for key in defaults.keys().chain(locals.keys()) {
                prop_assert!(merged.contains_key(key));
            }
            prop_assert!(merged.len() <= defaults.len() + locals.len());
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_shared_subtrees_merge_recursively() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(tree(), tree()), |(defaults, locals)| {
            let merged = merge(&defaults, Some(&locals));

            for (key, local) in &locals {
                if let (Some(ConfigNode::Tree(d)), ConfigNode::Tree(l)) = (defaults.get(key), local) {
                    let expected = merge(d, Some(l));
                    prop_assert_eq!(merged[key.as_str()].as_tree(), Some(&expected));
                }
            }

            for (key, default) in &defaults {
                if !locals.contains_key(key) {
                    prop_assert_eq!(&merged[key.as_str()], default);
                }
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_merge_leaves_inputs_untouched() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(tree(), tree()), |(defaults, locals)| {
            let defaults_before = defaults.clone();
            let locals_before = locals.clone();

            let _ = merge(&defaults, Some(&locals));

            prop_assert_eq!(defaults, defaults_before);
            prop_assert_eq!(locals, locals_before);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_layered_merge_is_stepwise() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(tree(), tree(), tree()), |(first, second, third)| {
            let stepwise = merge(&merge(&first, Some(&second)), Some(&third));
            let layered = merge_layers([&first, &second, &third]);
            prop_assert_eq!(layered, stepwise);
            Ok(())
        })
        .unwrap();
}
