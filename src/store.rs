//! Configuration Store
//!
//! Holds the merged tree for one configuration. A store starts uninitialized;
//! `initialize` builds the tree from a loader and may be called again to
//! replace it wholesale. Reads and writes before that fail with
//! `NotInitialized`.
//!
//! The store does no locking. Share it across threads behind a
//! `std::sync::RwLock` (or similar) if writers and readers may overlap.

use crate::error::{ConfigError, Result};
use crate::loader::{Loader, RawConfig, StaticLoader};
use crate::merge::merge;
use crate::resolve::{self, Selection};
use crate::tree::convert::tree_from_json;
use crate::tree::{ConfigNode, ConfigTree, PropertyPath};
use crate::update::{self, Update};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

/// Initialized state: the merged tree plus the sources it was built from.
#[derive(Debug, Clone)]
struct Loaded {
    tree: ConfigTree,
    sources: Vec<String>,
}

/// Holder of the current configuration tree.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    loaded: Option<Loaded>,
}

impl ConfigStore {
    /// Create an uninitialized store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store initialized from `loader`.
    pub fn load(loader: &dyn Loader) -> Result<Self> {
        let mut store = Self::new();
        store.initialize(loader)?;
        Ok(store)
    }

    /// Build the tree from the loader's defaults and locals and make it
    /// current. On failure the previous state is kept.
    pub fn initialize(&mut self, loader: &dyn Loader) -> Result<()> {
        let defaults = loader.load_defaults()?;
        let locals = loader.load_locals()?;
        self.install(defaults, locals)
    }

    /// Initialize from raw in-memory documents.
    pub fn initialize_with(&mut self, defaults: Value, locals: Option<Value>) -> Result<()> {
        let loader = match locals {
            Some(locals) => StaticLoader::new(defaults).with_locals(locals),
            None => StaticLoader::new(defaults),
        };
        self.initialize(&loader)
    }

    fn install(&mut self, defaults: RawConfig, locals: Option<RawConfig>) -> Result<()> {
        let defaults_tree = tree_from_json(&defaults.origin, defaults.data)?;
        let mut sources = vec![defaults.origin];

        let locals_tree = match locals {
            Some(raw) => {
                let tree = tree_from_json(&raw.origin, raw.data)?;
                sources.push(raw.origin);
                Some(tree)
            }
            None => None,
        };

        let tree = merge(&defaults_tree, locals_tree.as_ref());
        info!(sources = ?sources, keys = tree.len(), "Configuration initialized");
        self.loaded = Some(Loaded { tree, sources });
        Ok(())
    }

    /// Drop the current tree and return to the uninitialized state.
    pub fn reset(&mut self) {
        self.loaded = None;
    }

    pub fn is_initialized(&self) -> bool {
        self.loaded.is_some()
    }

    /// Origins of the documents the current tree was built from, defaults first.
    pub fn sources(&self) -> Result<&[String]> {
        Ok(&self.loaded()?.sources)
    }

    fn loaded(&self) -> Result<&Loaded> {
        self.loaded.as_ref().ok_or(ConfigError::NotInitialized)
    }

    /// The whole configuration tree.
    pub fn root(&self) -> Result<&ConfigTree> {
        Ok(&self.loaded()?.tree)
    }

    /// Node at a dotted path.
    pub fn get(&self, path: &str) -> Result<&ConfigNode> {
        resolve::resolve(self.root()?, path)
    }

    /// Node at a dotted path, or `default` when the path does not resolve.
    pub fn get_or<'a>(&'a self, path: &str, default: &'a ConfigNode) -> Result<&'a ConfigNode> {
        Ok(resolve::resolve_or(self.root()?, path, default))
    }

    /// Nodes at several paths, in request order.
    pub fn get_many<S: AsRef<str>>(&self, paths: &[S]) -> Result<Vec<&ConfigNode>> {
        let tree = self.root()?;
        paths.iter().map(|p| resolve::resolve(tree, p.as_ref())).collect()
    }

    /// Nodes at several paths, substituting `default` for any that do not
    /// resolve.
    pub fn get_many_or<'a, S: AsRef<str>>(
        &'a self,
        paths: &[S],
        default: &'a ConfigNode,
    ) -> Result<Vec<&'a ConfigNode>> {
        let tree = self.root()?;
        Ok(paths
            .iter()
            .map(|p| resolve::resolve_or(tree, p.as_ref(), default))
            .collect())
    }

    /// Query shaped by the number of paths: none yields the root, one yields
    /// that node, more yield a list. One argument such as `"name log.level"`
    /// counts as several paths.
    pub fn select<'a, S: AsRef<str>>(
        &'a self,
        paths: &[S],
        default: Option<&'a ConfigNode>,
    ) -> Result<Selection<'a>> {
        resolve::select(self.root()?, paths, default)
    }

    /// Deserialize the node at `path` into `T`.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let node = self.get(path)?;
        serde_json::from_value(Value::from(node)).map_err(|e| ConfigError::Deserialize {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Apply an update. Either every assignment in it takes effect or none
    /// does.
    pub fn put(&mut self, update: impl Into<Update>) -> Result<()> {
        let loaded = self.loaded.as_mut().ok_or(ConfigError::NotInitialized)?;
        let mut working = loaded.tree.clone();
        apply(&mut working, update.into())?;
        loaded.tree = working;
        Ok(())
    }

    /// Apply one expression string (`"a.b=1 c=two"`).
    pub fn put_str(&mut self, exprs: &str) -> Result<()> {
        self.put(Update::expression(exprs))
    }

    /// Apply several `path=value` expressions in order.
    pub fn put_exprs<I, S>(&mut self, exprs: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.put(Update::expressions(exprs))
    }

    /// Store a typed node at a dotted path.
    pub fn put_value(&mut self, path: &str, node: impl Into<ConfigNode>) -> Result<()> {
        self.put(Update::assign(path, node))
    }

    /// Replace root keys with those of `tree`.
    pub fn put_tree(&mut self, tree: ConfigTree) -> Result<()> {
        self.put(Update::Replace(tree))
    }

    /// Assign root-level keys by name.
    pub fn put_named<I, K, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ConfigNode>,
    {
        self.put(Update::named(pairs))
    }
}

fn apply(tree: &mut ConfigTree, update: Update) -> Result<()> {
    match update {
        Update::Expressions(exprs) => {
            let assignments = match exprs.as_slice() {
                [single] => update::parse_batch(single)?,
                many => many
                    .iter()
                    .map(|e| update::parse(e))
                    .collect::<Result<Vec<_>>>()?,
            };
            debug!(count = assignments.len(), "Applying update expressions");
            for (path, value) in assignments {
                resolve::assign(tree, &path, value.into())?;
            }
        }
        Update::Replace(replacement) => {
            debug!(keys = replacement.len(), "Replacing root keys");
            for (key, node) in replacement {
                tree.insert_unchecked(key, node);
            }
        }
        Update::Assign { path, node } => {
            let parsed =
                PropertyPath::parse(&path).map_err(|_| ConfigError::UpdateNotValid(path.clone()))?;
            debug!(path = %parsed, "Assigning value");
            resolve::assign(tree, &parsed, node)?;
        }
        Update::Named(pairs) => {
            for (name, node) in pairs {
                let path = PropertyPath::root_key(&name)
                    .map_err(|_| ConfigError::UpdateNotValid(name.clone()))?;
                resolve::assign(tree, &path, node)?;
            }
        }
    }
    Ok(())
}
