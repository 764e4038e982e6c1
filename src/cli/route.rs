//! CLI route: single route table and run context.

use crate::cast::cast;
use crate::cli::parse::{Commands, SourceArgs};
use crate::loader::FileLoader;
use crate::resolve::Selection;
use crate::store::ConfigStore;
use crate::tree::ConfigNode;
use anyhow::Context;
use serde_json::Value;
use tracing::debug;

/// Runtime context for CLI execution.
#[derive(Debug, Default)]
pub struct RunContext;

impl RunContext {
    pub fn new() -> Self {
        Self
    }

    /// Execute a command and return its printable output.
    pub fn execute(&self, command: &Commands) -> anyhow::Result<String> {
        match command {
            Commands::Show {
                source,
                set,
                default,
                paths,
            } => self.handle_show(source, set, default.as_deref(), paths),
            Commands::Sources { source } => self.handle_sources(source),
        }
    }

    fn open(&self, source: &SourceArgs) -> anyhow::Result<ConfigStore> {
        let mut loader = FileLoader::new(&source.dir);
        if let Some(path) = &source.locals {
            loader = loader.with_locals_path(path);
        }
        if let Some(var) = &source.locals_env {
            loader = loader.with_locals_env_var(var);
        }
        debug!(
            dir = %loader.config_dir().display(),
            locals = ?loader.locals_source(),
            "Loading configuration"
        );
        ConfigStore::load(&loader)
            .with_context(|| format!("Failed to load configuration from {}", source.dir.display()))
    }

    fn handle_show(
        &self,
        source: &SourceArgs,
        set: &[String],
        default: Option<&str>,
        paths: &[String],
    ) -> anyhow::Result<String> {
        let mut store = self.open(source)?;
        if !set.is_empty() {
            store
                .put_exprs(set.iter().cloned())
                .context("Failed to apply --set expressions")?;
        }

        let fallback = default.map(|text| ConfigNode::from(cast(text)));
        let value = match store.select(paths, fallback.as_ref())? {
            Selection::Root(tree) => Value::from(tree),
            Selection::One(node) => Value::from(node),
            Selection::Many(nodes) => Value::Array(nodes.into_iter().map(Value::from).collect()),
        };
        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn handle_sources(&self, source: &SourceArgs) -> anyhow::Result<String> {
        let store = self.open(source)?;
        Ok(store.sources()?.join("\n"))
    }
}
