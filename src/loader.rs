//! Config Loaders
//!
//! A loader supplies the raw defaults document and, optionally, a raw locals
//! document. Discovery and parsing live here so the store never touches the
//! filesystem or the environment itself.

mod file;
mod format;

pub use file::{FileLoader, LocalsSource, DEFAULTS_NAME, LOCALS_ENV_VAR, LOCALS_NAME};
pub use format::FileFormat;

use crate::error::Result;
use serde_json::Value;

/// Raw document produced by a loader, tagged with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RawConfig {
    /// Human-readable source name (a file path or a label)
    pub origin: String,
    pub data: Value,
}

impl RawConfig {
    pub fn new(origin: impl Into<String>, data: Value) -> Self {
        Self {
            origin: origin.into(),
            data,
        }
    }
}

/// Source of defaults and locals data.
///
/// Defaults are mandatory; a loader that cannot find them fails with
/// `ModuleNotFound`. Missing locals are reported as `Ok(None)`.
pub trait Loader {
    fn load_defaults(&self) -> Result<RawConfig>;

    fn load_locals(&self) -> Result<Option<RawConfig>>;
}

/// Loader over documents already in memory.
#[derive(Debug, Clone)]
pub struct StaticLoader {
    defaults: RawConfig,
    locals: Option<RawConfig>,
}

impl StaticLoader {
    pub fn new(defaults: Value) -> Self {
        Self {
            defaults: RawConfig::new("<defaults>", defaults),
            locals: None,
        }
    }

    pub fn with_locals(mut self, locals: Value) -> Self {
        self.locals = Some(RawConfig::new("<locals>", locals));
        self
    }
}

impl Loader for StaticLoader {
    fn load_defaults(&self) -> Result<RawConfig> {
        Ok(self.defaults.clone())
    }

    fn load_locals(&self) -> Result<Option<RawConfig>> {
        Ok(self.locals.clone())
    }
}
