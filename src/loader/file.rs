//! File-backed loader: `defaults` and `locals` files in a config directory
//!
//! Locals precedence (highest first):
//! 1. An explicit path
//! 2. A path named by an environment variable (`DOTCFG_LOCALS` by default)
//! 3. A `locals` file next to the defaults
//!
//! Locals named explicitly (1 and 2) must exist; the sibling file is optional.

use super::format::FileFormat;
use super::{Loader, RawConfig};
use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Base name of the mandatory defaults file.
pub const DEFAULTS_NAME: &str = "defaults";

/// Base name of the optional locals file next to the defaults.
pub const LOCALS_NAME: &str = "locals";

/// Environment variable consulted for a locals path when none is given.
pub const LOCALS_ENV_VAR: &str = "DOTCFG_LOCALS";

/// Where the locals file comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalsSource {
    /// `locals.{toml,json}` in the config directory, if present
    Sibling,
    /// Explicit file path
    Path(PathBuf),
    /// Path read from the locals environment variable; only chosen when the
    /// variable is set and non-empty
    EnvVar(String),
}

/// Loads `defaults.{toml,json}` (and optionally locals) from a directory.
#[derive(Debug, Clone)]
pub struct FileLoader {
    config_dir: PathBuf,
    locals_path: Option<PathBuf>,
    locals_env_var: String,
}

impl FileLoader {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            locals_path: None,
            locals_env_var: LOCALS_ENV_VAR.to_string(),
        }
    }

    /// Use this file as locals, ignoring the environment and the sibling file.
    pub fn with_locals_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.locals_path = Some(path.into());
        self
    }

    /// Read the locals path from `var` instead of `DOTCFG_LOCALS`.
    pub fn with_locals_env_var(mut self, var: impl Into<String>) -> Self {
        self.locals_env_var = var.into();
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// The locals source that applies right now.
    pub fn locals_source(&self) -> LocalsSource {
        if let Some(path) = &self.locals_path {
            return LocalsSource::Path(path.clone());
        }
        match std::env::var(&self.locals_env_var) {
            Ok(value) if !value.is_empty() => LocalsSource::EnvVar(value),
            _ => LocalsSource::Sibling,
        }
    }

    /// First `<name>.<ext>` in the config directory, in format order.
    fn find_in_dir(&self, name: &str) -> Option<PathBuf> {
        FileFormat::ALL
            .iter()
            .map(|format| self.config_dir.join(format!("{}.{}", name, format.extension())))
            .find(|candidate| candidate.is_file())
    }
}

impl Loader for FileLoader {
    fn load_defaults(&self) -> Result<RawConfig> {
        let path = self.find_in_dir(DEFAULTS_NAME).ok_or_else(|| {
            ConfigError::ModuleNotFound(
                self.config_dir
                    .join(format!("{}.{{toml,json}}", DEFAULTS_NAME))
                    .display()
                    .to_string(),
            )
        })?;
        load_file(&path)
    }

    fn load_locals(&self) -> Result<Option<RawConfig>> {
        let path = match self.locals_source() {
            LocalsSource::Path(path) => path,
            LocalsSource::EnvVar(value) => {
                debug!(var = %self.locals_env_var, path = %value, "Locals path from environment");
                PathBuf::from(value)
            }
            LocalsSource::Sibling => match self.find_in_dir(LOCALS_NAME) {
                Some(path) => path,
                None => {
                    debug!(dir = %self.config_dir.display(), "No locals file");
                    return Ok(None);
                }
            },
        };
        if !path.is_file() {
            return Err(ConfigError::ModuleNotFound(path.display().to_string()));
        }
        load_file(&path).map(Some)
    }
}

/// Read and parse one config file.
fn load_file(path: &Path) -> Result<RawConfig> {
    let origin = path.display().to_string();
    let format = FileFormat::from_path(path).ok_or_else(|| {
        ConfigError::not_valid(&origin, "unsupported file extension (expected .toml or .json)")
    })?;
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = format.parse(&origin, &contents)?;
    Ok(RawConfig { origin, data })
}
