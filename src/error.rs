//! Error types for the dotcfg configuration system.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
///
/// Every failure is reported to the caller as-is; nothing here is retried or
/// recovered internally.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config module not found: {0}")]
    ModuleNotFound(String),

    #[error("Config module not valid: {origin}: {reason}")]
    ModuleNotValid { origin: String, reason: String },

    #[error("Config store not initialized")]
    NotInitialized,

    #[error("Config property not found: {0}")]
    PropertyNotFound(String),

    #[error("Config property not scalar: {0}")]
    PropertyNotScalar(String),

    #[error("Config update not valid: {0}")]
    UpdateNotValid(String),

    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config property {path} has unexpected shape: {message}")]
    Deserialize { path: String, message: String },

    #[error("Logging error: {0}")]
    Logging(String),
}

impl ConfigError {
    pub(crate) fn not_valid(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::ModuleNotValid {
            origin: origin.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
