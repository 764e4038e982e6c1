//! Config file formats: TOML and JSON, chosen by extension.

use crate::error::{ConfigError, Result};
use serde_json::Value;
use std::path::Path;

/// Supported config file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    /// Formats in discovery order.
    pub const ALL: [FileFormat; 2] = [FileFormat::Toml, FileFormat::Json];

    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Toml => "toml",
            FileFormat::Json => "json",
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    /// Parse file contents into a raw document.
    pub fn parse(self, origin: &str, contents: &str) -> Result<Value> {
        match self {
            FileFormat::Toml => {
                let table: toml::Table = toml::from_str(contents)
                    .map_err(|e| ConfigError::not_valid(origin, format!("TOML parse error: {}", e)))?;
                Ok(toml_to_json(toml::Value::Table(table)))
            }
            FileFormat::Json => serde_json::from_str(contents)
                .map_err(|e| ConfigError::not_valid(origin, format!("JSON parse error: {}", e))),
        }
    }
}

/// Convert TOML Value to JSON Value
fn toml_to_json(toml: toml::Value) -> Value {
    match toml {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => {
            Value::Object(table.into_iter().map(|(k, v)| (k, toml_to_json(v))).collect())
        }
    }
}
