//! Loading options from text and from disk.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::config::schema::ParseOptions;
use crate::config::validation::ValidationError;

/// Error type for options loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate options from a JSON document.
pub fn from_json_str(content: &str) -> Result<ParseOptions, ConfigError> {
    let value: Value = serde_json::from_str(content)?;
    ParseOptions::from_value(&value)
}

/// Parse and validate options from a TOML document.
pub fn from_toml_str(content: &str) -> Result<ParseOptions, ConfigError> {
    let table: toml::Value = toml::from_str(content)?;
    let value = serde_json::to_value(table)?;
    ParseOptions::from_value(&value)
}

/// Load and validate options from a file. Files ending in `.json` are read
/// as JSON, anything else as TOML.
pub fn load_options(path: &Path) -> Result<ParseOptions, ConfigError> {
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let options = if is_json {
        from_json_str(&content)?
    } else {
        from_toml_str(&content)?
    };

    tracing::debug!(path = ?path, ?options, "Options loaded");
    Ok(options)
}
