//! Engine configuration files
//!
//! ```toml
//! sdk_identifier = "Godot.NET.Sdk/4.4.0"
//! default_framework = "net8.0"
//!
//! [[requirements]]
//! platform = "ios"
//! framework = "net8.0"
//! ```
//!
//! Fields left out keep their built-in defaults.

use std::fs;
use std::path::Path;

use projfix_core::errors::ExError;
use projfix_core::EngineConfig;

use crate::errors::{config_error, io_error, serialization_error, Result};

/// Load and validate a configuration file
///
/// # Errors
/// * `ERR_NOT_FOUND` / `ERR_IO` - The file could not be read
/// * `ERR_INVALID_CONFIG` - The TOML is malformed, has unknown keys, or
///   describes an unusable requirement table
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let content = fs::read_to_string(path).map_err(|e| io_error("load_config", path, e))?;
    let config = parse_config_str(&content).map_err(|e| e.with_path(path))?;

    tracing::debug!(
        config_path = %path.display(),
        requirement_count = config.requirements.len(),
        "Loaded engine configuration"
    );
    Ok(config)
}

/// Parse and validate configuration TOML
///
/// # Errors
/// * `ERR_INVALID_CONFIG` - See `load_config`
pub fn parse_config_str(content: &str) -> Result<EngineConfig> {
    let config: EngineConfig =
        toml::from_str(content).map_err(|e| config_error(&format!("TOML parse error: {}", e)))?;
    config
        .validate()
        .map_err(|e| ExError::from(e).with_op("load_config"))?;
    Ok(config)
}

/// Render a configuration as TOML
///
/// # Errors
/// * `ERR_SERIALIZATION` - The configuration could not be encoded
pub fn to_toml_string(config: &EngineConfig) -> Result<String> {
    toml::to_string_pretty(config).map_err(|e| serialization_error("show_config", &e.to_string()))
}
