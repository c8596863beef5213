//! YAML configuration loading and parsing

use crate::config::Config;
use crate::error::FaultError;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::Path;

/// Load and parse YAML configuration from file
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or is not a regular file
/// - The file cannot be read
/// - The YAML is malformed or contains unknown keys
pub fn load_config(system: &dyn System, path: &str) -> Result<Config> {
    let path_obj = Path::new(path);

    if !system.exists(path_obj) {
        return Err(FaultError::configuration(format!(
            "Configuration file not found: {path}"
        ))
        .into());
    }
    if !system.is_file(path_obj) {
        return Err(FaultError::configuration(format!(
            "Configuration path is not a file: {path}"
        ))
        .into());
    }

    let content = system
        .read_to_string(path_obj)
        .map_err(|e| FaultError::configuration(format!("Failed to read {path}: {e}")))?;

    let config: Config = serde_yaml::from_str(&content)
        .map_err(|e| FaultError::configuration(format!("Failed to parse YAML in {path}: {e}")))
        .with_context(|| format!("Invalid configuration file: {path}"))?;

    Ok(config)
}
