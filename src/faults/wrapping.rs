//! Multi-level context wrapping
//!
//! Each layer adds its own context and keeps the lower error as its source,
//! so the root `io::Error` stays reachable from the outermost error.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::system::System;

/// Path of the configuration file for `user_id` under `config_dir`
#[must_use]
#[inline]
pub fn user_config_path(config_dir: &Path, user_id: u64) -> PathBuf {
    config_dir.join(format!("user_{user_id}.json"))
}

/// Load and process the stored data of a user
///
/// # Errors
///
/// Returns an error if:
/// - The user's configuration file cannot be read
#[inline]
pub fn process_user_data(system: &dyn System, config_dir: &Path, user_id: u64) -> Result<String> {
    load_user_config(system, config_dir, user_id)
        .with_context(|| format!("failed to process user {user_id}"))
}

/// Load the configuration file of a user
///
/// # Errors
///
/// Returns an error if:
/// - The user's configuration file cannot be read
#[inline]
pub fn load_user_config(system: &dyn System, config_dir: &Path, user_id: u64) -> Result<String> {
    let path = user_config_path(config_dir, user_id);
    read_config_file(system, &path)
        .with_context(|| format!("failed to load config for user {user_id}"))
}

/// Read a configuration file to a string
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
#[inline]
pub fn read_config_file(system: &dyn System, path: &Path) -> Result<String> {
    debug!("Reading config file {}", path.display());
    system
        .read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))
}
