//! Configuration validation logic

use crate::config::Config;
use crate::error::FaultError;
use anyhow::Result;

/// Largest accepted `max_chain_depth`
pub const MAX_CHAIN_DEPTH_LIMIT: usize = 1024;

/// Validate a complete configuration
///
/// # Errors
///
/// Returns an error if:
/// - `max_chain_depth` is zero or greater than [`MAX_CHAIN_DEPTH_LIMIT`]
/// - `query_limit` is zero
/// - `config_dir` is empty
#[inline]
pub fn validate_config(config: &Config) -> Result<()> {
    validate_chain_depth(config.max_chain_depth)?;

    if config.query_limit == 0 {
        return Err(FaultError::configuration("query_limit must be at least 1").into());
    }

    if config.config_dir.as_os_str().is_empty() {
        return Err(FaultError::configuration("config_dir cannot be empty").into());
    }

    Ok(())
}

/// Validate a chain depth bound
///
/// # Errors
///
/// Returns an error if:
/// - The depth is zero or greater than [`MAX_CHAIN_DEPTH_LIMIT`]
#[inline]
pub fn validate_chain_depth(depth: usize) -> Result<()> {
    if depth == 0 || depth > MAX_CHAIN_DEPTH_LIMIT {
        return Err(FaultError::configuration(format!(
            "max_chain_depth must be between 1 and {MAX_CHAIN_DEPTH_LIMIT}, got {depth}"
        ))
        .into());
    }
    Ok(())
}
