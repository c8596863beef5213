//! Configuration management module
//!
//! Handles YAML configuration parsing, CLI overrides, and validation

pub mod validation;
pub mod yaml;

use crate::cli::Args;
use crate::system::System;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Inputs for the demonstrations and the chain walker bound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum number of errors visited when walking a cause chain
    pub max_chain_depth: usize,

    /// Directory holding `user_<id>.json` files
    pub config_dir: PathBuf,

    /// User whose configuration file the wrapping demo loads
    pub user_id: u64,

    /// Email looked up by the sentinel demo
    pub email: String,

    /// Row limit of the database demo query
    pub query_limit: u32,

    /// Operands of the basic demo
    pub dividend: f64,
    pub divisor: f64,

    /// Values checked by the custom error demo
    pub values: Vec<i64>,

    /// Ages checked by the formatted error demo
    pub ages: Vec<i64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_chain_depth: crate::chain::DEFAULT_MAX_DEPTH,
            config_dir: PathBuf::from("."),
            user_id: 123,
            email: "test@example.com".to_owned(),
            query_limit: 10,
            dividend: 10.0,
            divisor: 0.0,
            values: vec![-5, 150, 999],
            ages: vec![-10, 25, 150],
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(system: &dyn System, path: &str) -> anyhow::Result<Self> {
        yaml::load_config(system, path)
    }

    /// Build the effective configuration: file (if given), then CLI overrides
    pub fn resolve(system: &dyn System, args: &Args) -> anyhow::Result<Self> {
        let mut config = match args.config.as_deref() {
            Some(path) => Self::load_from_file(system, path)?,
            None => Self::default(),
        };
        config.merge_args(args);
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides
    pub fn merge_args(&mut self, args: &Args) {
        if let Some(depth) = args.max_depth {
            self.max_chain_depth = depth;
        }
        if let Some(user_id) = args.user_id {
            self.user_id = user_id;
        }
        if let Some(email) = args.email.as_ref() {
            self.email.clone_from(email);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> anyhow::Result<()> {
        validation::validate_config(self)
    }
}
