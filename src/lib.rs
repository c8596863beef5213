//! `Faultline` - A catalogue of error-handling idioms
//!
//! This library demonstrates sentinel errors, typed validation errors,
//! formatted errors, multi-level wrapping, and a structured database error
//! with retry classification, together with a bounded walker over
//! `std::error::Error::source` chains.

pub mod chain;
pub mod cli;
pub mod config;
pub mod error;
pub mod faults;
pub mod operations;
pub mod system;
pub mod user;

use anyhow::Result;
use cli::Args;
use config::Config;
use operations::{ChainReport, DemoRunner};
use system::System;
use tracing::debug;

/// Main entry point for the faultline library
///
/// # Errors
///
/// Returns an error if:
/// - The configuration cannot be loaded or is invalid
/// - A failure chain is longer than the configured bound
/// - A report cannot be written
pub fn run(args: &Args, system: &dyn System) -> Result<()> {
    for report in collect_reports(args, system)? {
        report.emit(args.output_format)?;
    }
    Ok(())
}

/// Run the selected demonstrations and return their reports
///
/// # Errors
///
/// Returns an error if:
/// - The configuration cannot be loaded or is invalid
/// - A failure chain is longer than the configured bound
pub fn collect_reports(args: &Args, system: &dyn System) -> Result<Vec<ChainReport>> {
    let config = Config::resolve(system, args)?;
    debug!("Effective configuration: {config:?}");

    let runner = DemoRunner::new(config, system);
    let mut reports = Vec::new();
    for demo in args.selected_demos() {
        reports.extend(runner.run(demo)?);
    }
    Ok(reports)
}
