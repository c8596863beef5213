//! # `Faultline`
//!
//! `Faultline` runs a catalogue of error-handling idioms and reports each
//! failure as a full cause chain, together with what the caller decided to do
//! about it (retry, fall back to defaults, create an account, ...).
//!
//! ## Usage
//!
//! ```sh
//! faultline                                   # every demo, log output
//! faultline --demo wrapping --user-id 999     # one demo with an override
//! faultline --config faultline.yaml --output-format json
//! ```
//!
//! See `faultline --help` for more options.

use anyhow::Result;
use clap::Parser as _;
use faultline::cli::Args;
use faultline::error::FaultError;
use faultline::operations::OutputFormat;
use faultline::system::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    // JSON output owns stdout, so only errors are logged
    let log_level = if args.output_format == OutputFormat::Json {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    let system = RealSystem::new();
    match faultline::run(&args, &system) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{err:#}");
            std::process::exit(
                err.downcast_ref::<FaultError>()
                    .map_or(1, FaultError::exit_code),
            );
        }
    }
}
