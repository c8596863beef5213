use crate::operations::OutputFormat;
use clap::{Parser, ValueEnum};

/// Command-line arguments for faultline
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "faultline")]
#[command(about = "A catalogue of error-handling idioms with a bounded cause-chain walker")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Configuration file path
    #[arg(long, value_name = "PATH", env = "FAULTLINE_CONFIG")]
    pub config: Option<String>,

    /// Demonstration to run (can be specified multiple times; default: all)
    #[arg(long = "demo", value_name = "NAME", value_enum)]
    pub demos: Vec<DemoName>,

    /// Maximum number of errors visited per cause chain
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// User whose configuration file the wrapping demo reads
    #[arg(long, value_name = "ID")]
    pub user_id: Option<u64>,

    /// Email looked up by the sentinel demo
    #[arg(long, value_name = "ADDR")]
    pub email: Option<String>,

    /// Report format
    #[arg(long = "output-format", value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Demonstrations in catalogue order
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DemoName {
    Basic,
    Custom,
    Formatted,
    Wrapping,
    Sentinel,
    Database,
}

impl DemoName {
    /// Every demonstration, in the order they run by default
    pub const ALL: [Self; 6] = [
        Self::Basic,
        Self::Custom,
        Self::Formatted,
        Self::Wrapping,
        Self::Sentinel,
        Self::Database,
    ];

    /// Stable lowercase name, as accepted on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Custom => "custom",
            Self::Formatted => "formatted",
            Self::Wrapping => "wrapping",
            Self::Sentinel => "sentinel",
            Self::Database => "database",
        }
    }
}

impl Args {
    /// Selected demonstrations, or all of them when none were named
    #[must_use]
    pub fn selected_demos(&self) -> Vec<DemoName> {
        if self.demos.is_empty() {
            DemoName::ALL.to_vec()
        } else {
            self.demos.clone()
        }
    }
}
