//! Crate error type with exit codes

use thiserror::Error;

/// Main error type for faultline operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FaultError {
    /// Configuration Error - missing or invalid configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Chain Integrity Error - a cause chain is longer than the walker allows
    #[error("Chain integrity error: cause chain exceeded {limit} hops (possible cycle)")]
    ChainIntegrity { limit: usize },

    /// Output Error - a report could not be produced
    #[error("Output error: {message}")]
    Output { message: String },
}

impl FaultError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::ChainIntegrity { .. } => 2,
            Self::Output { .. } => 3,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a chain integrity error for a walk bounded at `limit` hops
    #[inline]
    #[must_use]
    pub const fn chain_integrity(limit: usize) -> Self {
        Self::ChainIntegrity { limit }
    }

    /// Create an output error
    #[inline]
    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}
