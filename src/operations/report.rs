//! Diagnostic reports for demonstration outcomes
//!
//! A [`ChainReport`] is what a top-level caller produces from an error: the
//! full rendered chain for diagnostics, plus the control-flow facts derived
//! from identity and type checks (which sentinel matched, whether a retry is
//! allowed). Nothing in it comes from inspecting rendered text.

use std::error::Error as StdError;

use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::chain::ChainWalker;
use crate::error::FaultError;
use crate::faults::sentinel::{self, Sentinel};

/// Output format for reports
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Log lines through the tracing subscriber
    #[default]
    Text,
    /// One JSON object per report on stdout
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Succeeded,
    Failed,
}

/// Outcome of one demonstration input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct ChainReport {
    pub demo: &'static str,
    pub input: String,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Rendered errors, outermost first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chain: Vec<String>,
    /// Name of the well-known sentinel found in the chain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentinel: Option<&'static str>,
    pub retryable: bool,
    /// What the caller decided to do about the failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl ChainReport {
    /// Report a successful input
    #[inline]
    pub fn success(demo: &'static str, input: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            demo,
            input: input.into(),
            outcome: Outcome::Succeeded,
            summary: Some(summary.into()),
            chain: Vec::new(),
            sentinel: None,
            retryable: false,
            action: None,
        }
    }

    /// Report a failed input by walking the chain of `err`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The chain of `err` is longer than the walker's bound
    #[inline]
    pub fn failure(
        walker: &ChainWalker,
        demo: &'static str,
        input: impl Into<String>,
        err: &(dyn StdError + 'static),
    ) -> Result<Self, FaultError> {
        let chain = walker.render(err)?;
        let sentinel = sentinel::known()
            .into_iter()
            .find(|known| walker.matches_sentinel(err, known))
            .map(Sentinel::name);

        Ok(Self {
            demo,
            input: input.into(),
            outcome: Outcome::Failed,
            summary: None,
            chain,
            sentinel,
            retryable: walker.is_retryable(err),
            action: None,
        })
    }

    /// Record the caller's decision
    #[must_use]
    #[inline]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Innermost rendered error
    #[must_use]
    #[inline]
    pub fn root_cause(&self) -> Option<&str> {
        self.chain.last().map(String::as_str)
    }

    /// Serialize as a single-line JSON object
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Serialization fails
    #[inline]
    pub fn to_json(&self) -> Result<String, FaultError> {
        serde_json::to_string(self)
            .map_err(|e| FaultError::output(format!("Failed to serialize report: {e}")))
    }

    /// Emit the report in `format`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - JSON serialization fails
    #[inline]
    pub fn emit(&self, format: OutputFormat) -> Result<(), FaultError> {
        match format {
            OutputFormat::Json => {
                // Reports are data, not logs
                println!("{}", self.to_json()?);
            }
            OutputFormat::Text => self.log(),
        }
        Ok(())
    }

    fn log(&self) {
        match self.outcome {
            Outcome::Succeeded => {
                info!(
                    "[{}] {}: {}",
                    self.demo,
                    self.input,
                    self.summary.as_deref().unwrap_or("ok")
                );
            }
            Outcome::Failed => {
                warn!("[{}] {}: {}", self.demo, self.input, self.chain.join(": "));
                for (depth, link) in self.chain.iter().enumerate() {
                    debug!("[{}]   #{depth} {link}", self.demo);
                }
                if let Some(name) = self.sentinel {
                    info!("[{}] matched sentinel {name}", self.demo);
                }
                if let Some(action) = self.action.as_deref() {
                    info!("[{}] {action}", self.demo);
                }
            }
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::faults::sentinel::{DATABASE_TIMEOUT, USER_NOT_FOUND};
    use anyhow::Context as _;

    #[test]
    fn failure_renders_chain_and_identifies_sentinel() {
        let err = Err::<(), _>(USER_NOT_FOUND.clone())
            .context("lookup failed")
            .unwrap_err();
        let report =
            ChainReport::failure(&ChainWalker::default(), "sentinel", "email=x", err.as_ref())
                .unwrap();

        assert_eq!(report.outcome, Outcome::Failed);
        assert_eq!(report.chain, ["lookup failed", "user not found"]);
        assert_eq!(report.sentinel, Some("UserNotFound"));
        assert_eq!(report.root_cause(), Some("user not found"));
        assert!(!report.retryable);
    }

    #[test]
    fn lookalike_sentinel_is_not_identified() {
        let lookalike = Sentinel::transient("DatabaseTimeout", "database operation timed out");
        let report =
            ChainReport::failure(&ChainWalker::default(), "sentinel", "x", &lookalike).unwrap();
        assert_eq!(report.sentinel, None);
        assert!(report.retryable);

        let report =
            ChainReport::failure(&ChainWalker::default(), "sentinel", "x", &*DATABASE_TIMEOUT)
                .unwrap();
        assert_eq!(report.sentinel, Some("DatabaseTimeout"));
    }

    #[test]
    fn json_omits_empty_fields() {
        let json = ChainReport::success("basic", "10 / 2", "Result: 5.00")
            .to_json()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["demo"], "basic");
        assert_eq!(value["outcome"], "succeeded");
        assert_eq!(value["summary"], "Result: 5.00");
        assert!(value.get("chain").is_none());
        assert!(value.get("sentinel").is_none());
    }
}
