//! Demonstration runner
//!
//! Runs each idiom against its configured inputs and turns every result into
//! a [`ChainReport`], branching on sentinel identity and typed extraction the
//! way an application would.

use std::io;

use tracing::{debug, info};

use crate::chain::ChainWalker;
use crate::cli::DemoName;
use crate::config::Config;
use crate::error::FaultError;
use crate::faults::basic::divide;
use crate::faults::formatted::validate_age;
use crate::faults::sentinel::USER_NOT_FOUND;
use crate::faults::validation::ValidationError;
use crate::faults::wrapping::process_user_data;
use crate::operations::report::ChainReport;
use crate::system::System;
use crate::user::{find_user_by_email, query_users};

/// Largest value accepted by [`check_value`]
pub const MAX_VALUE: i64 = 100;

/// Field error codes reported by [`check_value`]
pub mod codes {
    pub const NEGATIVE_VALUE: u32 = 1001;
    pub const VALUE_TOO_HIGH: u32 = 1002;
}

/// Check that `value` lies in `0..=MAX_VALUE`
///
/// # Errors
///
/// Returns an error if:
/// - The value is negative
/// - The value is greater than [`MAX_VALUE`]
#[inline]
pub fn check_value(value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::new(
            "value",
            "Value cannot be negative",
            codes::NEGATIVE_VALUE,
            value,
        ));
    }
    if value > MAX_VALUE {
        return Err(ValidationError::new(
            "value",
            format!("Value cannot be greater than {MAX_VALUE}"),
            codes::VALUE_TOO_HIGH,
            value,
        ));
    }
    Ok(())
}

/// Runs demonstrations against a configuration
#[non_exhaustive]
pub struct DemoRunner<'src> {
    config: Config,
    walker: ChainWalker,
    system: &'src dyn System,
}

impl<'src> DemoRunner<'src> {
    #[must_use]
    #[inline]
    pub fn new(config: Config, system: &'src dyn System) -> Self {
        let walker = ChainWalker::new(config.max_chain_depth);
        Self {
            config,
            walker,
            system,
        }
    }

    /// Run one demonstration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A failure chain is longer than the configured bound
    #[inline]
    pub fn run(&self, demo: DemoName) -> Result<Vec<ChainReport>, FaultError> {
        debug!("Running {} demo", demo.as_str());
        match demo {
            DemoName::Basic => self.basic().map(|report| vec![report]),
            DemoName::Custom => self.custom(),
            DemoName::Formatted => self.formatted(),
            DemoName::Wrapping => self.wrapping().map(|report| vec![report]),
            DemoName::Sentinel => self.sentinel().map(|report| vec![report]),
            DemoName::Database => self.database().map(|report| vec![report]),
        }
    }

    /// Plain error value from a division
    ///
    /// # Errors
    ///
    /// Returns an error if the failure chain exceeds the walker bound
    #[inline]
    pub fn basic(&self) -> Result<ChainReport, FaultError> {
        let (a, b) = (self.config.dividend, self.config.divisor);
        let input = format!("{a} / {b}");
        match divide(a, b) {
            Ok(result) => Ok(ChainReport::success("basic", input, format!("Result: {result:.2}"))),
            Err(err) => ChainReport::failure(&self.walker, "basic", input, &err),
        }
    }

    /// Typed validation errors over the configured values
    ///
    /// # Errors
    ///
    /// Returns an error if a failure chain exceeds the walker bound
    #[inline]
    pub fn custom(&self) -> Result<Vec<ChainReport>, FaultError> {
        self.config
            .values
            .iter()
            .map(|&value| {
                let input = format!("value={value}");
                match check_value(value) {
                    Ok(()) => Ok(ChainReport::success("custom", input, "Valid value")),
                    Err(err) => {
                        let report = ChainReport::failure(&self.walker, "custom", input, &err)?;
                        Ok(report.with_action(format!(
                            "Rejecting field '{}' (code {})",
                            err.field, err.code
                        )))
                    }
                }
            })
            .collect()
    }

    /// Formatted errors over the configured ages
    ///
    /// # Errors
    ///
    /// Returns an error if a failure chain exceeds the walker bound
    #[inline]
    pub fn formatted(&self) -> Result<Vec<ChainReport>, FaultError> {
        self.config
            .ages
            .iter()
            .map(|&age| {
                let input = format!("age={age}");
                match validate_age(age) {
                    Ok(()) => Ok(ChainReport::success("formatted", input, format!("Valid age: {age}"))),
                    Err(err) => ChainReport::failure(&self.walker, "formatted", input, err.as_ref()),
                }
            })
            .collect()
    }

    /// Multi-level wrapping around a file read
    ///
    /// # Errors
    ///
    /// Returns an error if the failure chain exceeds the walker bound
    #[inline]
    pub fn wrapping(&self) -> Result<ChainReport, FaultError> {
        let user_id = self.config.user_id;
        let input = format!("user_id={user_id}");
        match process_user_data(self.system, &self.config.config_dir, user_id) {
            Ok(content) => Ok(ChainReport::success(
                "wrapping",
                input,
                format!("Loaded {} bytes of user config", content.len()),
            )),
            Err(err) => {
                let report = ChainReport::failure(&self.walker, "wrapping", input, err.as_ref())?;
                let missing = self
                    .walker
                    .extract::<io::Error>(err.as_ref())
                    .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound);
                Ok(if missing {
                    report.with_action("File not found - using defaults")
                } else {
                    report
                })
            }
        }
    }

    /// Sentinel lookup failure
    ///
    /// # Errors
    ///
    /// Returns an error if the failure chain exceeds the walker bound
    #[inline]
    pub fn sentinel(&self) -> Result<ChainReport, FaultError> {
        let email = &self.config.email;
        let input = format!("email={email}");
        match find_user_by_email(email) {
            Ok(user) => Ok(ChainReport::success("sentinel", input, format!("Found user {}", user.id))),
            Err(err) => {
                let report = ChainReport::failure(&self.walker, "sentinel", input, err.as_ref())?;
                Ok(if self.walker.matches_sentinel(err.as_ref(), &USER_NOT_FOUND) {
                    report.with_action("User doesn't exist - creating new account")
                } else {
                    report
                })
            }
        }
    }

    /// Structured database error with retry classification
    ///
    /// # Errors
    ///
    /// Returns an error if the failure chain exceeds the walker bound
    #[inline]
    pub fn database(&self) -> Result<ChainReport, FaultError> {
        let limit = self.config.query_limit;
        let input = format!("limit={limit}");
        match query_users(limit) {
            Ok(users) => Ok(ChainReport::success(
                "database",
                input,
                format!("Fetched {} users", users.len()),
            )),
            Err(err) => {
                let report = ChainReport::failure(&self.walker, "database", input, &err)?;
                let Some(db_err) = self.walker.extract_database_error(&err) else {
                    return Ok(report);
                };
                info!(
                    "Database operation: {}, table: {}, retryable: {}",
                    db_err.category(),
                    db_err.resource(),
                    report.retryable
                );
                Ok(if report.retryable {
                    report.with_action("Retrying operation")
                } else {
                    report.with_action("Giving up")
                })
            }
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::faults::validation::FieldValue;

    #[test]
    fn check_value_bounds() {
        for value in [0, 1, 50, 99, 100] {
            assert!(check_value(value).is_ok(), "value {value}");
        }
        for value in [-1, -5, -10, -100] {
            let err = check_value(value).unwrap_err();
            assert_eq!(err.field, "value");
            assert_eq!(err.code, codes::NEGATIVE_VALUE);
            assert_eq!(err.value, FieldValue::Integer(value));
        }
        for value in [101, 150, 200, 1000] {
            let err = check_value(value).unwrap_err();
            assert_eq!(err.code, codes::VALUE_TOO_HIGH);
            assert_eq!(err.value, FieldValue::Integer(value));
        }
    }
}
