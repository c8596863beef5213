//! Infrastructure errors with structured metadata
//!
//! [`DatabaseError`] records what failed (`category`), against what
//! (`resource`), why (`cause`), when (`occurred_at`), and whether the
//! operation may be attempted again (`retryable`).

use core::fmt;
use std::error::Error as StdError;

use chrono::{DateTime, SecondsFormat, Utc};

use super::retry::RetryableErrorExt;

/// Owned cause of a [`DatabaseError`]
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// A failed database operation.
///
/// # Example
///
/// ```rust
/// use faultline::faults::DatabaseError;
///
/// let err = DatabaseError::new("SELECT", "users", "connection timeout", true)
///     .with_detail("SELECT * FROM users LIMIT 10");
///
/// assert!(err
///     .to_string()
///     .starts_with("database error [SELECT on users]: connection timeout (retryable: true, timestamp: "));
/// assert_eq!(err.detail(), Some("SELECT * FROM users LIMIT 10"));
/// ```
#[derive(Debug)]
pub struct DatabaseError {
    category: String,
    resource: String,
    detail: Option<String>,
    cause: Option<Cause>,
    occurred_at: DateTime<Utc>,
    retryable: bool,
}

impl DatabaseError {
    /// Create an error caused by `cause`, timestamped now
    #[inline]
    pub fn new(
        category: impl Into<String>,
        resource: impl Into<String>,
        cause: impl Into<Cause>,
        retryable: bool,
    ) -> Self {
        Self::at(Utc::now(), category, resource, Some(cause.into()), retryable)
    }

    /// Create an error that is itself the root cause, timestamped now
    #[inline]
    pub fn leaf(category: impl Into<String>, resource: impl Into<String>, retryable: bool) -> Self {
        Self::at(Utc::now(), category, resource, None, retryable)
    }

    /// Create an error with an explicit timestamp
    #[inline]
    pub fn at(
        occurred_at: DateTime<Utc>,
        category: impl Into<String>,
        resource: impl Into<String>,
        cause: Option<Cause>,
        retryable: bool,
    ) -> Self {
        Self {
            category: category.into(),
            resource: resource.into(),
            detail: None,
            cause,
            occurred_at,
            retryable,
        }
    }

    /// Attach auxiliary text such as the query that failed
    #[must_use]
    #[inline]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    #[inline]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    #[must_use]
    #[inline]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// The immediate cause, not the full chain
    #[must_use]
    #[inline]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    #[must_use]
    #[inline]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// RFC3339 rendering of [`occurred_at`](Self::occurred_at), whole seconds, `Z` suffix
    #[must_use]
    #[inline]
    pub fn timestamp(&self) -> String {
        self.occurred_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl fmt::Display for DatabaseError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "database error [{} on {}]: ", self.category, self.resource)?;
        match self.cause.as_ref() {
            Some(cause) => write!(f, "{cause}")?,
            None => f.write_str("no underlying cause")?,
        }
        write!(
            f,
            " (retryable: {}, timestamp: {})",
            self.retryable,
            self.timestamp()
        )
    }
}

impl StdError for DatabaseError {
    #[inline]
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl RetryableErrorExt for DatabaseError {
    #[inline]
    fn is_retryable(&self) -> bool {
        self.retryable
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 10, 5, 10, 30, 0).unwrap()
    }

    #[test]
    fn renders_all_fields() {
        let err = DatabaseError::at(
            fixed_time(),
            "SELECT",
            "users",
            Some("connection timeout".into()),
            true,
        )
        .with_detail("SELECT * FROM users WHERE id = ?");

        assert_eq!(
            err.to_string(),
            "database error [SELECT on users]: connection timeout (retryable: true, timestamp: 2023-10-05T10:30:00Z)"
        );
    }

    #[test]
    fn retry_flag_appears_in_rendering() {
        for retryable in [true, false] {
            let err = DatabaseError::new("DELETE", "temp", "test", retryable);
            assert!(err.to_string().contains(&format!("retryable: {retryable}")));
            assert_eq!(err.is_retryable(), retryable);
            assert_eq!(err.is_fatal(), !retryable);
        }
    }

    #[test]
    fn cause_is_the_constructed_error() {
        let cause: Cause = "original error".into();
        let cause_addr: *const (dyn StdError + Send + Sync) = &*cause;

        let err = DatabaseError::new("INSERT", "products", cause, false);

        let returned = err.cause().unwrap();
        let returned_addr: *const (dyn StdError + Send + Sync) = returned;
        let source_addr: *const dyn StdError = err.source().unwrap();
        assert!(core::ptr::addr_eq(returned_addr, cause_addr));
        assert!(core::ptr::addr_eq(source_addr, cause_addr));
        assert_eq!(returned.to_string(), "original error");
    }

    #[test]
    fn leaf_has_no_cause() {
        let err = DatabaseError::at(fixed_time(), "UPDATE", "orders", None, false);
        assert!(err.cause().is_none());
        assert!(err.source().is_none());
        assert_eq!(
            err.to_string(),
            "database error [UPDATE on orders]: no underlying cause (retryable: false, timestamp: 2023-10-05T10:30:00Z)"
        );
        assert!(DatabaseError::leaf("UPDATE", "orders", true).cause().is_none());
    }

    #[test]
    fn keeps_fields() {
        let err = DatabaseError::at(fixed_time(), "UPDATE", "orders", None, true)
            .with_detail("UPDATE orders SET status = ?");
        assert_eq!(err.category(), "UPDATE");
        assert_eq!(err.resource(), "orders");
        assert_eq!(err.detail(), Some("UPDATE orders SET status = ?"));
        assert_eq!(err.occurred_at(), fixed_time());
        assert_eq!(err.timestamp(), "2023-10-05T10:30:00Z");
    }

    #[test]
    fn timestamp_is_captured_at_construction() {
        let before = Utc::now();
        let err = DatabaseError::new("SELECT", "users", "x", false);
        let after = Utc::now();
        assert!(err.occurred_at() >= before && err.occurred_at() <= after);
    }

    #[test]
    fn structured_cause_renders_nested() {
        let inner = DatabaseError::at(fixed_time(), "SELECT", "sessions", None, true);
        let outer = DatabaseError::at(fixed_time(), "INSERT", "audit", Some(Box::new(inner) as Cause), false);
        assert!(outer.to_string().starts_with(
            "database error [INSERT on audit]: database error [SELECT on sessions]: no underlying cause"
        ));
    }
}
