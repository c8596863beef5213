//! Sentinel errors compared by identity
//!
//! A sentinel is a process-wide error value that call sites compare against
//! to branch on an expected failure without parsing text. Identity lives in
//! the shared message allocation: clones of a sentinel are the same sentinel,
//! while a freshly constructed one with identical text is not.
//!
//! # Example
//! ```
//! use faultline::faults::sentinel::{Sentinel, USER_NOT_FOUND};
//!
//! let lookalike = Sentinel::new("UserNotFound", "user not found");
//! assert_eq!(lookalike.to_string(), USER_NOT_FOUND.to_string());
//! assert!(!lookalike.is(&USER_NOT_FOUND));
//! assert!(USER_NOT_FOUND.clone().is(&USER_NOT_FOUND));
//! ```

use core::fmt;
use std::sync::{Arc, LazyLock};

use super::retry::RetryableErrorExt;

/// A named error value with fixed text
#[derive(Debug, Clone)]
pub struct Sentinel {
    name: &'static str,
    message: Arc<str>,
    retryable: bool,
}

impl Sentinel {
    /// Create a new, distinct sentinel
    #[must_use]
    #[inline]
    pub fn new(name: &'static str, message: &str) -> Self {
        Self {
            name,
            message: Arc::from(message),
            retryable: false,
        }
    }

    /// Create a new, distinct sentinel for a transient condition
    #[must_use]
    #[inline]
    pub fn transient(name: &'static str, message: &str) -> Self {
        Self {
            retryable: true,
            ..Self::new(name, message)
        }
    }

    /// Identifier of this sentinel, e.g. `UserNotFound`
    #[must_use]
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Fixed message text
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether `self` and `other` are the same sentinel
    #[must_use]
    #[inline]
    pub fn is(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.message, &other.message)
    }
}

impl fmt::Display for Sentinel {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Sentinel {}

impl RetryableErrorExt for Sentinel {
    #[inline]
    fn is_retryable(&self) -> bool {
        self.retryable
    }
}

pub static USER_NOT_FOUND: LazyLock<Sentinel> =
    LazyLock::new(|| Sentinel::new("UserNotFound", "user not found"));

pub static DUPLICATE_EMAIL: LazyLock<Sentinel> =
    LazyLock::new(|| Sentinel::new("DuplicateEmail", "email already exists"));

pub static INVALID_PASSWORD: LazyLock<Sentinel> =
    LazyLock::new(|| Sentinel::new("InvalidPassword", "invalid password"));

pub static UNAUTHORIZED: LazyLock<Sentinel> =
    LazyLock::new(|| Sentinel::new("Unauthorized", "unauthorized access"));

pub static DATABASE_TIMEOUT: LazyLock<Sentinel> =
    LazyLock::new(|| Sentinel::transient("DatabaseTimeout", "database operation timed out"));

/// All well-known sentinels
#[must_use]
#[inline]
pub fn known() -> [&'static Sentinel; 5] {
    [
        &*USER_NOT_FOUND,
        &*DUPLICATE_EMAIL,
        &*INVALID_PASSWORD,
        &*UNAUTHORIZED,
        &*DATABASE_TIMEOUT,
    ]
}
