//! User domain: validation, lookup, and queries
//!
//! Each operation fails with a different kind of error: validation returns a
//! typed [`ValidationError`], lookup returns the [`USER_NOT_FOUND`] sentinel
//! (sometimes wrapped), and queries return a [`DatabaseError`].

use anyhow::Result;
use tracing::debug;

use crate::faults::database::DatabaseError;
use crate::faults::formatted::MAX_AGE;
use crate::faults::sentinel::USER_NOT_FOUND;
use crate::faults::validation::ValidationError;

/// Field error codes reported by [`validate_user`]
pub mod codes {
    pub const NEGATIVE_AGE: u32 = 2001;
    pub const AGE_TOO_HIGH: u32 = 2002;
    pub const EMPTY_EMAIL: u32 = 2003;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub age: i64,
}

/// Check a user's fields against domain constraints
///
/// # Errors
///
/// Returns an error if:
/// - The age is negative or greater than [`MAX_AGE`]
/// - The email is empty
#[inline]
pub fn validate_user(user: &User) -> Result<(), ValidationError> {
    if user.age < 0 {
        return Err(ValidationError::new(
            "Age",
            "Age cannot be negative",
            codes::NEGATIVE_AGE,
            user.age,
        ));
    }
    if user.age > MAX_AGE {
        return Err(ValidationError::new(
            "Age",
            format!("Age cannot be greater than {MAX_AGE}"),
            codes::AGE_TOO_HIGH,
            user.age,
        ));
    }
    if user.email.is_empty() {
        return Err(ValidationError::new(
            "Email",
            "Email cannot be empty",
            codes::EMPTY_EMAIL,
            user.email.as_str(),
        ));
    }
    Ok(())
}

/// Look up a user by email address. There is no user store, so every lookup
/// fails with [`USER_NOT_FOUND`].
///
/// # Errors
///
/// Returns an error if:
/// - The email is empty (the sentinel wrapped with context)
/// - No user has this email (the bare sentinel)
#[inline]
pub fn find_user_by_email(email: &str) -> Result<User> {
    if email.is_empty() {
        return Err(anyhow::Error::new(USER_NOT_FOUND.clone()).context("email cannot be empty"));
    }
    debug!("Looking up user {email}");
    Err(USER_NOT_FOUND.clone().into())
}

/// The SQL issued by [`query_users`]
#[must_use]
#[inline]
pub fn users_query(limit: u32) -> String {
    format!("SELECT * FROM users LIMIT {limit}")
}

/// List up to `limit` users. The connection always times out.
///
/// # Errors
///
/// Returns a retryable [`DatabaseError`] carrying the failed query
#[inline]
pub fn query_users(limit: u32) -> Result<Vec<User>, DatabaseError> {
    let query = users_query(limit);
    debug!("Executing {query}");
    Err(DatabaseError::new("SELECT", "users", "connection timeout", true).with_detail(query))
}
