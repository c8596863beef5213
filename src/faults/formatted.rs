//! Formatted ad-hoc errors

use anyhow::{Result, bail};

/// Oldest age accepted by [`validate_age`]
pub const MAX_AGE: i64 = 130;

/// Validate an age in years
///
/// # Errors
///
/// Returns an error if:
/// - The age is negative
/// - The age is greater than [`MAX_AGE`]
#[inline]
pub fn validate_age(age: i64) -> Result<()> {
    if age < 0 {
        bail!("invalid age: {age}. Age cannot be negative");
    }
    if age > MAX_AGE {
        bail!("invalid age: {age}. Age cannot be greater than {MAX_AGE}");
    }
    Ok(())
}
