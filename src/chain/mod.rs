//! Error chain traversal
//!
//! Free functions here use a [`ChainWalker`] with [`DEFAULT_MAX_DEPTH`].

pub mod walker;

pub use walker::{Chain, ChainWalker, DEFAULT_MAX_DEPTH, unwrap};

use std::error::Error as StdError;

use crate::error::FaultError;
use crate::faults::sentinel::Sentinel;

/// Lazily render `err` and its causes, outermost first
#[inline]
pub fn walk_chain<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = Result<String, FaultError>> + 'a {
    ChainWalker::default().walk(err)
}

/// Whether `target` is `err` or appears among its causes
#[must_use]
#[inline]
pub fn matches_sentinel(err: &(dyn StdError + 'static), target: &Sentinel) -> bool {
    ChainWalker::default().matches_sentinel(err, target)
}

/// First error of type `T` in the chain of `err`
#[must_use]
#[inline]
pub fn extract_typed<'a, T: StdError + 'static>(
    err: &'a (dyn StdError + 'static),
) -> Option<&'a T> {
    ChainWalker::default().extract::<T>(err)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::faults::database::DatabaseError;
    use anyhow::Context as _;

    fn failing_query() -> anyhow::Error {
        Err::<(), _>(DatabaseError::new("SELECT", "users", "connection timeout", true))
            .context("listing users")
            .unwrap_err()
    }

    #[test]
    fn free_functions_borrow_from_the_error() {
        let err = failing_query();
        let first = walk_chain(err.as_ref()).next().unwrap().unwrap();
        assert_eq!(first, "listing users");

        let found: &DatabaseError = extract_typed(err.as_ref()).unwrap();
        assert_eq!(found.resource(), "users");
        assert_eq!(walk_chain(err.as_ref()).count(), 3);
    }
}
