//! Bounded traversal of error cause chains

use std::error::Error as StdError;
use std::iter::FusedIterator;

use tracing::{debug, warn};

use crate::error::FaultError;
use crate::faults::database::DatabaseError;
use crate::faults::retry::RetryableErrorExt as _;
use crate::faults::sentinel::Sentinel;

/// Default bound on the number of errors visited in one chain
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Single step: the immediate cause of `err`, if it exposes one
#[must_use]
#[inline]
pub fn unwrap<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    err.source()
}

/// Iterator over an error and its causes, outermost first.
///
/// Visits at most `limit` errors. If the chain continues past that, the
/// iterator yields a single [`FaultError::ChainIntegrity`] and then ends.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
    visited: usize,
    limit: usize,
}

impl<'a> Chain<'a> {
    #[must_use]
    #[inline]
    pub const fn new(err: &'a (dyn StdError + 'static), limit: usize) -> Self {
        Self {
            next: Some(err),
            visited: 0,
            limit,
        }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = Result<&'a (dyn StdError + 'static), FaultError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if self.visited == self.limit {
            warn!("Cause chain exceeded {} hops; stopping", self.limit);
            return Some(Err(FaultError::chain_integrity(self.limit)));
        }
        self.visited += 1;
        self.next = unwrap(current);
        Some(Ok(current))
    }
}

impl FusedIterator for Chain<'_> {}

/// Walks cause chains with a fixed depth bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainWalker {
    max_depth: usize,
}

impl Default for ChainWalker {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl ChainWalker {
    /// Create a walker that visits at most `max_depth` errors per chain.
    /// A bound of zero is raised to one so the outermost error is always visited.
    #[must_use]
    #[inline]
    pub const fn new(max_depth: usize) -> Self {
        Self {
            max_depth: if max_depth == 0 { 1 } else { max_depth },
        }
    }

    #[must_use]
    #[inline]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Iterate over `err` and its causes
    #[must_use]
    #[inline]
    pub const fn chain<'a>(&self, err: &'a (dyn StdError + 'static)) -> Chain<'a> {
        Chain::new(err, self.max_depth)
    }

    /// Lazily render `err` and each of its causes, outermost first
    #[inline]
    pub fn walk<'a>(
        &self,
        err: &'a (dyn StdError + 'static),
    ) -> impl Iterator<Item = Result<String, FaultError>> + use<'a> {
        self.chain(err).map(|link| link.map(ToString::to_string))
    }

    /// Render the whole chain
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The chain is longer than the walker's bound
    #[inline]
    pub fn render(&self, err: &(dyn StdError + 'static)) -> Result<Vec<String>, FaultError> {
        self.walk(err).collect()
    }

    /// Innermost error of the chain
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The chain is longer than the walker's bound
    #[inline]
    pub fn root_cause<'a>(
        &self,
        err: &'a (dyn StdError + 'static),
    ) -> Result<&'a (dyn StdError + 'static), FaultError> {
        let mut root = err;
        for link in self.chain(err) {
            root = link?;
        }
        Ok(root)
    }

    /// Whether `target` appears anywhere in the chain of `err`.
    ///
    /// Matching is by sentinel identity: a different sentinel with the same
    /// text never matches.
    #[must_use]
    #[inline]
    pub fn matches_sentinel(&self, err: &(dyn StdError + 'static), target: &Sentinel) -> bool {
        self.first_match(err, |link| {
            link.downcast_ref::<Sentinel>()
                .filter(|sentinel| sentinel.is(target))
        })
        .is_some()
    }

    /// First error in the chain of type `T`
    #[must_use]
    #[inline]
    pub fn extract<'a, T: StdError + 'static>(&self, err: &'a (dyn StdError + 'static)) -> Option<&'a T> {
        self.first_match(err, |link| link.downcast_ref::<T>())
    }

    /// First [`DatabaseError`] in the chain of `err`
    #[must_use]
    #[inline]
    pub fn extract_database_error<'a>(
        &self,
        err: &'a (dyn StdError + 'static),
    ) -> Option<&'a DatabaseError> {
        self.extract::<DatabaseError>(err)
    }

    /// Retry classification of the first error in the chain that carries one.
    /// Chains without a classified error are not retryable.
    #[must_use]
    #[inline]
    pub fn is_retryable(&self, err: &(dyn StdError + 'static)) -> bool {
        self.first_match(err, |link| {
            link.downcast_ref::<DatabaseError>()
                .map(DatabaseError::is_retryable)
                .or_else(|| link.downcast_ref::<Sentinel>().map(Sentinel::is_retryable))
        })
        .unwrap_or(false)
    }

    fn first_match<'a, T>(
        &self,
        err: &'a (dyn StdError + 'static),
        mut f: impl FnMut(&'a (dyn StdError + 'static)) -> Option<T>,
    ) -> Option<T> {
        for link in self.chain(err) {
            match link {
                Ok(link) => {
                    if let Some(found) = f(link) {
                        return Some(found);
                    }
                }
                Err(e) => {
                    debug!("Abandoning chain search: {e}");
                    return None;
                }
            }
        }
        None
    }
}
