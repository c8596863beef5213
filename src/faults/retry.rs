//! Retry classification for errors

/// Extension trait for classifying errors as retryable or fatal.
///
/// Implementors only define [`is_retryable`](RetryableErrorExt::is_retryable);
/// [`is_fatal`](RetryableErrorExt::is_fatal) is its inverse. Types that have
/// no reason to be retried should answer `false`.
pub trait RetryableErrorExt: std::error::Error {
    /// Returns `true` if the failed operation may succeed when attempted again.
    fn is_retryable(&self) -> bool;

    /// Returns `true` if the failed operation should not be retried.
    #[inline]
    fn is_fatal(&self) -> bool {
        !self.is_retryable()
    }
}
