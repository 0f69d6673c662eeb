use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur when a bag needs to grow its buffer.
///
/// Only [`ArrayBag::try_add()`][crate::ArrayBag::try_add] reports these. The infallible
/// [`ArrayBag::add()`][crate::ArrayBag::add] treats the same conditions as fatal, the way
/// standard library collections do.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Doubling the current capacity would not fit in `usize`.
    #[error("cannot grow bag beyond capacity {current_capacity}: doubled capacity overflows usize")]
    CapacityOverflow {
        /// The capacity the bag had when the growth was attempted.
        current_capacity: usize,
    },

    /// The allocator refused to provide a buffer of the requested capacity.
    #[error("failed to allocate bag buffer with capacity {requested_capacity}")]
    AllocationFailed {
        /// The capacity the bag attempted to grow to.
        requested_capacity: usize,

        /// The underlying reservation failure.
        #[source]
        source: TryReserveError,
    },
}

/// A specialized `Result` type for bag operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::error::Error as _;
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn capacity_overflow_mentions_capacity() {
        let error = Error::CapacityOverflow {
            current_capacity: 1234,
        };

        assert!(error.to_string().contains("1234"));
        assert!(error.source().is_none());
    }

    #[test]
    fn allocation_failure_exposes_source() {
        // Asking for more than isize::MAX bytes is rejected up front without touching memory.
        let source = Vec::<u64>::new()
            .try_reserve_exact(usize::MAX)
            .expect_err("reserving usize::MAX items of u64 must fail");

        let error = Error::AllocationFailed {
            requested_capacity: usize::MAX,
            source,
        };

        assert!(error.source().is_some());

        let result: Result<()> = Err(error);
        assert!(result.is_err());
    }
}
