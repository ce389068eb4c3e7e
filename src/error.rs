//! Error types for positional access.
//!
//! Uses `thiserror` for ergonomic error definition. Only the index-based
//! accessors ([`OrderedMap::at`](crate::OrderedMap::at) and
//! [`OrderedMap::key_at`](crate::OrderedMap::key_at)) can fail; every other
//! operation signals absence through `Option` or a boolean, since a missing
//! key is an expected outcome rather than a fault.

use thiserror::Error;

/// The error type for fallible `OrderedMap` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested position lies outside `[-len, len)`.
    ///
    /// Negative indices count from the end of the collection, so a map of
    /// length 3 accepts indices `-3..=2`.
    #[error("index {index} out of range for collection of length {len}")]
    OutOfRange {
        /// The index that was requested.
        index: isize,
        /// The collection length at the time of the call.
        len: usize,
    },
}

/// A specialized `Result` type for `OrderedMap` operations.
pub type Result<T> = std::result::Result<T, Error>;
