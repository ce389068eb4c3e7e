//! # ordmap
//!
//! An insertion-ordered associative map with list-like ergonomics.
//!
//! ## Overview
//!
//! This library provides [`OrderedMap`], a map that remembers the order in
//! which keys were first inserted and builds a rich operation surface on top
//! of that single guarantee:
//!
//! - **Deterministic iteration**: `keys`, `values`, and `iter` always walk
//!   entries in insertion order.
//! - **Positional access**: `at`, `key_at`, `first`, `last`, and uniform
//!   `random` sampling without replacement.
//! - **Functional transforms**: `find`, `filter`, `partition`, `map`,
//!   `fold`, `sweep`.
//! - **Set algebra**: `union`, `intersection`, `difference`, and
//!   `symmetric_difference`, all left-biased on value collisions.
//! - **Content equality**: `==` compares entries, not iteration order.
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc-hash`'s `FxHasher` for the backing table
//! - `ahash`: use `ahash`'s hasher for the backing table
//!
//! ## Example
//!
//! ```rust
//! use ordmap::OrderedMap;
//!
//! let mut scores = OrderedMap::new();
//! scores.set("carol", 3);
//! scores.set("alice", 1);
//! scores.set("bob", 2);
//!
//! // Iteration follows insertion order, not key or value order.
//! let names: Vec<&&str> = scores.keys().collect();
//! assert_eq!(names, vec![&"carol", &"alice", &"bob"]);
//!
//! // Sorting reorders in place and returns the receiver for chaining.
//! scores.sort_by(|left, right, _, _| left < right);
//! let ordered: Vec<&i32> = scores.values().collect();
//! assert_eq!(ordered, vec![&1, &2, &3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod ordered;

pub use error::{Error, Result};
pub use ordered::OrderedMap;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use ordmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::ordered::OrderedMap;
}
