//! Insertion-ordered collections.
//!
//! This module provides [`OrderedMap`], an associative container that pairs
//! a hash table with an explicit insertion-order sequence. The two stay in
//! bijection at all times: every key in the order sequence resolves in the
//! table and vice versa.
//!
//! # Examples
//!
//! ```rust
//! use ordmap::ordered::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.set("a", 1);
//! map.set("b", 2);
//! map.set("a", 10); // overwrite keeps the original position
//!
//! let entries: Vec<(&&str, &i32)> = map.iter().collect();
//! assert_eq!(entries, vec![(&"a", &10), (&"b", &2)]);
//! ```

mod map;

pub use map::{IntoIter, Iter, OrderedMap};
