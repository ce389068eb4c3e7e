//! Insertion-ordered map with positional access and set algebra.
//!
//! This module provides [`OrderedMap`], a mutable associative container that
//! iterates in insertion order and layers list-like operations on top of a
//! hash table.
//!
//! # Overview
//!
//! `OrderedMap` pairs two structures that are kept in bijection:
//! - a hash table from key to value, and
//! - a vector of keys recording the order in which they were first inserted.
//!
//! Overwriting an existing key replaces the value but keeps the key's
//! position. Removing a key drops it from both structures. Iteration,
//! positional access, and every derived collection follow the order vector.
//!
//! # Time Complexity
//!
//! | Operation        | Complexity |
//! |------------------|------------|
//! | `set`            | O(1)*      |
//! | `get`            | O(1)*      |
//! | `remove`         | O(n)       |
//! | `len`            | O(1)       |
//! | `at` / `key_at`  | O(1)       |
//! | `iter`           | O(1) + O(n)|
//! | `sort_by`        | O(n log n) |
//! | set algebra      | O(n + m)   |
//!
//! \* amortized, as for the backing `HashMap`.
//!
//! # Mutability Contract
//!
//! Each operation's mutability direction is part of its public contract:
//! `set`, `remove`, `clear`, `ensure`, `sweep`, and `sort_by` mutate the
//! receiver in place; `filter`, `partition`, `map`, the set algebra
//! operations, `to_reversed`, and `clone` allocate and return independent
//! maps that never alias the receiver's storage.
//!
//! # Examples
//!
//! ```rust
//! use ordmap::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! map.set("one", 1);
//! map.set("two", 2);
//! map.set("three", 3);
//!
//! assert_eq!(map.get("two"), Some(&2));
//! assert_eq!(map.at(-1), Ok(&3));
//!
//! let even = map.filter(|value, _| value % 2 == 0);
//! assert_eq!(even.len(), 1);
//! assert_eq!(map.len(), 3); // receiver untouched
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use rand::Rng;

use crate::error::{Error, Result};

// =============================================================================
// Hash builder selection
// =============================================================================

#[cfg(feature = "fxhash")]
type DefaultHashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type DefaultHashBuilder = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type DefaultHashBuilder = std::collections::hash_map::RandomState;

// =============================================================================
// OrderedMap Definition
// =============================================================================

/// An associative map that iterates in insertion order.
///
/// Keys are unique; inserting an existing key overwrites the value without
/// moving the key. The map is not safe for concurrent mutation from multiple
/// threads; callers needing shared access must supply their own
/// synchronization.
///
/// # Type Parameters
///
/// * `K` - The key type. Must implement `Eq`, `Hash`, and `Clone` (the key is
///   stored in both the table and the order sequence).
/// * `V` - The value type. Derived-collection operations additionally require
///   `V: Clone`.
///
/// # Examples
///
/// ```rust
/// use ordmap::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.set("a", 1);
/// map.set("b", 2);
///
/// let keys: Vec<&&str> = map.keys().collect();
/// assert_eq!(keys, vec![&"a", &"b"]);
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    /// Key-value storage.
    entries: HashMap<K, V, DefaultHashBuilder>,
    /// Keys in the order they were first inserted.
    order: Vec<K>,
}

// =============================================================================
// Construction & Core Access
// =============================================================================

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<String, i32> = OrderedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(DefaultHashBuilder::default()),
            order: Vec::new(),
        }
    }

    /// Creates an empty map with space for at least `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, DefaultHashBuilder::default()),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present.
    ///
    /// A new key is appended to the end of the insertion order. Overwriting
    /// an existing key replaces its value but leaves its position unchanged.
    ///
    /// # Complexity
    ///
    /// O(1) amortized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.set("a", 1), None);
    /// map.set("b", 2);
    ///
    /// // Overwrite keeps the original position.
    /// assert_eq!(map.set("a", 10), Some(1));
    /// let keys: Vec<&&str> = map.keys().collect();
    /// assert_eq!(keys, vec![&"a", &"b"]);
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.entries.entry(key) {
            Entry::Occupied(mut slot) => Some(slot.insert(value)),
            Entry::Vacant(slot) => {
                self.order.push(slot.key().clone());
                slot.insert(value);
                None
            }
        }
    }

    /// Returns a reference to the value for `key`, or `None` if absent.
    ///
    /// Accepts borrowed forms of the key type through the `Borrow` trait:
    /// an `OrderedMap<String, _>` can be queried with a `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a".to_string(), 1);
    ///
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get("missing"), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value for `key`, or `None` if
    /// absent.
    #[inline]
    #[must_use]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get_mut(key)
    }

    /// Returns `true` if the map contains `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    ///
    /// assert!(map.contains_key("a"));
    /// assert!(!map.contains_key("b"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// Removing an absent key is a no-op and returns `None`.
    ///
    /// # Complexity
    ///
    /// O(n): the key's position in the order sequence is found by a linear
    /// scan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    ///
    /// assert_eq!(map.remove("a"), Some(1));
    /// assert_eq!(map.remove("a"), None);
    /// assert!(map.is_empty());
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let value = self.entries.remove(key)?;
        if let Some(position) = self.order.iter().position(|stored| stored.borrow() == key) {
            self.order.remove(position);
        }
        Some(value)
    }

    /// Removes all entries.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Returns the value for `key`, inserting one produced by `factory` if
    /// the key is absent.
    ///
    /// `factory` is invoked at most once per call and never for an
    /// already-present key, so the first value stored under a key wins for
    /// every later `ensure` of the same key. A newly created key is appended
    /// to the end of the insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// let value = *map.ensure("key", |_| 42);
    /// assert_eq!(value, 42);
    ///
    /// // The factory is not invoked for a present key.
    /// let value = *map.ensure("key", |_| 99);
    /// assert_eq!(value, 42);
    /// ```
    pub fn ensure<F>(&mut self, key: K, factory: F) -> &mut V
    where
        F: FnOnce(&K) -> V,
    {
        match self.entries.entry(key) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                let value = factory(slot.key());
                self.order.push(slot.key().clone());
                slot.insert(value)
            }
        }
    }

    /// Returns `true` if every listed key is present.
    ///
    /// An empty key list is vacuously satisfied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// assert!(map.has_all(["a", "b"]));
    /// assert!(!map.has_all(["a", "c"]));
    ///
    /// let no_keys: [&str; 0] = [];
    /// assert!(map.has_all(no_keys));
    /// ```
    pub fn has_all<'q, Q, I>(&self, keys: I) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        keys.into_iter().all(|key| self.contains_key(key))
    }

    /// Returns `true` if at least one listed key is present.
    ///
    /// An empty key list yields `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    ///
    /// assert!(map.has_any(["a", "z"]));
    /// assert!(!map.has_any(["x", "y"]));
    /// ```
    pub fn has_any<'q, Q, I>(&self, keys: I) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized + 'q,
        I: IntoIterator<Item = &'q Q>,
    {
        keys.into_iter().any(|key| self.contains_key(key))
    }

    /// Returns an iterator over key-value pairs in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// let pairs: Vec<(&&str, &i32)> = map.iter().collect();
    /// assert_eq!(pairs, vec![(&"a", &1), (&"b", &2)]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            keys: self.order.iter(),
            entries: &self.entries,
        }
    }

    /// Returns an iterator over keys in insertion order.
    ///
    /// Each call produces a fresh iterator; the sequence is a view of the
    /// current state, frozen for the duration of the borrow.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Returns an iterator over values in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// let sum: i32 = map.values().sum();
    /// assert_eq!(sum, 3);
    /// ```
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

// =============================================================================
// Positional & Randomized Access
// =============================================================================

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    /// Returns the first `n` values in insertion order.
    ///
    /// If `n` exceeds the map's size, all values are returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// map.set("c", 3);
    ///
    /// assert_eq!(map.first(2), vec![&1, &2]);
    /// assert_eq!(map.first(10), vec![&1, &2, &3]);
    /// assert!(map.first(0).is_empty());
    /// ```
    #[must_use]
    pub fn first(&self, n: usize) -> Vec<&V> {
        self.order
            .iter()
            .take(n)
            .map(|key| &self.entries[key])
            .collect()
    }

    /// Returns the last `n` values, in insertion order.
    ///
    /// If `n` exceeds the map's size, all values are returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// map.set("c", 3);
    ///
    /// assert_eq!(map.last(2), vec![&2, &3]);
    /// ```
    #[must_use]
    pub fn last(&self, n: usize) -> Vec<&V> {
        let skip = self.order.len().saturating_sub(n);
        self.order
            .iter()
            .skip(skip)
            .map(|key| &self.entries[key])
            .collect()
    }

    /// Returns the value at `index` in insertion order.
    ///
    /// Indices are 0-based; negative indices count from the end, so `-1` is
    /// the most recently inserted position. Indices outside `[-len, len)`
    /// produce [`Error::OutOfRange`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when the index does not resolve to a
    /// position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// map.set("c", 3);
    ///
    /// assert_eq!(map.at(0), Ok(&1));
    /// assert_eq!(map.at(-1), Ok(&3));
    /// assert!(map.at(3).is_err());
    /// ```
    pub fn at(&self, index: isize) -> Result<&V> {
        let key = self.key_at(index)?;
        Ok(&self.entries[key])
    }

    /// Returns the key at `index` in insertion order.
    ///
    /// Same indexing contract as [`at`](Self::at).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when the index does not resolve to a
    /// position.
    pub fn key_at(&self, index: isize) -> Result<&K> {
        let position = self.resolve_index(index)?;
        Ok(&self.order[position])
    }

    /// Maps a possibly negative index onto `[0, len)`.
    fn resolve_index(&self, index: isize) -> Result<usize> {
        let len = self.order.len();
        let magnitude = index.unsigned_abs();
        let position = if index >= 0 {
            (magnitude < len).then_some(magnitude)
        } else {
            len.checked_sub(magnitude)
        };
        position.ok_or(Error::OutOfRange { index, len })
    }

    /// Returns `n` values chosen uniformly at random without replacement.
    ///
    /// If `n` meets or exceeds the map's size, all values are returned in a
    /// shuffled order. The map is never mutated and no value is repeated
    /// within one call. Uses the thread-local random source; for a
    /// caller-seeded source see [`random_with`](Self::random_with).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// map.set("c", 3);
    ///
    /// assert_eq!(map.random(2).len(), 2);
    /// assert_eq!(map.random(10).len(), 3);
    /// ```
    #[must_use]
    pub fn random(&self, n: usize) -> Vec<&V> {
        self.random_with(&mut rand::thread_rng(), n)
    }

    /// Returns `n` values sampled without replacement using `rng`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// assert_eq!(map.random_with(&mut rng, 1).len(), 1);
    /// ```
    #[must_use]
    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<&V> {
        let amount = n.min(self.order.len());
        rand::seq::index::sample(rng, self.order.len(), amount)
            .into_iter()
            .map(|position| &self.entries[&self.order[position]])
            .collect()
    }
}

// =============================================================================
// Functional Query Operations
// =============================================================================

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    /// Returns the first value in insertion order satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// map.set("c", 3);
    ///
    /// assert_eq!(map.find(|value, _| *value > 1), Some(&2));
    /// assert_eq!(map.find(|value, _| *value > 9), None);
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> Option<&V>
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.iter()
            .find(|&(key, value)| predicate(value, key))
            .map(|(_, value)| value)
    }

    /// Returns the last value in insertion order satisfying `predicate`.
    ///
    /// Scans in reverse insertion order and stops at the first match, which
    /// is exactly the last match a forward scan would see.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// map.set("c", 3);
    ///
    /// assert_eq!(map.find_last(|value, _| *value < 3), Some(&2));
    /// ```
    pub fn find_last<P>(&self, mut predicate: P) -> Option<&V>
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.iter()
            .rev()
            .find(|&(key, value)| predicate(value, key))
            .map(|(_, value)| value)
    }

    /// Returns `true` if any entry satisfies `predicate`.
    ///
    /// Short-circuits on the first match.
    pub fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.iter().any(|(key, value)| predicate(value, key))
    }

    /// Returns `true` if every entry satisfies `predicate`.
    ///
    /// Short-circuits on the first non-match. Vacuously `true` for an empty
    /// map.
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.iter().all(|(key, value)| predicate(value, key))
    }

    /// Removes every entry satisfying `predicate`, returning how many were
    /// removed.
    ///
    /// This is the in-place counterpart of [`filter`](Self::filter): `sweep`
    /// drops matching entries from the receiver, while `filter` leaves the
    /// receiver untouched and returns the matching entries as a new map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// map.set("c", 3);
    ///
    /// let removed = map.sweep(|value, _| *value < 3);
    /// assert_eq!(removed, 2);
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get("c"), Some(&3));
    /// ```
    pub fn sweep<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&V, &K) -> bool,
    {
        let entries = &mut self.entries;
        let before = self.order.len();
        self.order.retain(|key| {
            if predicate(&entries[key], key) {
                entries.remove(key);
                false
            } else {
                true
            }
        });
        before - self.order.len()
    }

    /// Returns a new map with the same keys in the same order and values
    /// produced by `transform`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// let doubled = map.map(|value, _| value * 2);
    /// assert_eq!(doubled.get("a"), Some(&2));
    /// assert_eq!(doubled.get("b"), Some(&4));
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, mut transform: F) -> OrderedMap<K, U>
    where
        F: FnMut(&V, &K) -> U,
    {
        let mut result = OrderedMap::with_capacity(self.len());
        for (key, value) in self.iter() {
            result.set(key.clone(), transform(value, key));
        }
        result
    }

    /// Folds over entries in insertion order, starting from `init`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// map.set("c", 3);
    ///
    /// let sum = map.fold(0, |accumulator, value, _| accumulator + value);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn fold<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &V, &K) -> B,
    {
        self.iter()
            .fold(init, |accumulator, (key, value)| {
                function(accumulator, value, key)
            })
    }
}

// =============================================================================
// Derived Collections & Set Algebra
// =============================================================================

impl<K: Eq + Hash + Clone, V: Clone> OrderedMap<K, V> {
    /// Returns a new map containing only the entries satisfying `predicate`,
    /// in their original relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// map.set("c", 3);
    ///
    /// let large = map.filter(|value, _| *value > 1);
    /// assert_eq!(large.len(), 2);
    /// assert_eq!(map.len(), 3); // receiver untouched
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V, &K) -> bool,
    {
        let mut result = Self::new();
        for (key, value) in self.iter() {
            if predicate(value, key) {
                result.set(key.clone(), value.clone());
            }
        }
        result
    }

    /// Splits the map into `(matched, unmatched)` by `predicate`.
    ///
    /// Every entry lands in exactly one of the two maps; relative order is
    /// preserved within each.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// map.set("c", 3);
    ///
    /// let (matched, unmatched) = map.partition(|value, _| *value > 1);
    /// assert_eq!(matched.len(), 2);
    /// assert_eq!(unmatched.len(), 1);
    /// ```
    #[must_use]
    pub fn partition<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&V, &K) -> bool,
    {
        let mut matched = Self::new();
        let mut unmatched = Self::new();
        for (key, value) in self.iter() {
            if predicate(value, key) {
                matched.set(key.clone(), value.clone());
            } else {
                unmatched.set(key.clone(), value.clone());
            }
        }
        (matched, unmatched)
    }

    /// Returns the union of two maps.
    ///
    /// The result holds the receiver's entries in their original order,
    /// followed by `other`'s entries whose keys are not already present, in
    /// `other`'s order. On key collision the receiver's value wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut left = OrderedMap::new();
    /// left.set("a", 1);
    /// left.set("b", 2);
    ///
    /// let mut right = OrderedMap::new();
    /// right.set("b", 20);
    /// right.set("c", 3);
    ///
    /// let union = left.union(&right);
    /// assert_eq!(union.len(), 3);
    /// assert_eq!(union.get("b"), Some(&2)); // left-biased
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (key, value) in other.iter() {
            if !result.contains_key(key) {
                result.set(key.clone(), value.clone());
            }
        }
        result
    }

    /// Returns the entries whose keys appear in both maps, in the receiver's
    /// order, with the receiver's values.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.filter(|_, key| other.contains_key(key))
    }

    /// Returns the entries whose keys appear in the receiver but not in
    /// `other`, in the receiver's order.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.filter(|_, key| !other.contains_key(key))
    }

    /// Returns the entries whose keys appear in exactly one of the two maps.
    ///
    /// The receiver's exclusive entries come first in the receiver's order,
    /// followed by `other`'s exclusive entries in `other`'s order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut left = OrderedMap::new();
    /// left.set("a", 1);
    /// left.set("b", 2);
    ///
    /// let mut right = OrderedMap::new();
    /// right.set("b", 20);
    /// right.set("c", 3);
    ///
    /// let exclusive = left.symmetric_difference(&right);
    /// assert_eq!(exclusive.len(), 2);
    /// assert!(exclusive.contains_key("a"));
    /// assert!(exclusive.contains_key("c"));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.difference(other);
        for (key, value) in other.iter() {
            if !self.contains_key(key) {
                result.set(key.clone(), value.clone());
            }
        }
        result
    }

    /// Returns a new map with the same entries in exactly reversed insertion
    /// order. The receiver is untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// map.set("c", 3);
    ///
    /// let reversed = map.to_reversed();
    /// let values: Vec<&i32> = reversed.values().collect();
    /// assert_eq!(values, vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub fn to_reversed(&self) -> Self {
        let mut result = self.clone();
        result.order.reverse();
        result
    }
}

// =============================================================================
// Sorting
// =============================================================================

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    /// Reorders the map in place by a strict-weak `less` over value/key
    /// pairs, returning the receiver for chaining.
    ///
    /// The sort is stable: entries equal under `less` keep their relative
    /// insertion order. Sorting an empty map is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.set("a", 3);
    /// map.set("b", 1);
    /// map.set("c", 2);
    ///
    /// map.sort_by(|left, right, _, _| left < right);
    /// let values: Vec<&i32> = map.values().collect();
    /// assert_eq!(values, vec![&1, &2, &3]);
    /// ```
    pub fn sort_by<F>(&mut self, mut less: F) -> &mut Self
    where
        F: FnMut(&V, &V, &K, &K) -> bool,
    {
        let entries = &self.entries;
        self.order.sort_by(|first, second| {
            let first_value = &entries[first];
            let second_value = &entries[second];
            if less(first_value, second_value, first, second) {
                Ordering::Less
            } else if less(second_value, first_value, second, first) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        self
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over the entries of an [`OrderedMap`] in insertion order.
pub struct Iter<'a, K, V> {
    keys: std::slice::Iter<'a, K>,
    entries: &'a HashMap<K, V, DefaultHashBuilder>,
}

impl<'a, K: Eq + Hash, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.entries.get(key).map(|value| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K: Eq + Hash, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        self.entries.get(key).map(|value| (key, value))
    }
}

impl<K: Eq + Hash, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.keys.len()
    }
}

impl<K: Eq + Hash, V> FusedIterator for Iter<'_, K, V> {}

/// An owning iterator over the entries of an [`OrderedMap`] in insertion
/// order.
pub struct IntoIter<K, V> {
    keys: std::vec::IntoIter<K>,
    entries: HashMap<K, V, DefaultHashBuilder>,
}

impl<K: Eq + Hash, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        self.entries.remove(&key).map(|value| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K: Eq + Hash, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        self.entries.remove(&key).map(|value| (key, value))
    }
}

impl<K: Eq + Hash, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.keys.len()
    }
}

impl<K: Eq + Hash, V> FusedIterator for IntoIter<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K: Eq + Hash + Clone, V> Default for OrderedMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    /// Builds a map from `(key, value)` pairs.
    ///
    /// Duplicate keys keep the position of their first occurrence and the
    /// value of their last, matching repeated [`set`](OrderedMap::set) calls.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq + Hash + Clone, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Eq + Hash, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            keys: self.order.into_iter(),
            entries: self.entries,
        }
    }
}

impl<'a, K: Eq + Hash + Clone, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Content-based equality: two maps are equal when they hold the same set of
/// keys with equal values per key. Iteration order is not compared.
impl<K: Eq + Hash, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.entries.get(key) == Some(value))
    }
}

impl<K: Eq + Hash, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: Eq + Hash + Clone + fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}
