//! The ordered, key-addressable collection.
//!
//! [`Collection`] keeps entries in insertion order and addresses them by
//! [`Key`]. Storage is a pair of persistent structures from the `im` crate:
//! a vector of entries and a hash index from key to position. Cloning is
//! O(1) and every later mutation is copy-on-write, so a derived collection
//! never observes changes made to its source and vice versa.
//!
//! The operation set is split by concern:
//! - [`query`] - membership and selection
//! - [`shape`] - filtering, slicing and re-keying
//! - [`transform`] - mapping, merging and aggregation
//! - [`tuples`] - operations on collections of tuple-shaped [`Value`](crate::Value)s

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::error::{Error, ErrorKind, Result};
use crate::key::Key;
use crate::truthy::Truthy;

pub mod query;
pub mod shape;
pub mod transform;
pub mod tuples;

#[cfg(feature = "serde")]
mod serde_impl;

/// Ordered mapping from [`Key`] to `T` with a fluent transformation API.
///
/// Transformations borrow `self` and return a new collection. Only the
/// indexable access methods ([`set`](Self::set), [`push`](Self::push),
/// [`remove`](Self::remove)) mutate in place.
#[derive(Clone)]
pub struct Collection<T>
where
    T: Clone,
{
    entries: im::Vector<(Key, T)>,
    index: im::HashMap<Key, usize>,
    /// One past the greatest integer key ever inserted.
    next_free: Option<i64>,
}

impl<T: Clone> Collection<T> {
    /// Wraps an ordered mapping.
    ///
    /// Entries keep the iteration order of `items`. A repeated key overwrites
    /// the earlier value in place.
    pub fn of<K, I>(items: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut collection = Self::of_empty();
        for (key, value) in items {
            collection.set(key, value);
        }
        collection
    }

    /// Creates an empty collection.
    #[must_use]
    pub fn of_empty() -> Self {
        Self {
            entries: im::Vector::new(),
            index: im::HashMap::new(),
            next_free: None,
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the collection has at least one entry.
    #[must_use]
    pub fn any(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Returns true if the collection is empty.
    #[must_use]
    pub fn none(&self) -> bool {
        self.entries.is_empty()
    }

    // -------------------------------------------------------------------------
    // Indexable access
    // -------------------------------------------------------------------------

    /// Gets the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: impl Into<Key>) -> Option<&T> {
        let position = *self.index.get(&key.into())?;
        self.entries.get(position).map(|(_, value)| value)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.index.contains_key(&key.into())
    }

    /// Sets the value under `key`.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set(&mut self, key: impl Into<Key>, value: T) {
        let key = key.into();
        if let Key::Int(n) = key {
            if self.next_free.is_none_or(|next| n >= next) {
                self.next_free = Some(n.saturating_add(1));
            }
        }
        match self.index.get(&key) {
            Some(&position) => {
                self.entries.set(position, (key, value));
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push_back((key, value));
            }
        }
    }

    /// Appends `value` under the next free integer key and returns that key.
    ///
    /// The next free key is one past the greatest integer key this collection
    /// has ever held, or 0. Existing entries are never disturbed.
    ///
    /// # Errors
    ///
    /// Returns `NextElementOccupied` once `i64::MAX` is in use.
    pub fn push(&mut self, value: T) -> Result<Key> {
        let key = Key::Int(self.next_free.unwrap_or(0));
        if self.index.contains_key(&key) {
            tracing::warn!(key = %key, "append rejected: next integer key is occupied");
            return Err(Error::new(ErrorKind::NextElementOccupied));
        }
        self.set(key.clone(), value);
        Ok(key)
    }

    /// Removes `key`, returning its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<T> {
        let position = self.index.remove(&key.into())?;
        let (_, value) = self.entries.remove(position);
        for (offset, (moved, _)) in self.entries.iter().skip(position).enumerate() {
            self.index.insert(moved.clone(), position + offset);
        }
        Some(value)
    }

    // -------------------------------------------------------------------------
    // Iteration and export
    // -------------------------------------------------------------------------

    /// Returns an iterator over key-value pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        let split: fn(&(Key, T)) -> (&Key, &T) = entry_refs;
        self.entries.iter().map(split)
    }

    /// Returns an iterator over keys in insertion order.
    pub fn keys_iter(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over values in insertion order.
    pub fn values_iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Returns the backing mapping as owned pairs.
    #[must_use]
    pub fn to_array(&self) -> Vec<(Key, T)> {
        self.entries.iter().cloned().collect()
    }

    /// Same as [`to_array`](Self::to_array).
    #[must_use]
    pub fn all(&self) -> Vec<(Key, T)> {
        self.to_array()
    }
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self::of_empty()
    }
}

/// Borrowing iterator over `(key, value)` pairs.
pub type Iter<'a, T> =
    std::iter::Map<im::vector::Iter<'a, (Key, T)>, fn(&'a (Key, T)) -> (&'a Key, &'a T)>;

fn entry_refs<T>(entry: &(Key, T)) -> (&Key, &T) {
    (&entry.0, &entry.1)
}

impl<T: Clone> Truthy for Collection<T> {
    fn is_truthy(&self) -> bool {
        self.any()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// Equality is order-sensitive
impl<T: Clone + PartialEq> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Clone + Eq> Eq for Collection<T> {}

impl<T: Clone + Hash> Hash for Collection<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count().hash(state);
        for (key, value) in self.iter() {
            key.hash(state);
            value.hash(state);
        }
    }
}

/// Builds a list keyed `0..n`.
impl<T: Clone> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::of_empty();
        for (position, value) in iter.into_iter().enumerate() {
            collection.set(position, value);
        }
        collection
    }
}

impl<T: Clone> From<Vec<T>> for Collection<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for Collection<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> IntoIterator for Collection<T> {
    type Item = (Key, T);
    type IntoIter = im::vector::ConsumingIter<(Key, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T: Clone> IntoIterator for &'a Collection<T> {
    type Item = (&'a Key, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
