//! Filtering, slicing and re-keying.
//!
//! All of these keep the original keys except [`Collection::values`] and
//! [`Collection::keys`], which re-key `0..n`.

use std::collections::HashSet;
use std::fmt::Display;

use super::Collection;
use crate::key::Key;
use crate::truthy::Truthy;

impl<T: Clone> Collection<T> {
    /// Keeps entries for which `predicate(value, key)` holds.
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T, &Key) -> bool,
    {
        Self::of(
            self.iter()
                .filter(|&(key, value)| predicate(value, key))
                .map(|(key, value)| (key.clone(), value.clone())),
        )
    }

    /// Keeps truthy values (see [`Truthy`]).
    #[must_use]
    pub fn filter_truthy(&self) -> Self
    where
        T: Truthy,
    {
        self.filter(|value, _| value.is_truthy())
    }

    /// Keeps entries for which `predicate(value, key)` does not hold.
    #[must_use]
    pub fn reject<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T, &Key) -> bool,
    {
        self.filter(|value, key| !predicate(value, key))
    }

    /// Keeps entries whose key is one of `keys`.
    #[must_use]
    pub fn only<K, I>(&self, keys: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = K>,
    {
        let wanted: HashSet<Key> = keys.into_iter().map(Into::into).collect();
        self.filter(|_, key| wanted.contains(key))
    }

    /// Drops the keys, re-keying values `0..n`.
    #[must_use]
    pub fn values(&self) -> Self {
        self.values_iter().cloned().collect()
    }

    /// Returns the keys as values, keyed `0..n`.
    #[must_use]
    pub fn keys(&self) -> Collection<Key> {
        self.keys_iter().cloned().collect()
    }

    /// Removes values whose string form was already seen.
    ///
    /// Two values are duplicates when their `Display` output matches, so
    /// `1` and `"1"` collapse. The first occurrence keeps its key.
    #[must_use]
    pub fn unique(&self) -> Self
    where
        T: Display,
    {
        let mut seen = HashSet::new();
        self.filter(|value, _| seen.insert(value.to_string()))
    }

    /// Positional slice with original keys preserved.
    ///
    /// A negative `offset` counts from the end. `length` of `None` runs to
    /// the end; a negative `length` stops that many entries before the end.
    #[must_use]
    pub fn slice(&self, offset: i64, length: Option<i64>) -> Self {
        let len = i64::try_from(self.count()).unwrap_or(i64::MAX);
        let start = if offset < 0 {
            (len + offset).max(0)
        } else {
            offset.min(len)
        };
        let end = match length {
            None => len,
            Some(n) if n < 0 => (len + n).max(start),
            Some(n) => start.saturating_add(n).min(len),
        };
        let skip = usize::try_from(start).unwrap_or(0);
        let take = usize::try_from(end - start).unwrap_or(0);
        Self::of(
            self.iter()
                .skip(skip)
                .take(take)
                .map(|(key, value)| (key.clone(), value.clone())),
        )
    }
}
