//! Membership and selection queries.

use std::cmp::Ordering;

use rand::Rng;

use super::Collection;
use crate::error::{Error, Result};
use crate::key::Key;

impl<T: Clone> Collection<T> {
    /// Returns true if some value is strictly equal to `value`.
    ///
    /// Equality is `PartialEq` on `T`; for [`Value`](crate::Value) that means
    /// variant and payload must both match.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.values_iter().any(|v| v == value)
    }

    /// Returns the first value in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.entries.front().map(|(_, value)| value)
    }

    /// Returns the last value in insertion order.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.entries.back().map(|(_, value)| value)
    }

    /// Returns the smallest value. Ties go to the earliest entry.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if there are no values.
    pub fn min(&self) -> Result<&T>
    where
        T: PartialOrd,
    {
        self.extreme("min", Ordering::Less)
    }

    /// Returns the largest value. Ties go to the earliest entry.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if there are no values.
    pub fn max(&self) -> Result<&T>
    where
        T: PartialOrd,
    {
        self.extreme("max", Ordering::Greater)
    }

    fn extreme(&self, operation: &'static str, wanted: Ordering) -> Result<&T>
    where
        T: PartialOrd,
    {
        let mut values = self.values_iter();
        let Some(first) = values.next() else {
            tracing::debug!(operation, "extreme of an empty collection");
            return Err(Error::empty_collection(operation));
        };
        // Incomparable pairs keep the current candidate
        Ok(values.fold(first, |best, candidate| {
            if candidate.partial_cmp(best) == Some(wanted) {
                candidate
            } else {
                best
            }
        }))
    }

    /// Picks `value` if the collection contains it, otherwise `default`,
    /// otherwise the first value.
    ///
    /// Only `None` counts as no default. `Some(Value::Nil)` is returned as
    /// given.
    #[must_use]
    pub fn variant(&self, value: T, default: Option<T>) -> Option<T>
    where
        T: PartialEq,
    {
        if self.contains(&value) {
            return Some(value);
        }
        default.or_else(|| self.first().cloned())
    }

    /// Looks up `key`, falling back to `default_key`, then to the first value.
    ///
    /// A missing `default_key` yields `None` rather than the first value.
    #[must_use]
    pub fn variant_key(&self, key: Option<Key>, default_key: Option<Key>) -> Option<&T> {
        if let Some(value) = key.and_then(|k| self.get(k)) {
            return Some(value);
        }
        match default_key {
            Some(fallback) => self.get(fallback),
            None => self.first(),
        }
    }

    /// Returns a uniformly random value.
    #[must_use]
    pub fn random(&self) -> Option<&T> {
        self.random_with(&mut rand::thread_rng())
    }

    /// Returns a uniformly random value drawn from `rng`.
    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        if self.none() {
            return None;
        }
        let position = rng.gen_range(0..self.count());
        self.entries.get(position).map(|(_, value)| value)
    }
}
