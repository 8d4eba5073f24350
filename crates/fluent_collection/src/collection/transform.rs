//! Mapping, merging and aggregation.

use std::fmt::Display;

use rand::Rng;
use rand::seq::SliceRandom;

use super::Collection;
use crate::key::Key;
use crate::truthy::Truthy;

impl<T: Clone> Collection<T> {
    /// Maps every `(value, key)` pair, keeping the original keys.
    #[must_use]
    pub fn map<U, F>(&self, mut f: F) -> Collection<U>
    where
        U: Clone,
        F: FnMut(&T, &Key) -> U,
    {
        Collection::of(self.iter().map(|(key, value)| (key.clone(), f(value, key))))
    }

    /// Like [`map`](Self::map) with a fallible mapper.
    ///
    /// # Errors
    ///
    /// Stops at the first error and returns it.
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<Collection<U>, E>
    where
        U: Clone,
        F: FnMut(&T, &Key) -> Result<U, E>,
    {
        let mut result = Collection::of_empty();
        for (key, value) in self {
            result.set(key.clone(), f(value, key)?);
        }
        Ok(result)
    }

    /// Maps every pair to a set of entries and unions them left to right.
    ///
    /// A key produced earlier is never overwritten by a later one.
    #[must_use]
    pub fn map_with_keys<U, K, I, F>(&self, mut f: F) -> Collection<U>
    where
        U: Clone,
        K: Into<Key>,
        I: IntoIterator<Item = (K, U)>,
        F: FnMut(&T, &Key) -> I,
    {
        let mut result = Collection::of_empty();
        for (key, value) in self {
            for (produced, mapped) in f(value, key) {
                let produced = produced.into();
                if !result.contains_key(&produced) {
                    result.set(produced, mapped);
                }
            }
        }
        result
    }

    /// Maps every pair into a plain vector.
    pub fn map_to_array<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&T, &Key) -> U,
    {
        self.iter().map(|(key, value)| f(value, key)).collect()
    }

    /// Concatenates `other` onto this collection.
    ///
    /// Integer keys from both sides are renumbered `0..`; a string key from
    /// `other` overwrites the same key from `self` in place.
    #[must_use]
    pub fn merge(&self, other: &Collection<T>) -> Self {
        merge_all([self, other])
    }

    /// Folds the values left to right.
    pub fn reduce<A, F>(&self, f: F, initial: A) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.values_iter().fold(initial, f)
    }

    /// Joins the string forms of the values with `separator`.
    #[must_use]
    pub fn implode(&self, separator: &str) -> String
    where
        T: Display,
    {
        self.values_iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Values in uniformly random order, keyed `0..n`.
    #[must_use]
    pub fn shuffle(&self) -> Self {
        self.shuffle_with(&mut rand::thread_rng())
    }

    /// Values in an order drawn from `rng`, keyed `0..n`.
    #[must_use]
    pub fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut values: Vec<T> = self.values_iter().cloned().collect();
        values.shuffle(rng);
        values.into_iter().collect()
    }

    /// Maps every pair and drops results that are not truthy.
    #[must_use]
    pub fn map_into<U, F>(&self, mut f: F) -> Collection<U>
    where
        U: Clone + Truthy,
        F: FnMut(&T, &Key) -> U,
    {
        let mut result = Collection::of_empty();
        for (key, value) in self {
            let mapped = f(value, key);
            if mapped.is_truthy() {
                result.set(key.clone(), mapped);
            }
        }
        result
    }

    /// Hands a copy of this collection to `factory`.
    pub fn into_shape<R, S>(&self, factory: S) -> R
    where
        S: FnOnce(Collection<T>) -> R,
    {
        factory(self.clone())
    }

    /// [`map_into`](Self::map_into) followed by `factory`.
    pub fn into_with<U, R, F, S>(&self, f: F, factory: S) -> R
    where
        U: Clone + Truthy,
        F: FnMut(&T, &Key) -> U,
        S: FnOnce(Collection<U>) -> R,
    {
        factory(self.map_into(f))
    }
}

impl<U: Clone> Collection<Collection<U>> {
    /// Merges the nested collections in order, one level deep.
    #[must_use]
    pub fn flatten(&self) -> Collection<U> {
        merge_all(self.values_iter())
    }
}

/// Merges `parts` in order with array-merge key rules.
pub(crate) fn merge_all<'a, T, I>(parts: I) -> Collection<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a Collection<T>>,
{
    let mut result = Collection::of_empty();
    let mut next = 0i64;
    for (key, value) in parts.into_iter().flat_map(Collection::iter) {
        match key {
            Key::Int(_) => {
                result.set(next, value.clone());
                next += 1;
            }
            Key::Str(_) => result.set(key.clone(), value.clone()),
        }
    }
    result
}
