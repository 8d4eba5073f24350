//! Operations on collections of tuples.
//!
//! A tuple is a [`Value::Map`]: a nested collection addressed by field name.
//! These operations only exist for `Collection<Value>`, since they need to
//! look inside elements.

use super::Collection;
use super::transform::merge_all;
use crate::error::{Error, ErrorContext, Result};
use crate::value::Value;

impl Collection<Value> {
    /// Keeps only tuple elements.
    #[must_use]
    pub fn tuples(&self) -> Self {
        self.filter(|value, _| value.is_tuple())
    }

    /// Keeps tuples whose `field` renders as a non-empty string.
    ///
    /// A tuple without `field` has no identity and is dropped.
    #[must_use]
    pub fn tuples_identity(&self, field: &str) -> Self {
        self.tuples().filter(|tuple, _| {
            tuple
                .field(field)
                .is_some_and(|id| !id.to_string().is_empty())
        })
    }

    /// Keeps one tuple per identifier, keyed `0..n`.
    ///
    /// When identifiers repeat, the last tuple replaces the earlier ones at
    /// the position of the first.
    ///
    /// # Errors
    ///
    /// Returns `IllegalKey` if an identifier is itself a map.
    pub fn tuples_unique(&self, field: &str) -> Result<Self> {
        let mut by_id = Collection::of_empty();
        for (key, tuple) in &self.tuples_identity(field) {
            let Some(id) = tuple.field(field) else {
                continue;
            };
            let id = id.to_key().map_err(|err| {
                tracing::debug!(operation = "tuples_unique", key = %key, field, "identifier is not a valid key");
                err.with_context(ErrorContext::new().with_operation("tuples_unique"))
            })?;
            by_id.set(id, tuple.clone());
        }
        Ok(by_id.values())
    }

    /// Extracts `field` from every tuple, keeping the original keys.
    ///
    /// # Errors
    ///
    /// Returns `NotATuple` for a scalar element and `MissingField` for a
    /// tuple without `field`.
    pub fn col(&self, field: &str) -> Result<Self> {
        self.try_map(|value, key| {
            let Some(tuple) = value.as_map() else {
                tracing::debug!(operation = "col", key = %key, "element is not a tuple");
                return Err(Error::not_a_tuple(key.clone(), value.value_type()));
            };
            tuple.get(field).cloned().ok_or_else(|| {
                tracing::debug!(operation = "col", key = %key, field, "tuple field missing");
                Error::missing_field(field, key.clone())
            })
        })
        .map_err(|err| err.with_context(ErrorContext::new().with_operation("col")))
    }

    /// Concatenates the elements, one level deep.
    ///
    /// Elements are merged in order with the same key rules as
    /// [`merge`](Collection::merge).
    ///
    /// # Errors
    ///
    /// Returns `NotASequence` if any element is not a map.
    pub fn flat(&self) -> Result<Self> {
        let mut parts = Vec::with_capacity(self.count());
        for (key, value) in self {
            let Some(part) = value.as_map() else {
                tracing::debug!(operation = "flat", key = %key, "element is not a sequence");
                return Err(Error::not_a_sequence(key.clone(), value.value_type())
                    .with_context(ErrorContext::new().with_operation("flat")));
            };
            parts.push(part);
        }
        Ok(merge_all(parts))
    }
}
