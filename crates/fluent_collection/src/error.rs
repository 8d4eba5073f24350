//! Error types for collection operations.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::key::Key;
use crate::types::Type;

/// Result type for fallible collection operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for collection operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an empty collection error for the named operation.
    #[must_use]
    pub fn empty_collection(operation: &'static str) -> Self {
        Self::new(ErrorKind::EmptyCollection { operation })
    }

    /// Creates an error for an element that should have been a sequence.
    #[must_use]
    pub fn not_a_sequence(key: Key, actual: Type) -> Self {
        Self::new(ErrorKind::NotASequence { key, actual })
    }

    /// Creates an error for an element that should have been a tuple.
    #[must_use]
    pub fn not_a_tuple(key: Key, actual: Type) -> Self {
        Self::new(ErrorKind::NotATuple { key, actual })
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>, key: Key) -> Self {
        Self::new(ErrorKind::MissingField {
            field: field.into(),
            key,
        })
    }

    /// Creates an illegal key error.
    #[must_use]
    pub fn illegal_key(actual: Type) -> Self {
        Self::new(ErrorKind::IllegalKey(actual))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An operation that needs at least one element ran on an empty collection.
    #[error("{operation} called on an empty collection")]
    EmptyCollection {
        /// The operation that was called.
        operation: &'static str,
    },

    /// An element was expected to be a sequence.
    #[error("element at key {key} is not a sequence (got {actual})")]
    NotASequence {
        /// Key of the offending element.
        key: Key,
        /// The actual type encountered.
        actual: Type,
    },

    /// An element was expected to be a tuple.
    #[error("element at key {key} is not a tuple (got {actual})")]
    NotATuple {
        /// Key of the offending element.
        key: Key,
        /// The actual type encountered.
        actual: Type,
    },

    /// A tuple did not have the requested field.
    #[error("field {field:?} missing from tuple at key {key}")]
    MissingField {
        /// The field that was requested.
        field: String,
        /// Key of the tuple in the collection.
        key: Key,
    },

    /// A value of this type cannot be used as a key.
    #[error("illegal key type: {0}")]
    IllegalKey(Type),

    /// Appending failed because the next integer key is not available.
    #[error("cannot append: the next integer key is already occupied")]
    NextElementOccupied,
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the collection operation that failed.
    pub operation: Option<&'static str>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operation {
            Some(operation) => write!(f, "in {operation}"),
            None => Ok(()),
        }
    }
}
