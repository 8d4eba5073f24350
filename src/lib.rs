//! Fluent - ordered collections with a fluent transformation API
//!
//! This crate re-exports the collection library for convenient access.
//! For detailed documentation, see [`fluent_collection`].

pub use fluent_collection as collection;
pub use fluent_collection::{Collection, Error, ErrorKind, Key, Result, Truthy, Type, Value};
