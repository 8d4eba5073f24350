//! Ordered, key-addressable collections with a fluent transformation API.
//!
//! This crate provides:
//! - [`Collection`] - An insertion-ordered mapping from [`Key`] to values
//! - [`Key`] - Integer or string keys
//! - [`Value`] - A dynamic value for heterogeneous and tuple-shaped data
//! - [`Truthy`] - The emptiness predicate used by predicate-less filtering
//! - [`Error`] - Rich error types with context
//!
//! ```
//! use fluent_collection::{Collection, Key};
//!
//! let scores = Collection::of([("ann", 7), ("bob", 3), ("cat", 9)]);
//! let high = scores.filter(|score, _| *score > 5);
//! assert_eq!(high.keys().implode(","), "ann,cat");
//! assert_eq!(high.get("cat"), Some(&9));
//! assert_eq!(scores.slice(-1, None).to_array(), vec![(Key::from("cat"), 9)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collection;
pub mod error;
pub mod key;
pub mod truthy;
pub mod types;
pub mod value;

pub use collection::Collection;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use key::Key;
pub use truthy::Truthy;
pub use types::Type;
pub use value::Value;
