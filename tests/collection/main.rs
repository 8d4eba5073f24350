//! Integration tests for Collection
//!
//! Tests construction, queries, shaping, transforms, tuple operations and
//! the algebraic properties of the fluent API.

mod access;
mod queries;
mod tuples;
