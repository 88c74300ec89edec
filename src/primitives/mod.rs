//! Core compute primitives.
//!
//! Feature vectors produced by the vectorizer are sparse: a review touches a
//! handful of vocabulary entries out of the whole fitted vocabulary.

mod sparse;

pub use sparse::SparseVector;
