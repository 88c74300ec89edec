//! Text vectorization: vocabulary fitting and TF-IDF feature vectors.
//!
//! Fitting is split from use. [`TfidfVectorizer`] only holds settings; its
//! `fit` returns a [`FittedTfidf`] whose vocabulary and IDF weights can no
//! longer change, so every vector it produces has the same dimension.
//!
//! # Examples
//!
//! ```
//! use sentir::text::vectorize::TfidfVectorizer;
//!
//! let corpus = vec!["product great", "product terrible", "battery great"];
//! let fitted = TfidfVectorizer::new().fit(&corpus).expect("fit should succeed");
//!
//! assert_eq!(fitted.dimension(), 4);
//! let v = fitted.transform("great unknownword");
//! assert_eq!(v.dim(), 4);
//! assert_eq!(v.nnz(), 1);
//! ```

mod tfidf_vectorizer;

pub use tfidf_vectorizer::{FittedTfidf, Norm, TfidfVectorizer};

use std::collections::HashMap;

/// Mapping from term to dense feature index.
///
/// Indices are `0..len()`, assigned in sorted term order so the mapping is
/// reproducible for a given set of terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    /// Terms in index order.
    terms: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from terms in any order; duplicates are collapsed.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        terms.sort_unstable();
        terms.dedup();

        let index = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        Self { terms, index }
    }

    /// Feature index of `term`, if it was seen during fitting.
    #[must_use]
    pub fn get(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Term stored at `index`.
    #[must_use]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    /// True if `term` has an index.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.index.contains_key(term)
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when no term was learned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate `(term, index)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.as_str(), idx))
    }
}

#[cfg(test)]
mod tests;
