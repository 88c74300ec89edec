//! Model selection utilities: seeded train/test splitting.
//!
//! Splits operate on row indices so the same partition can be applied to
//! texts, feature vectors and labels alike.
//!
//! # Example
//!
//! ```
//! use sentir::model_selection::train_test_split;
//!
//! let split = train_test_split(20, 0.25, 42).expect("valid split");
//! assert_eq!(split.test.len(), 5);
//! assert_eq!(split.train.len(), 15);
//! ```

use crate::error::{Result, SentirError};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

/// Slack for `n · test_size` landing a hair above an integer, as with
/// `10 · 0.3`.
const SIZE_EPSILON: f64 = 1e-9;

/// Disjoint train/test partition of `0..n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Split {
    /// Training row indices, in shuffled order.
    pub train: Vec<usize>,
    /// Test row indices, in shuffled order.
    pub test: Vec<usize>,
}

impl Split {
    /// Total number of rows covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len()
    }

    /// True when the split covers no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Items at the training indices, in split order.
    #[must_use]
    pub fn select_train<T: Clone>(&self, items: &[T]) -> Vec<T> {
        select(items, &self.train)
    }

    /// Items at the test indices, in split order.
    #[must_use]
    pub fn select_test<T: Clone>(&self, items: &[T]) -> Vec<T> {
        select(items, &self.test)
    }
}

/// Number of test rows: `ceil(n · test_size)`.
///
/// # Errors
///
/// Returns an error unless `0 < test_size < 1` and both partitions end up
/// non-empty.
pub fn test_count(n_samples: usize, test_size: f64) -> Result<usize> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(SentirError::InvalidSplit(format!(
            "test_size must be between 0 and 1, got {test_size}"
        )));
    }

    let n_test = (n_samples as f64 * test_size - SIZE_EPSILON).ceil().max(0.0) as usize;
    let n_train = n_samples.saturating_sub(n_test);

    if n_test == 0 || n_train == 0 {
        return Err(SentirError::InvalidSplit(format!(
            "split would result in empty train or test set (n_samples={n_samples}, n_train={n_train}, n_test={n_test})"
        )));
    }
    Ok(n_test)
}

/// Shuffle `0..n_samples` with a seeded RNG and split off
/// `ceil(n_samples · test_size)` rows for testing.
///
/// The same `(n_samples, test_size, random_state)` always yields the same
/// partition.
///
/// # Errors
///
/// Returns [`SentirError::InvalidSplit`] if `test_size` is outside `(0, 1)`
/// or either partition would be empty.
pub fn train_test_split(n_samples: usize, test_size: f64, random_state: u64) -> Result<Split> {
    let n_test = test_count(n_samples, test_size)?;
    let n_train = n_samples - n_test;

    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = rand::rngs::StdRng::seed_from_u64(random_state);
    indices.shuffle(&mut rng);

    let test = indices.split_off(n_train);
    tracing::debug!(n_train, n_test, random_state, "split rows");

    Ok(Split {
        train: indices,
        test,
    })
}

/// Items at `indices`, in index order given.
fn select<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| items[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_train_test_split_sizes() {
        let split = train_test_split(20, 0.25, 42).expect("valid split");
        assert_eq!(split.test.len(), 5);
        assert_eq!(split.train.len(), 15);
        assert_eq!(split.len(), 20);
    }

    #[test]
    fn test_ceil_rounding() {
        assert_eq!(test_count(10, 0.25).expect("valid"), 3);
        assert_eq!(test_count(10, 0.3).expect("valid"), 3);
        assert_eq!(test_count(3, 0.1).expect("valid"), 1);
    }

    #[test]
    fn test_partition_is_disjoint_and_complete() {
        let split = train_test_split(17, 0.3, 7).expect("valid split");
        let train: HashSet<_> = split.train.iter().copied().collect();
        let test: HashSet<_> = split.test.iter().copied().collect();
        assert!(train.is_disjoint(&test));
        let all: HashSet<_> = train.union(&test).copied().collect();
        assert_eq!(all, (0..17).collect());
    }

    #[test]
    fn test_train_test_split_reproducibility() {
        let a = train_test_split(50, 0.2, 42).expect("valid split");
        let b = train_test_split(50, 0.2, 42).expect("valid split");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = train_test_split(50, 0.2, 1).expect("valid split");
        let b = train_test_split(50, 0.2, 2).expect("valid split");
        assert_ne!(a, b);
    }

    #[test]
    fn test_invalid_test_size() {
        for size in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(matches!(
                train_test_split(10, size, 0),
                Err(SentirError::InvalidSplit(_))
            ));
        }
    }

    #[test]
    fn test_too_few_samples() {
        assert!(train_test_split(1, 0.5, 0).is_err());
        assert!(train_test_split(0, 0.5, 0).is_err());
        assert!(train_test_split(2, 0.5, 0).is_ok());
    }

    #[test]
    fn test_select() {
        let split = Split {
            train: vec![2, 0],
            test: vec![1],
        };
        let items = ["a", "b", "c"];
        assert_eq!(split.select_train(&items), vec!["c", "a"]);
        assert_eq!(split.select_test(&items), vec!["b"]);
    }
}
