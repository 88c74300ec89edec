//! Sparse feature vector.

use crate::error::{Result, SentirError};

/// Sparse vector with a fixed logical dimension.
///
/// Stores only non-zero entries, with strictly increasing indices.
///
/// # Examples
///
/// ```
/// use sentir::primitives::SparseVector;
///
/// let v = SparseVector::from_pairs(5, vec![(3, 2.0), (1, 0.5)]).expect("valid pairs");
/// assert_eq!(v.dim(), 5);
/// assert_eq!(v.nnz(), 2);
/// assert_eq!(v.get(3), 2.0);
/// assert_eq!(v.get(0), 0.0);
/// assert_eq!(v.to_dense(), vec![0.0, 0.5, 0.0, 2.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    dim: usize,
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// All-zero vector of the given dimension.
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Build from `(index, value)` pairs in any order.
    ///
    /// Duplicate indices are summed and explicit zeros are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if an index is `>= dim` or a value is not finite.
    pub fn from_pairs(dim: usize, mut pairs: Vec<(usize, f64)>) -> Result<Self> {
        pairs.sort_by_key(|&(idx, _)| idx);

        let mut indices = Vec::with_capacity(pairs.len());
        let mut values: Vec<f64> = Vec::with_capacity(pairs.len());

        for (idx, value) in pairs {
            if idx >= dim {
                return Err(SentirError::InvalidInput(format!(
                    "index {idx} out of bounds for dimension {dim}"
                )));
            }
            if !value.is_finite() {
                return Err(SentirError::InvalidInput(format!(
                    "non-finite value {value} at index {idx}"
                )));
            }
            if indices.last() == Some(&idx) {
                if let Some(last) = values.last_mut() {
                    *last += value;
                }
            } else {
                indices.push(idx);
                values.push(value);
            }
        }

        let (indices, values): (Vec<usize>, Vec<f64>) = indices
            .into_iter()
            .zip(values)
            .filter(|&(_, v)| v != 0.0)
            .unzip();

        Ok(Self {
            dim,
            indices,
            values,
        })
    }

    /// Build from parts already known to be valid: strictly increasing
    /// indices below `dim`, finite non-zero values.
    pub(crate) fn from_sorted_parts(dim: usize, indices: Vec<usize>, values: Vec<f64>) -> Self {
        debug_assert_eq!(indices.len(), values.len());
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(indices.last().map_or(true, |&i| i < dim));
        Self {
            dim,
            indices,
            values,
        }
    }

    /// Build from a dense slice, keeping non-zero entries.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is not finite.
    pub fn from_dense(dense: &[f64]) -> Result<Self> {
        let pairs = dense
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, v)| v != 0.0)
            .collect();
        Self::from_pairs(dense.len(), pairs)
    }

    /// Logical dimension.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored (non-zero) entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// True when every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    /// Value at `index` (zero when not stored or out of range).
    #[must_use]
    pub fn get(&self, index: usize) -> f64 {
        self.indices
            .binary_search(&index)
            .map_or(0.0, |pos| self.values[pos])
    }

    /// Iterate over stored `(index, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Stored indices.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Stored values, aligned with [`SparseVector::indices`].
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Dot product with a dense weight vector of the same dimension.
    ///
    /// # Errors
    ///
    /// Returns an error on dimension mismatch.
    pub fn dot(&self, dense: &[f64]) -> Result<f64> {
        if dense.len() != self.dim {
            return Err(SentirError::dimension_mismatch(
                "dense length",
                self.dim,
                dense.len(),
            ));
        }
        Ok(self.iter().map(|(i, v)| v * dense[i]).sum())
    }

    /// Euclidean norm.
    #[must_use]
    pub fn l2_norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Scale to unit Euclidean norm; the zero vector is left unchanged.
    pub fn normalize_l2(&mut self) {
        let norm = self.l2_norm();
        if norm > 0.0 {
            for v in &mut self.values {
                *v /= norm;
            }
        }
    }

    /// True when no stored value is negative.
    #[must_use]
    pub fn is_non_negative(&self) -> bool {
        self.values.iter().all(|&v| v >= 0.0)
    }

    /// Dense copy.
    #[must_use]
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dim];
        for (i, v) in self.iter() {
            dense[i] = v;
        }
        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let v = SparseVector::zeros(4);
        assert_eq!(v.dim(), 4);
        assert!(v.is_zero());
        assert_eq!(v.to_dense(), vec![0.0; 4]);
    }

    #[test]
    fn test_from_pairs_sorts_and_merges() {
        let v = SparseVector::from_pairs(4, vec![(2, 1.0), (0, 1.0), (2, 0.5)]).expect("valid");
        assert_eq!(v.indices(), &[0, 2]);
        assert_eq!(v.values(), &[1.0, 1.5]);
    }

    #[test]
    fn test_from_pairs_drops_zeros() {
        let v = SparseVector::from_pairs(3, vec![(0, 0.0), (1, 2.0)]).expect("valid");
        assert_eq!(v.nnz(), 1);
    }

    #[test]
    fn test_from_pairs_out_of_bounds() {
        let result = SparseVector::from_pairs(2, vec![(2, 1.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_pairs_rejects_nan() {
        let result = SparseVector::from_pairs(2, vec![(0, f64::NAN)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dot() {
        let v = SparseVector::from_dense(&[1.0, 0.0, 2.0]).expect("valid");
        let dot = v.dot(&[3.0, 100.0, 0.5]).expect("same dim");
        assert!((dot - 4.0).abs() < 1e-12);
        assert!(v.dot(&[1.0]).is_err());
    }

    #[test]
    fn test_normalize_l2() {
        let mut v = SparseVector::from_dense(&[3.0, 4.0]).expect("valid");
        v.normalize_l2();
        assert!((v.l2_norm() - 1.0).abs() < 1e-12);
        assert!((v.get(0) - 0.6).abs() < 1e-12);

        let mut z = SparseVector::zeros(3);
        z.normalize_l2();
        assert!(z.is_zero());
    }
}
