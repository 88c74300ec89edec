//! Binary sentiment classifiers over TF-IDF feature vectors.
//!
//! This module implements:
//! - Multinomial Naive Bayes ([`MultinomialNB`]) for probabilistic classification
//! - Logistic Regression ([`LogisticRegression`]) for linear classification
//!
//! Fitting is split from prediction: a classifier holds hyperparameters only
//! and [`Classifier::fit`] returns an immutable trained model. Orchestration
//! code that must handle either family uses [`ClassifierKind`] and
//! [`FittedClassifier`], which dispatch to the concrete types.
//!
//! # Example
//!
//! ```
//! use sentir::classification::{Classifier, Label, MultinomialNB, TrainedModel};
//! use sentir::primitives::SparseVector;
//!
//! let x = vec![
//!     SparseVector::from_dense(&[1.0, 0.0]).expect("finite values"),
//!     SparseVector::from_dense(&[0.9, 0.1]).expect("finite values"),
//!     SparseVector::from_dense(&[0.0, 1.0]).expect("finite values"),
//!     SparseVector::from_dense(&[0.1, 0.9]).expect("finite values"),
//! ];
//! let y = vec![Label::Positive, Label::Positive, Label::Negative, Label::Negative];
//!
//! let model = MultinomialNB::new().fit(&x, &y).expect("valid training data");
//! let query = SparseVector::from_dense(&[1.0, 0.0]).expect("finite values");
//! assert_eq!(model.predict(&query).expect("same dimension"), Label::Positive);
//! ```

mod label;
mod logistic;
mod naive_bayes;

pub use label::Label;
pub use logistic::{LogisticModel, LogisticRegression};
pub use naive_bayes::{MultinomialNB, NaiveBayesModel};

use crate::error::{Result, SentirError};
use crate::primitives::SparseVector;
use crate::warning::FitWarning;

/// An untrained classifier: hyperparameters plus a fitting procedure.
pub trait Classifier {
    /// Model produced by fitting.
    type Model: TrainedModel;

    /// Short human-readable name used in reports.
    fn name(&self) -> &'static str;

    /// Fits a model to labeled feature vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is empty, `x` and `y` differ in length, rows
    /// differ in dimension, or a hyperparameter is out of range.
    fn fit(&self, x: &[SparseVector], y: &[Label]) -> Result<Self::Model>;
}

/// A fitted model. Parameters never change after fitting.
pub trait TrainedModel {
    /// Feature dimension the model was fitted on.
    fn dimension(&self) -> usize;

    /// Probability that `x` is [`Label::Positive`].
    ///
    /// # Errors
    ///
    /// Returns an error if `x` has a different dimension than the model.
    fn predict_proba(&self, x: &SparseVector) -> Result<f64>;

    /// Predicted label for `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` has a different dimension than the model.
    fn predict(&self, x: &SparseVector) -> Result<Label>;

    /// Predicted labels for every row, in order.
    ///
    /// # Errors
    ///
    /// Returns an error on the first row with a mismatched dimension.
    fn predict_batch(&self, x: &[SparseVector]) -> Result<Vec<Label>> {
        x.iter().map(|row| self.predict(row)).collect()
    }

    /// Degenerate-fit diagnostics recorded while fitting.
    fn warnings(&self) -> &[FitWarning];
}

/// Either classifier family, chosen at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierKind {
    /// Multinomial Naive Bayes.
    NaiveBayes(MultinomialNB),
    /// Logistic regression.
    Logistic(LogisticRegression),
}

impl Classifier for ClassifierKind {
    type Model = FittedClassifier;

    fn name(&self) -> &'static str {
        match self {
            Self::NaiveBayes(nb) => nb.name(),
            Self::Logistic(lr) => lr.name(),
        }
    }

    fn fit(&self, x: &[SparseVector], y: &[Label]) -> Result<FittedClassifier> {
        match self {
            Self::NaiveBayes(nb) => nb.fit(x, y).map(FittedClassifier::Probabilistic),
            Self::Logistic(lr) => lr.fit(x, y).map(FittedClassifier::Linear),
        }
    }
}

impl From<MultinomialNB> for ClassifierKind {
    fn from(nb: MultinomialNB) -> Self {
        Self::NaiveBayes(nb)
    }
}

impl From<LogisticRegression> for ClassifierKind {
    fn from(lr: LogisticRegression) -> Self {
        Self::Logistic(lr)
    }
}

/// A trained model of either family.
#[derive(Debug, Clone)]
pub enum FittedClassifier {
    /// Trained Naive Bayes model.
    Probabilistic(NaiveBayesModel),
    /// Trained logistic regression model.
    Linear(LogisticModel),
}

impl TrainedModel for FittedClassifier {
    fn dimension(&self) -> usize {
        match self {
            Self::Probabilistic(m) => m.dimension(),
            Self::Linear(m) => m.dimension(),
        }
    }

    fn predict_proba(&self, x: &SparseVector) -> Result<f64> {
        match self {
            Self::Probabilistic(m) => m.predict_proba(x),
            Self::Linear(m) => m.predict_proba(x),
        }
    }

    fn predict(&self, x: &SparseVector) -> Result<Label> {
        match self {
            Self::Probabilistic(m) => m.predict(x),
            Self::Linear(m) => m.predict(x),
        }
    }

    fn warnings(&self) -> &[FitWarning] {
        match self {
            Self::Probabilistic(m) => m.warnings(),
            Self::Linear(m) => m.warnings(),
        }
    }
}

/// Checks the shared fit preconditions and returns the feature dimension.
fn validate_training(x: &[SparseVector], y: &[Label]) -> Result<usize> {
    if x.is_empty() {
        return Err(SentirError::empty_input("training set"));
    }
    if x.len() != y.len() {
        return Err(SentirError::dimension_mismatch(
            "labels per training row",
            x.len(),
            y.len(),
        ));
    }

    let dim = x[0].dim();
    if let Some(row) = x.iter().find(|row| row.dim() != dim) {
        return Err(SentirError::dimension_mismatch("training row", dim, row.dim()));
    }
    Ok(dim)
}

/// Rejects a query vector whose dimension differs from the model's.
fn check_dimension(expected: usize, x: &SparseVector) -> Result<()> {
    if x.dim() == expected {
        Ok(())
    } else {
        Err(SentirError::dimension_mismatch("query vector", expected, x.dim()))
    }
}

/// Number of training rows per class, indexed by [`Label::index`].
fn class_counts(y: &[Label]) -> [usize; 2] {
    let mut counts = [0; 2];
    for label in y {
        counts[label.index()] += 1;
    }
    counts
}

/// One [`FitWarning::MissingClass`] per class without examples, logged as
/// it is raised.
fn missing_class_warnings(model: &str, counts: [usize; 2]) -> Vec<FitWarning> {
    Label::ALL
        .into_iter()
        .filter(|label| counts[label.index()] == 0)
        .map(|label| {
            let warning = FitWarning::MissingClass { label };
            tracing::warn!(stage = %warning.stage(), model, "{warning}");
            warning
        })
        .collect()
}
