//! Evaluation metrics for sentiment classifiers.
//!
//! Binary classification metrics (accuracy, precision, recall, F1-score,
//! confusion matrix) collected into a [`ClassificationReport`].

pub mod classification;

pub use classification::{
    confusion_matrix, evaluate, evaluate_with, AveragedMetrics, ClassMetrics,
    ClassificationReport, ZeroDivision,
};
