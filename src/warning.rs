//! Non-fatal diagnostics raised while fitting and evaluating.
//!
//! A degenerate fit or evaluation still produces a result; the condition is
//! attached to that result as a warning and logged at `warn` level where it
//! is detected, so callers can decide how loudly to report it.

use crate::classification::Label;
use std::fmt;

/// Where in the pipeline a warning originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Vocabulary / IDF fitting.
    Vectorizer,
    /// Classifier fitting.
    Classifier,
    /// Metric computation.
    Evaluation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vectorizer => write!(f, "vectorizer"),
            Self::Classifier => write!(f, "classifier"),
            Self::Evaluation => write!(f, "evaluation"),
        }
    }
}

/// Degenerate conditions detected at fit time.
#[derive(Debug, Clone, PartialEq)]
pub enum FitWarning {
    /// The vectorizer saw no tokens at all; every transform yields the
    /// zero vector of dimension 0.
    EmptyVocabulary {
        /// Number of documents in the fitted corpus.
        documents: usize,
    },
    /// A class has no training examples; the model can never predict it.
    MissingClass {
        /// The absent class.
        label: Label,
    },
    /// The optimizer stopped at its iteration cap.
    NotConverged {
        /// Iterations performed.
        iterations: usize,
        /// Regularized loss at the last iteration.
        final_loss: f64,
    },
}

impl FitWarning {
    /// Pipeline stage that raised the warning.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::EmptyVocabulary { .. } => Stage::Vectorizer,
            Self::MissingClass { .. } | Self::NotConverged { .. } => Stage::Classifier,
        }
    }
}

impl fmt::Display for FitWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVocabulary { documents } => write!(
                f,
                "vocabulary is empty after fitting {documents} document(s); all feature vectors are zero"
            ),
            Self::MissingClass { label } => write!(
                f,
                "class '{label}' is absent from the training data; predictions collapse to the other class"
            ),
            Self::NotConverged {
                iterations,
                final_loss,
            } => write!(
                f,
                "did not fully converge after {iterations} iterations (loss = {final_loss:.6})"
            ),
        }
    }
}

/// Metric values that fell back to the declared zero-division policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluationWarning {
    /// No sample was predicted as `label`, so TP + FP = 0.
    UndefinedPrecision {
        /// Affected class.
        label: Label,
    },
    /// No sample of `label` exists in the true labels, so TP + FN = 0.
    UndefinedRecall {
        /// Affected class.
        label: Label,
    },
}

impl EvaluationWarning {
    /// Class the warning refers to.
    #[must_use]
    pub fn label(&self) -> Label {
        match self {
            Self::UndefinedPrecision { label } | Self::UndefinedRecall { label } => *label,
        }
    }

    /// Always [`Stage::Evaluation`].
    #[must_use]
    pub fn stage(&self) -> Stage {
        Stage::Evaluation
    }
}

impl fmt::Display for EvaluationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedPrecision { label } => write!(
                f,
                "precision for '{label}' is undefined (no predicted samples); zero-division policy applied"
            ),
            Self::UndefinedRecall { label } => write!(
                f,
                "recall for '{label}' is undefined (no true samples); zero-division policy applied"
            ),
        }
    }
}

/// A fit or evaluation warning tagged with the component that raised it.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineWarning {
    /// Raised while fitting the vectorizer or a classifier.
    Fit {
        /// `"vectorizer"` or the classifier name.
        source: &'static str,
        /// The warning itself.
        warning: FitWarning,
    },
    /// Raised while evaluating a classifier on the test partition.
    Evaluation {
        /// Classifier name.
        model: &'static str,
        /// The warning itself.
        warning: EvaluationWarning,
    },
}

impl PipelineWarning {
    /// Pipeline stage that raised the warning.
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::Fit { warning, .. } => warning.stage(),
            Self::Evaluation { warning, .. } => warning.stage(),
        }
    }
}

impl fmt::Display for PipelineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fit { source, warning } => write!(f, "[{source}] {warning}"),
            Self::Evaluation { model, warning } => write!(f, "[{model}] {warning}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_warning_stage() {
        assert_eq!(
            FitWarning::EmptyVocabulary { documents: 0 }.stage(),
            Stage::Vectorizer
        );
        assert_eq!(
            FitWarning::MissingClass {
                label: Label::Positive
            }
            .stage(),
            Stage::Classifier
        );
    }

    #[test]
    fn test_not_converged_display() {
        let w = FitWarning::NotConverged {
            iterations: 10,
            final_loss: 0.5,
        };
        let msg = w.to_string();
        assert!(msg.contains("did not fully converge"));
        assert!(msg.contains("10"));
    }

    #[test]
    fn test_evaluation_warning_label() {
        let w = EvaluationWarning::UndefinedPrecision {
            label: Label::Negative,
        };
        assert_eq!(w.label(), Label::Negative);
        assert!(w.to_string().contains("negative"));
        assert_eq!(w.stage(), Stage::Evaluation);
    }

    #[test]
    fn test_pipeline_warning_display() {
        let w = PipelineWarning::Fit {
            source: "logistic_regression",
            warning: FitWarning::MissingClass {
                label: Label::Negative,
            },
        };
        assert_eq!(w.stage(), Stage::Classifier);
        assert!(w.to_string().starts_with("[logistic_regression] class 'negative'"));
    }
}
