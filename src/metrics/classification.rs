//! Classification metrics for evaluating sentiment predictions.
//!
//! Provides accuracy, per-class precision, recall, F1-score, their macro and
//! support-weighted averages, and the confusion matrix for the two sentiment
//! classes.
//!
//! Undefined ratios never produce NaN. When a class is never predicted its
//! precision is undefined (0/0); when it never occurs its recall is. Both
//! take the value chosen by [`ZeroDivision`] and are recorded as
//! [`EvaluationWarning`]s on the report.

use crate::classification::Label;
use crate::error::{Result, SentirError};
use crate::warning::EvaluationWarning;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value substituted for a 0/0 precision or recall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroDivision {
    /// Report 0.0.
    #[default]
    Zero,
    /// Report 1.0.
    One,
}

impl ZeroDivision {
    fn value(self) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::One => 1.0,
        }
    }
}

/// Precision, recall, F1 and support for one class.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClassMetrics {
    /// TP / (TP + FP)
    pub precision: f64,
    /// TP / (TP + FN)
    pub recall: f64,
    /// Harmonic mean of precision and recall
    pub f1: f64,
    /// Number of true instances of the class
    pub support: usize,
}

/// Averaged precision, recall and F1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AveragedMetrics {
    /// Averaged precision
    pub precision: f64,
    /// Averaged recall
    pub recall: f64,
    /// Averaged F1
    pub f1: f64,
}

/// Evaluation of one set of predictions against ground truth.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClassificationReport {
    accuracy: f64,
    per_class: [ClassMetrics; 2],
    macro_avg: AveragedMetrics,
    weighted_avg: AveragedMetrics,
    confusion: [[usize; 2]; 2],
    #[serde(skip)]
    warnings: Vec<EvaluationWarning>,
}

impl ClassificationReport {
    /// Fraction of correct predictions.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Metrics of one class.
    #[must_use]
    pub fn class(&self, label: Label) -> &ClassMetrics {
        &self.per_class[label.index()]
    }

    /// Unweighted mean over both classes.
    #[must_use]
    pub fn macro_avg(&self) -> &AveragedMetrics {
        &self.macro_avg
    }

    /// Mean over both classes weighted by support.
    #[must_use]
    pub fn weighted_avg(&self) -> &AveragedMetrics {
        &self.weighted_avg
    }

    /// Confusion matrix indexed `[true][predicted]` by [`Label::index`].
    #[must_use]
    pub fn confusion_matrix(&self) -> [[usize; 2]; 2] {
        self.confusion
    }

    /// Number of evaluated samples.
    #[must_use]
    pub fn n_samples(&self) -> usize {
        self.per_class.iter().map(|m| m.support).sum()
    }

    /// Undefined-metric diagnostics.
    #[must_use]
    pub fn warnings(&self) -> &[EvaluationWarning] {
        &self.warnings
    }

    /// True if any metric fell back to the zero-division value.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>14} {:>10} {:>10} {:>10} {:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for label in Label::ALL {
            let m = self.class(label);
            writeln!(
                f,
                "{:>14} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                label.as_str(),
                m.precision,
                m.recall,
                m.f1,
                m.support
            )?;
        }
        writeln!(f)?;
        let n = self.n_samples();
        writeln!(
            f,
            "{:>14} {:>10} {:>10} {:>10.2} {:>10}",
            "accuracy", "", "", self.accuracy, n
        )?;
        for (name, avg) in [("macro avg", &self.macro_avg), ("weighted avg", &self.weighted_avg)] {
            writeln!(
                f,
                "{:>14} {:>10.2} {:>10.2} {:>10.2} {:>10}",
                name, avg.precision, avg.recall, avg.f1, n
            )?;
        }
        Ok(())
    }
}

/// Evaluate predictions with the default [`ZeroDivision::Zero`] policy.
///
/// # Errors
///
/// Returns an error if the inputs are empty or differ in length.
///
/// # Examples
///
/// ```
/// use sentir::classification::Label::{Negative, Positive};
/// use sentir::metrics::classification::evaluate;
///
/// let y_true = vec![Positive, Negative, Positive, Negative];
/// let y_pred = vec![Positive, Positive, Negative, Negative];
/// let report = evaluate(&y_true, &y_pred).expect("same non-zero length");
///
/// assert!((report.accuracy() - 0.5).abs() < 1e-12);
/// assert!((report.class(Positive).f1 - 0.5).abs() < 1e-12);
/// assert!(!report.is_degenerate());
/// ```
pub fn evaluate(y_true: &[Label], y_pred: &[Label]) -> Result<ClassificationReport> {
    evaluate_with(y_true, y_pred, ZeroDivision::default())
}

/// Evaluate predictions with an explicit zero-division policy.
///
/// # Errors
///
/// Returns an error if the inputs are empty or differ in length.
pub fn evaluate_with(
    y_true: &[Label],
    y_pred: &[Label],
    zero_division: ZeroDivision,
) -> Result<ClassificationReport> {
    if y_true.is_empty() {
        return Err(SentirError::empty_input("evaluation labels"));
    }
    if y_true.len() != y_pred.len() {
        return Err(SentirError::dimension_mismatch(
            "predictions per true label",
            y_true.len(),
            y_pred.len(),
        ));
    }

    let confusion = confusion_matrix(y_true, y_pred);
    let n = y_true.len();
    let correct = confusion[0][0] + confusion[1][1];
    let accuracy = correct as f64 / n as f64;

    let mut warnings = Vec::new();
    let per_class = Label::ALL.map(|label| {
        let c = label.index();
        let o = label.other().index();
        let tp = confusion[c][c];
        let fp = confusion[o][c];
        let fn_count = confusion[c][o];

        let precision = ratio(tp, tp + fp).unwrap_or_else(|| {
            warnings.push(EvaluationWarning::UndefinedPrecision { label });
            zero_division.value()
        });
        let recall = ratio(tp, tp + fn_count).unwrap_or_else(|| {
            warnings.push(EvaluationWarning::UndefinedRecall { label });
            zero_division.value()
        });

        ClassMetrics {
            precision,
            recall,
            f1: f1_from_prec_rec(precision, recall),
            support: tp + fn_count,
        }
    });

    for warning in &warnings {
        tracing::warn!(stage = %warning.stage(), "{warning}");
    }

    let macro_avg = AveragedMetrics {
        precision: per_class.iter().map(|m| m.precision).sum::<f64>() / 2.0,
        recall: per_class.iter().map(|m| m.recall).sum::<f64>() / 2.0,
        f1: per_class.iter().map(|m| m.f1).sum::<f64>() / 2.0,
    };
    let weighted = |metric: fn(&ClassMetrics) -> f64| {
        per_class
            .iter()
            .map(|m| metric(m) * m.support as f64)
            .sum::<f64>()
            / n as f64
    };
    let weighted_avg = AveragedMetrics {
        precision: weighted(|m| m.precision),
        recall: weighted(|m| m.recall),
        f1: weighted(|m| m.f1),
    };

    Ok(ClassificationReport {
        accuracy,
        per_class,
        macro_avg,
        weighted_avg,
        confusion,
        warnings,
    })
}

/// Confusion matrix indexed `[true][predicted]`; pairs beyond the shorter
/// input are ignored.
#[must_use]
pub fn confusion_matrix(y_true: &[Label], y_pred: &[Label]) -> [[usize; 2]; 2] {
    let mut matrix = [[0; 2]; 2];
    for (t, p) in y_true.iter().zip(y_pred) {
        matrix[t.index()][p.index()] += 1;
    }
    matrix
}

/// `num / den`, or `None` when `den` is zero.
fn ratio(num: usize, den: usize) -> Option<f64> {
    (den > 0).then(|| num as f64 / den as f64)
}

fn f1_from_prec_rec(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    }
}

#[cfg(test)]
#[path = "classification_tests.rs"]
mod tests;
