use super::{
    check_dimension, class_counts, missing_class_warnings, validate_training, Classifier, Label,
    TrainedModel,
};
use crate::error::{Result, SentirError};
use crate::primitives::SparseVector;
use crate::warning::FitWarning;
use serde::{Deserialize, Serialize};

/// Multinomial Naive Bayes classifier.
///
/// Treats each feature weight as a (fractional) term count and models each
/// class as a multinomial over features, with additive (Laplace/Lidstone)
/// smoothing:
///
/// ```text
/// log P(c)     = ln(n_c / n)
/// log P(j | c) = ln((count_cj + α) / (Σ_j count_cj + α · n_features))
/// score(c | x) = log P(c) + Σ_j x_j · log P(j | c)
/// ```
///
/// A class without training rows gets a log prior of `-∞` and can never be
/// predicted. Equal scores resolve to [`Label::Negative`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultinomialNB {
    /// Additive smoothing parameter.
    alpha: f64,
}

impl MultinomialNB {
    /// Creates a classifier with `alpha = 1.0` (Laplace smoothing).
    #[must_use]
    pub fn new() -> Self {
        Self { alpha: 1.0 }
    }

    /// Sets the smoothing parameter.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Smoothing parameter.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Check hyperparameters.
    ///
    /// # Errors
    ///
    /// Returns an error unless `alpha` is positive and finite.
    pub fn validate(&self) -> Result<()> {
        if self.alpha.is_finite() && self.alpha > 0.0 {
            Ok(())
        } else {
            Err(SentirError::hyperparameter("alpha", self.alpha, "> 0 and finite"))
        }
    }
}

impl Default for MultinomialNB {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for MultinomialNB {
    type Model = NaiveBayesModel;

    fn name(&self) -> &'static str {
        "naive_bayes"
    }

    /// Computes class log priors and per-feature log likelihoods.
    ///
    /// # Errors
    ///
    /// Besides the shared input checks, rejects `alpha <= 0` and rows with
    /// negative weights.
    fn fit(&self, x: &[SparseVector], y: &[Label]) -> Result<NaiveBayesModel> {
        self.validate()?;
        let n_features = validate_training(x, y)?;
        if let Some(pos) = x.iter().position(|row| !row.is_non_negative()) {
            return Err(SentirError::InvalidInput(format!(
                "multinomial naive bayes needs non-negative feature weights; row {pos} has a negative weight"
            )));
        }

        let counts = class_counts(y);
        let n = y.len() as f64;

        let mut feature_counts = [vec![0.0; n_features], vec![0.0; n_features]];
        for (row, label) in x.iter().zip(y) {
            let class_counts = &mut feature_counts[label.index()];
            for (j, value) in row.iter() {
                class_counts[j] += value;
            }
        }

        let class_log_prior = counts.map(|c| {
            if c == 0 {
                f64::NEG_INFINITY
            } else {
                (c as f64 / n).ln()
            }
        });

        let smoothing = self.alpha * n_features as f64;
        let feature_log_prob = feature_counts.map(|class_counts| {
            let total: f64 = class_counts.iter().sum::<f64>() + smoothing;
            class_counts
                .iter()
                .map(|&count| ((count + self.alpha) / total).ln())
                .collect::<Vec<f64>>()
        });

        let warnings = missing_class_warnings(self.name(), counts);
        tracing::debug!(
            features = n_features,
            negative = counts[0],
            positive = counts[1],
            "fitted multinomial naive bayes"
        );

        Ok(NaiveBayesModel {
            class_log_prior,
            feature_log_prob,
            warnings,
        })
    }
}

/// Trained Multinomial Naive Bayes parameters.
#[derive(Debug, Clone)]
pub struct NaiveBayesModel {
    /// `ln P(c)`, indexed by [`Label::index`].
    class_log_prior: [f64; 2],
    /// `ln P(j | c)`: `feature_log_prob[class][feature]`.
    feature_log_prob: [Vec<f64>; 2],
    warnings: Vec<FitWarning>,
}

impl NaiveBayesModel {
    /// Class log priors, indexed by [`Label::index`].
    #[must_use]
    pub fn class_log_prior(&self) -> [f64; 2] {
        self.class_log_prior
    }

    /// Per-feature log likelihoods for `label`.
    #[must_use]
    pub fn feature_log_prob(&self, label: Label) -> &[f64] {
        &self.feature_log_prob[label.index()]
    }

    /// Unnormalized log posterior of each class.
    fn joint_log_likelihood(&self, x: &SparseVector) -> Result<[f64; 2]> {
        check_dimension(self.dimension(), x)?;
        Ok(Label::ALL.map(|label| {
            let c = label.index();
            let log_prob = &self.feature_log_prob[c];
            self.class_log_prior[c] + x.iter().map(|(j, v)| v * log_prob[j]).sum::<f64>()
        }))
    }
}

impl TrainedModel for NaiveBayesModel {
    fn dimension(&self) -> usize {
        self.feature_log_prob[0].len()
    }

    fn predict_proba(&self, x: &SparseVector) -> Result<f64> {
        let [neg, pos] = self.joint_log_likelihood(x)?;
        // log-sum-exp; at most one class prior is -inf
        let max = neg.max(pos);
        let pos_exp = (pos - max).exp();
        let neg_exp = (neg - max).exp();
        Ok(pos_exp / (pos_exp + neg_exp))
    }

    fn predict(&self, x: &SparseVector) -> Result<Label> {
        let [neg, pos] = self.joint_log_likelihood(x)?;
        Ok(if pos > neg {
            Label::Positive
        } else {
            Label::Negative
        })
    }

    fn warnings(&self) -> &[FitWarning] {
        &self.warnings
    }
}
