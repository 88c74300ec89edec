use super::{
    check_dimension, class_counts, missing_class_warnings, validate_training, Classifier, Label,
    TrainedModel,
};
use crate::error::{Result, SentirError};
use crate::primitives::SparseVector;
use crate::warning::FitWarning;
use serde::{Deserialize, Serialize};

/// Logistic Regression classifier for binary sentiment.
///
/// Uses sigmoid activation and binary cross-entropy loss with an L2 penalty,
/// minimized by full-batch gradient descent from all-zero parameters:
///
/// ```text
/// loss(w, b) = mean_i logloss(σ(w·x_i + b), y_i) + ‖w‖² / (2·C·n)
/// ```
///
/// Training stops when every gradient component is below `tol` in absolute
/// value. Reaching `max_iter` first is not an error: the model is returned
/// with [`FitWarning::NotConverged`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogisticRegression {
    /// Learning rate for gradient descent
    learning_rate: f64,
    /// Maximum number of iterations
    max_iter: usize,
    /// Convergence tolerance
    tol: f64,
    /// Inverse regularization strength
    c: f64,
}

impl LogisticRegression {
    /// Creates a classifier with `learning_rate = 0.5`, `max_iter = 1000`,
    /// `tol = 1e-4` and `C = 1.0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            learning_rate: 0.5,
            max_iter: 1000,
            tol: 1e-4,
            c: 1.0,
        }
    }

    /// Sets the learning rate.
    #[must_use]
    pub fn with_learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the inverse regularization strength `C`.
    #[must_use]
    pub fn with_c(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    /// Learning rate.
    #[must_use]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Iteration cap.
    #[must_use]
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Convergence tolerance.
    #[must_use]
    pub fn tol(&self) -> f64 {
        self.tol
    }

    /// Inverse regularization strength.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Check hyperparameters.
    ///
    /// # Errors
    ///
    /// Returns an error if any hyperparameter is out of range.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(SentirError::hyperparameter(
                "learning_rate",
                self.learning_rate,
                "> 0 and finite",
            ));
        }
        if self.max_iter == 0 {
            return Err(SentirError::hyperparameter("max_iter", self.max_iter, ">= 1"));
        }
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(SentirError::hyperparameter("tol", self.tol, "> 0 and finite"));
        }
        if !(self.c.is_finite() && self.c > 0.0) {
            return Err(SentirError::hyperparameter("c", self.c, "> 0 and finite"));
        }
        Ok(())
    }

    /// Regularized mean loss at `(weights, bias)`.
    fn loss(&self, x: &[SparseVector], targets: &[f64], weights: &[f64], bias: f64) -> f64 {
        let n = x.len() as f64;
        let data_loss: f64 = x
            .iter()
            .zip(targets)
            .map(|(row, &t)| {
                let z = bias + row.iter().map(|(j, v)| v * weights[j]).sum::<f64>();
                softplus(z) - t * z
            })
            .sum::<f64>()
            / n;
        let penalty = weights.iter().map(|w| w * w).sum::<f64>() / (2.0 * self.c * n);
        data_loss + penalty
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for LogisticRegression {
    type Model = LogisticModel;

    fn name(&self) -> &'static str {
        "logistic_regression"
    }

    fn fit(&self, x: &[SparseVector], y: &[Label]) -> Result<LogisticModel> {
        self.validate()?;
        let n_features = validate_training(x, y)?;

        let targets: Vec<f64> = y
            .iter()
            .map(|&label| if label == Label::Positive { 1.0 } else { 0.0 })
            .collect();
        let n = x.len() as f64;

        let mut weights = vec![0.0; n_features];
        let mut bias = 0.0;
        let mut weight_grad = vec![0.0; n_features];
        let mut converged = false;
        let mut iterations = 0;

        for _ in 0..self.max_iter {
            iterations += 1;

            weight_grad.iter_mut().for_each(|g| *g = 0.0);
            let mut bias_grad = 0.0;

            for (row, &t) in x.iter().zip(&targets) {
                let z = bias + row.iter().map(|(j, v)| v * weights[j]).sum::<f64>();
                let error = sigmoid(z) - t;
                bias_grad += error;
                for (j, v) in row.iter() {
                    weight_grad[j] += error * v;
                }
            }

            bias_grad /= n;
            for (g, w) in weight_grad.iter_mut().zip(&weights) {
                *g = *g / n + w / (self.c * n);
            }

            bias -= self.learning_rate * bias_grad;
            for (w, g) in weights.iter_mut().zip(&weight_grad) {
                *w -= self.learning_rate * g;
            }

            let max_grad = weight_grad
                .iter()
                .fold(bias_grad.abs(), |acc, g| acc.max(g.abs()));
            if max_grad < self.tol {
                converged = true;
                break;
            }
        }

        let final_loss = self.loss(x, &targets, &weights, bias);
        let mut warnings = missing_class_warnings(self.name(), class_counts(y));
        if !converged {
            let warning = FitWarning::NotConverged {
                iterations,
                final_loss,
            };
            tracing::warn!(stage = %warning.stage(), model = self.name(), "{warning}");
            warnings.push(warning);
        }

        tracing::debug!(
            features = n_features,
            iterations,
            converged,
            final_loss,
            "fitted logistic regression"
        );

        Ok(LogisticModel {
            weights,
            bias,
            iterations,
            warnings,
        })
    }
}

/// Trained logistic regression parameters.
#[derive(Debug, Clone)]
pub struct LogisticModel {
    weights: Vec<f64>,
    bias: f64,
    iterations: usize,
    warnings: Vec<FitWarning>,
}

impl LogisticModel {
    /// Feature weights.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Intercept.
    #[must_use]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Gradient steps taken during fitting.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Raw decision value `w·x + b`.
    ///
    /// # Errors
    ///
    /// Returns an error on dimension mismatch.
    pub fn decision_function(&self, x: &SparseVector) -> Result<f64> {
        check_dimension(self.dimension(), x)?;
        Ok(self.bias + x.dot(&self.weights)?)
    }
}

impl TrainedModel for LogisticModel {
    fn dimension(&self) -> usize {
        self.weights.len()
    }

    fn predict_proba(&self, x: &SparseVector) -> Result<f64> {
        Ok(sigmoid(self.decision_function(x)?))
    }

    fn predict(&self, x: &SparseVector) -> Result<Label> {
        Ok(if self.predict_proba(x)? >= 0.5 {
            Label::Positive
        } else {
            Label::Negative
        })
    }

    fn warnings(&self) -> &[FitWarning] {
        &self.warnings
    }
}

/// Sigmoid activation function: σ(z) = 1 / (1 + e^(-z))
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// ln(1 + e^z) without overflow.
fn softplus(z: f64) -> f64 {
    if z > 0.0 {
        z + (-z).exp().ln_1p()
    } else {
        z.exp().ln_1p()
    }
}
