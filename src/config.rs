//! Pipeline configuration.
//!
//! Every field has a default, so a JSON file only needs the values it
//! changes:
//!
//! ```json
//! {
//!   "test_size": 0.2,
//!   "random_state": 7,
//!   "vectorizer": { "sublinear_tf": true },
//!   "logistic": { "c": 0.5 }
//! }
//! ```

use crate::classification::{LogisticRegression, MultinomialNB};
use crate::error::{Result, SentirError};
use crate::metrics::ZeroDivision;
use crate::text::vectorize::TfidfVectorizer;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for one pipeline fit.
///
/// # Examples
///
/// ```
/// use sentir::config::PipelineConfig;
///
/// let config = PipelineConfig::from_json_str(r#"{ "test_size": 0.3 }"#)
///     .expect("valid configuration");
/// assert_eq!(config.test_size, 0.3);
/// assert_eq!(config.random_state, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Fraction of reviews held out for evaluation, in `(0, 1)`.
    pub test_size: f64,
    /// Seed for the train/test shuffle.
    pub random_state: u64,
    /// TF-IDF settings.
    pub vectorizer: TfidfVectorizer,
    /// Naive Bayes hyperparameters.
    pub naive_bayes: MultinomialNB,
    /// Logistic regression hyperparameters.
    pub logistic: LogisticRegression,
    /// Value reported for undefined precision or recall.
    pub zero_division: ZeroDivision,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            test_size: 0.25,
            random_state: 42,
            vectorizer: TfidfVectorizer::default(),
            naive_bayes: MultinomialNB::default(),
            logistic: LogisticRegression::default(),
            zero_division: ZeroDivision::default(),
        }
    }
}

impl PipelineConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON for
    /// this structure, or fails [`PipelineConfig::validate`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate a JSON configuration string.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON or out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SentirError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty-printed JSON form.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SentirError::Config(e.to_string()))
    }

    /// Check every value range before fitting.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::Config`] describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(SentirError::Config(format!(
                "test_size must be between 0 and 1, got {}",
                self.test_size
            )));
        }
        self.vectorizer
            .validate()
            .and_then(|()| self.naive_bayes.validate())
            .and_then(|()| self.logistic.validate())
            .map_err(|e| SentirError::Config(e.to_string()))
    }

    /// Sets the held-out fraction.
    #[must_use]
    pub fn with_test_size(mut self, test_size: f64) -> Self {
        self.test_size = test_size;
        self
    }

    /// Sets the shuffle seed.
    #[must_use]
    pub fn with_random_state(mut self, random_state: u64) -> Self {
        self.random_state = random_state;
        self
    }

    /// Sets the TF-IDF settings.
    #[must_use]
    pub fn with_vectorizer(mut self, vectorizer: TfidfVectorizer) -> Self {
        self.vectorizer = vectorizer;
        self
    }

    /// Sets the Naive Bayes hyperparameters.
    #[must_use]
    pub fn with_naive_bayes(mut self, naive_bayes: MultinomialNB) -> Self {
        self.naive_bayes = naive_bayes;
        self
    }

    /// Sets the logistic regression hyperparameters.
    #[must_use]
    pub fn with_logistic(mut self, logistic: LogisticRegression) -> Self {
        self.logistic = logistic;
        self
    }

    /// Sets the zero-division policy.
    #[must_use]
    pub fn with_zero_division(mut self, zero_division: ZeroDivision) -> Self {
        self.zero_division = zero_division;
        self
    }
}
