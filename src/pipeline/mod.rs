//! End-to-end sentiment pipeline.
//!
//! [`SentimentPipeline`] is the unfitted state: configuration plus the
//! shared language resources. [`SentimentPipeline::fit`] consumes it and
//! returns a [`FittedPipeline`] owning the vectorizer and both trained
//! classifiers, which can then predict novel text any number of times.
//! Refitting means building a new [`SentimentPipeline`].
//!
//! Fitting runs, in order:
//! 1. every review must carry a label
//! 2. normalize all review texts
//! 3. fit TF-IDF on the whole normalized corpus and transform every review
//! 4. seeded train/test split of row indices
//! 5. fit each classifier on the training rows
//! 6. evaluate each classifier on the test rows
//!
//! # Example
//!
//! ```
//! use sentir::config::PipelineConfig;
//! use sentir::data::Dataset;
//! use sentir::pipeline::SentimentPipeline;
//!
//! let fitted = SentimentPipeline::new(PipelineConfig::default())
//!     .fit(&Dataset::sample())
//!     .expect("sample corpus fits");
//!
//! assert_eq!(fitted.split().test.len(), 5);
//! for prediction in fitted.predict("This product is great!").expect("prediction") {
//!     assert_eq!(prediction.normalized, "product great");
//! }
//! ```

use crate::classification::{
    Classifier, ClassifierKind, FittedClassifier, Label, TrainedModel,
};
use crate::config::PipelineConfig;
use crate::data::Dataset;
use crate::error::{Result, SentirError};
use crate::metrics::{evaluate_with, ClassificationReport};
use crate::model_selection::{train_test_split, Split};
use crate::text::vectorize::FittedTfidf;
use crate::text::{LanguageResources, Normalizer};
use crate::warning::PipelineWarning;
use std::sync::Arc;

/// Warning source name for the vectorizer stage.
const VECTORIZER: &str = "vectorizer";

/// Unfitted pipeline.
#[derive(Debug, Clone)]
pub struct SentimentPipeline {
    config: PipelineConfig,
    resources: Arc<LanguageResources>,
}

impl SentimentPipeline {
    /// Pipeline with freshly built English resources.
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_resources(config, LanguageResources::english())
    }

    /// Pipeline over already-built, shared resources.
    #[must_use]
    pub fn with_resources(config: PipelineConfig, resources: Arc<LanguageResources>) -> Self {
        Self { config, resources }
    }

    /// The configuration this pipeline will fit with.
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Classifiers fitted by this pipeline, in report order.
    #[must_use]
    pub fn classifiers(&self) -> Vec<ClassifierKind> {
        vec![
            ClassifierKind::NaiveBayes(self.config.naive_bayes),
            ClassifierKind::Logistic(self.config.logistic),
        ]
    }

    /// Fit the vectorizer and every classifier, then evaluate each on the
    /// held-out rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the dataset is
    /// empty or has an unlabeled review, or the split leaves either
    /// partition empty.
    pub fn fit(self, dataset: &Dataset) -> Result<FittedPipeline> {
        self.config.validate()?;
        if dataset.is_empty() {
            return Err(SentirError::empty_input("dataset"));
        }
        let labels = dataset.labels()?;

        let normalizer = Normalizer::new(Arc::clone(&self.resources));
        let normalized: Vec<String> = dataset
            .reviews()
            .iter()
            .map(|review| normalizer.normalize_to_text(&review.text))
            .collect();

        let vectorizer = self.config.vectorizer.fit(&normalized)?;
        let features = vectorizer.transform_batch(&normalized);

        let split = train_test_split(
            dataset.len(),
            self.config.test_size,
            self.config.random_state,
        )?;
        let x_train = split.select_train(&features);
        let y_train = split.select_train(&labels);
        let x_test = split.select_test(&features);
        let y_test = split.select_test(&labels);

        tracing::debug!(
            reviews = dataset.len(),
            vocabulary = vectorizer.dimension(),
            train = x_train.len(),
            test = x_test.len(),
            "prepared features"
        );

        let mut warnings: Vec<PipelineWarning> = vectorizer
            .warnings()
            .iter()
            .map(|warning| PipelineWarning::Fit {
                source: VECTORIZER,
                warning: warning.clone(),
            })
            .collect();

        let mut models = Vec::new();
        for kind in self.classifiers() {
            let name = kind.name();
            let model = kind.fit(&x_train, &y_train)?;
            let predictions = model.predict_batch(&x_test)?;
            let report = evaluate_with(&y_test, &predictions, self.config.zero_division)?;

            tracing::debug!(model = name, accuracy = report.accuracy(), "evaluated classifier");

            warnings.extend(model.warnings().iter().map(|warning| PipelineWarning::Fit {
                source: name,
                warning: warning.clone(),
            }));
            warnings.extend(
                report
                    .warnings()
                    .iter()
                    .map(|&warning| PipelineWarning::Evaluation {
                        model: name,
                        warning,
                    }),
            );

            models.push(EvaluatedModel {
                name,
                model,
                report,
            });
        }

        Ok(FittedPipeline {
            config: self.config,
            normalizer,
            vectorizer,
            split,
            models,
            warnings,
        })
    }
}

impl Default for SentimentPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

/// A trained classifier together with its held-out evaluation.
#[derive(Debug, Clone)]
pub struct EvaluatedModel {
    /// Classifier name.
    pub name: &'static str,
    /// Trained parameters.
    pub model: FittedClassifier,
    /// Metrics on the test partition.
    pub report: ClassificationReport,
}

/// One model's verdict on one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Classifier name.
    pub model: &'static str,
    /// Predicted sentiment.
    pub label: Label,
    /// Probability of [`Label::Positive`].
    pub probability: f64,
    /// The text after normalization, as fed to the vectorizer.
    pub normalized: String,
}

/// Fitted pipeline. Every component is read-only from here on.
#[derive(Debug, Clone)]
pub struct FittedPipeline {
    config: PipelineConfig,
    normalizer: Normalizer,
    vectorizer: FittedTfidf,
    split: Split,
    models: Vec<EvaluatedModel>,
    warnings: Vec<PipelineWarning>,
}

impl FittedPipeline {
    /// Configuration used for fitting.
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The normalizer applied to every text.
    #[must_use]
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// The fitted vectorizer.
    #[must_use]
    pub fn vectorizer(&self) -> &FittedTfidf {
        &self.vectorizer
    }

    /// Trained classifiers with their evaluations, in fit order.
    #[must_use]
    pub fn models(&self) -> &[EvaluatedModel] {
        &self.models
    }

    /// `(name, report)` for every classifier.
    pub fn evaluations(&self) -> impl Iterator<Item = (&'static str, &ClassificationReport)> + '_ {
        self.models.iter().map(|m| (m.name, &m.report))
    }

    /// The train/test partition of the fitted dataset.
    #[must_use]
    pub fn split(&self) -> &Split {
        &self.split
    }

    /// Every fit and evaluation warning, in the order raised.
    #[must_use]
    pub fn warnings(&self) -> &[PipelineWarning] {
        &self.warnings
    }

    /// Classify `text` with every model.
    ///
    /// Text that normalizes to nothing becomes the zero vector and still
    /// receives a label from each model.
    ///
    /// # Errors
    ///
    /// Returns an error only if a model rejects the vector dimension, which
    /// cannot happen for vectors produced by this pipeline's vectorizer.
    pub fn predict(&self, text: &str) -> Result<Vec<Prediction>> {
        let normalized = self.normalizer.normalize_to_text(text);
        let features = self.vectorizer.transform(&normalized);

        self.models
            .iter()
            .map(|entry| {
                Ok(Prediction {
                    model: entry.name,
                    label: entry.model.predict(&features)?,
                    probability: entry.model.predict_proba(&features)?,
                    normalized: normalized.clone(),
                })
            })
            .collect()
    }

    /// [`FittedPipeline::predict`] for every text, in order.
    ///
    /// # Errors
    ///
    /// Propagates the first prediction error.
    pub fn predict_batch<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<Vec<Prediction>>> {
        texts.iter().map(|t| self.predict(t.as_ref())).collect()
    }

    /// Evaluate every model on another labeled dataset, using this
    /// pipeline's normalizer and vectorizer unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset is empty or has an unlabeled review.
    pub fn evaluate_dataset(
        &self,
        dataset: &Dataset,
    ) -> Result<Vec<(&'static str, ClassificationReport)>> {
        let labels = dataset.labels()?;
        let features: Vec<_> = dataset
            .reviews()
            .iter()
            .map(|review| {
                self.vectorizer
                    .transform_tokens(&self.normalizer.normalize(&review.text))
            })
            .collect();

        self.models
            .iter()
            .map(|entry| {
                let predictions = entry.model.predict_batch(&features)?;
                let report = evaluate_with(&labels, &predictions, self.config.zero_division)?;
                Ok((entry.name, report))
            })
            .collect()
    }
}
