//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sentir::prelude::*;
//! ```

pub use crate::classification::{
    Classifier, ClassifierKind, FittedClassifier, Label, LogisticRegression, MultinomialNB,
    TrainedModel,
};
pub use crate::config::PipelineConfig;
pub use crate::data::{Dataset, Review};
pub use crate::error::{Result, SentirError};
pub use crate::metrics::{evaluate, evaluate_with, ClassificationReport, ZeroDivision};
pub use crate::model_selection::{train_test_split, Split};
pub use crate::pipeline::{FittedPipeline, Prediction, SentimentPipeline};
pub use crate::primitives::SparseVector;
pub use crate::text::vectorize::{FittedTfidf, Norm, TfidfVectorizer};
pub use crate::text::{LanguageResources, Normalizer, Tokenizer};
pub use crate::warning::{EvaluationWarning, FitWarning, PipelineWarning};
