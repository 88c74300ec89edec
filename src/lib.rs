//! Sentir: classical sentiment classification for short product reviews.
//!
//! Raw review text is normalized, turned into TF-IDF feature vectors and
//! classified as positive or negative by two interchangeable models:
//! Multinomial Naive Bayes and L2-regularized logistic regression.
//!
//! # Quick Start
//!
//! ```
//! use sentir::prelude::*;
//!
//! let fitted = SentimentPipeline::new(PipelineConfig::default())
//!     .fit(&Dataset::sample())
//!     .expect("sample corpus fits");
//!
//! for (model, report) in fitted.evaluations() {
//!     assert!((0.0..=1.0).contains(&report.accuracy()), "{model}");
//! }
//!
//! let predictions = fitted.predict("Great battery, works perfectly").expect("prediction");
//! assert_eq!(predictions.len(), 2);
//! ```
//!
//! # Modules
//!
//! - [`text`]: Tokenization, stop words, lemmatization, normalization, TF-IDF
//! - [`primitives`]: Sparse feature vectors
//! - [`classification`]: Naive Bayes and logistic regression classifiers
//! - [`metrics`]: Accuracy, precision, recall, F1 and confusion matrix
//! - [`model_selection`]: Seeded train/test splitting
//! - [`data`]: Review datasets and CSV loading
//! - [`pipeline`]: The end-to-end fit/evaluate/predict workflow
//! - [`config`]: JSON-loadable pipeline configuration
//! - [`warning`]: Non-fatal fit and evaluation diagnostics

pub mod classification;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod model_selection;
pub mod pipeline;
pub mod prelude;
pub mod primitives;
pub mod text;
pub mod warning;

pub use error::{Result, SentirError};
pub use primitives::SparseVector;
