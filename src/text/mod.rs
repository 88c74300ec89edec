//! Text processing for review sentiment.
//!
//! - [`tokenize`]: splitting raw text into tokens
//! - [`stopwords`]: the fixed English stop word set
//! - [`lemmatize`]: dictionary-form reduction
//! - [`normalize`]: the full normalization chain and its shared resources
//! - [`vectorize`]: vocabulary fitting and TF-IDF feature vectors

pub mod lemmatize;
pub mod normalize;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

pub use normalize::{LanguageResources, Normalizer};

/// Splits a string into tokens.
///
/// Tokenizers are infallible: any input, including the empty string, yields
/// a possibly empty token list.
pub trait Tokenizer {
    /// Tokenize `text` into an ordered list of tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;
}
