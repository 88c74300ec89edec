//! Text normalization: raw review → ordered sequence of clean tokens.
//!
//! Steps, in order:
//! 1. lowercase the text
//! 2. split into word and punctuation tokens ([`WordTokenizer`])
//! 3. lemmatize each token ([`RuleLemmatizer`])
//! 4. drop stop words (checked on both the surface form and the lemma) and
//!    tokens made only of punctuation
//!
//! Lowercasing the whole text before splitting gives the same tokens as
//! lowercasing each token afterwards, and keeps the output a fixed point:
//! normalizing already-normalized text returns it unchanged.
//!
//! The stop word set and lemma tables live in [`LanguageResources`], built
//! once and shared read-only through an [`Arc`] handle.

use crate::text::lemmatize::{Lemmatizer, RuleLemmatizer};
use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenize::WordTokenizer;
use crate::text::Tokenizer;
use std::sync::Arc;

/// Fixed linguistic resources shared by every normalizer.
///
/// Never mutated after construction, so one instance can back any number of
/// pipelines.
#[derive(Debug, Clone)]
pub struct LanguageResources {
    stop_words: StopWordsFilter,
    lemmatizer: RuleLemmatizer,
}

impl LanguageResources {
    /// Build resources from explicit parts.
    #[must_use]
    pub fn new(stop_words: StopWordsFilter, lemmatizer: RuleLemmatizer) -> Self {
        Self {
            stop_words,
            lemmatizer,
        }
    }

    /// English stop words and lemma rules behind a shareable handle.
    #[must_use]
    pub fn english() -> Arc<Self> {
        Arc::new(Self::new(
            StopWordsFilter::english(),
            RuleLemmatizer::english(),
        ))
    }

    /// The stop word set.
    #[must_use]
    pub fn stop_words(&self) -> &StopWordsFilter {
        &self.stop_words
    }

    /// The lemmatizer.
    #[must_use]
    pub fn lemmatizer(&self) -> &RuleLemmatizer {
        &self.lemmatizer
    }
}

/// Deterministic text normalizer.
///
/// # Examples
///
/// ```
/// use sentir::text::normalize::Normalizer;
///
/// let normalizer = Normalizer::english();
///
/// assert_eq!(
///     normalizer.normalize("This product is amazing and works perfectly"),
///     vec!["product", "amazing", "work", "perfectly"]
/// );
/// assert_eq!(normalizer.normalize_to_text("This product is great!"), "product great");
/// assert!(normalizer.normalize("is the and").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    resources: Arc<LanguageResources>,
    tokenizer: WordTokenizer,
}

impl Normalizer {
    /// Create a normalizer over shared resources.
    #[must_use]
    pub fn new(resources: Arc<LanguageResources>) -> Self {
        Self {
            resources,
            tokenizer: WordTokenizer::new(),
        }
    }

    /// Normalizer with freshly built English resources.
    #[must_use]
    pub fn english() -> Self {
        Self::new(LanguageResources::english())
    }

    /// Handle to the shared resources.
    #[must_use]
    pub fn resources(&self) -> &Arc<LanguageResources> {
        &self.resources
    }

    /// Normalize text into an ordered token sequence. May be empty.
    #[must_use]
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let stop_words = self.resources.stop_words();
        let lemmatizer = self.resources.lemmatizer();

        let tokens: Vec<String> = self
            .tokenizer
            .tokenize(&text.to_lowercase())
            .into_iter()
            .filter(|token| !is_punctuation(token))
            .collect();
        let lemmas = lemmatizer.lemmatize_tokens(&stop_words.filter_owned(tokens));
        stop_words.filter_owned(lemmas)
    }

    /// Normalize and join the tokens with single spaces.
    #[must_use]
    pub fn normalize_to_text(&self, text: &str) -> String {
        self.normalize(text).join(" ")
    }

    /// Normalize every text in order.
    pub fn normalize_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vec<String>> {
        texts.iter().map(|t| self.normalize(t.as_ref())).collect()
    }
}

/// True for tokens without any alphanumeric character.
fn is_punctuation(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}
