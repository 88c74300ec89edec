use super::Vocabulary;
use crate::error::{Result, SentirError};
use crate::primitives::SparseVector;
use crate::text::tokenize::WhitespaceTokenizer;
use crate::text::Tokenizer;
use crate::warning::FitWarning;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Row normalization applied after TF-IDF weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Scale each vector to unit Euclidean length.
    #[default]
    L2,
    /// Leave raw TF × IDF weights.
    None,
}

/// TF-IDF vectorizer settings.
///
/// Converts normalized text (tokens separated by whitespace) into TF-IDF
/// (Term Frequency-Inverse Document Frequency) weighted sparse vectors.
///
/// **TF-IDF Formula:**
/// ```text
/// tfidf(t, d) = tf(t, d) × idf(t)
/// tf(t, d)    = count of t in d            (or 1 + ln(count) when sublinear)
/// idf(t)      = ln((1 + N) / (1 + df(t))) + 1   (smooth, default)
/// idf(t)      = ln(N / df(t)) + 1               (not smooth)
/// where N = documents in the fitted corpus, df(t) = documents containing t
/// ```
///
/// # Examples
///
/// ```
/// use sentir::text::vectorize::{Norm, TfidfVectorizer};
///
/// let fitted = TfidfVectorizer::new()
///     .with_norm(Norm::None)
///     .with_smooth_idf(false)
///     .fit(&["cat dog", "cat bird"])
///     .expect("fit should succeed");
///
/// let v = fitted.transform("cat");
/// // cat appears in every document: idf = ln(2/2) + 1 = 1
/// assert!((v.get(fitted.vocabulary().get("cat").unwrap()) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfidfVectorizer {
    /// Add one to document frequencies, as if an extra document held every term.
    pub smooth_idf: bool,
    /// Use sublinear TF scaling: tf = 1 + ln(tf) if tf > 0
    pub sublinear_tf: bool,
    /// Normalization applied to each output vector.
    pub norm: Norm,
    /// Ignore terms appearing in fewer than `min_df` documents.
    pub min_df: usize,
    /// Keep only the most frequent terms.
    pub max_features: Option<usize>,
}

impl TfidfVectorizer {
    /// Create a vectorizer with the conventional defaults: smooth IDF, raw
    /// TF, L2 normalization, no document-frequency cut-off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            smooth_idf: true,
            sublinear_tf: false,
            norm: Norm::L2,
            min_df: 1,
            max_features: None,
        }
    }

    /// Enable or disable IDF smoothing.
    #[must_use]
    pub fn with_smooth_idf(mut self, smooth_idf: bool) -> Self {
        self.smooth_idf = smooth_idf;
        self
    }

    /// Enable sublinear term-frequency scaling.
    #[must_use]
    pub fn with_sublinear_tf(mut self, sublinear_tf: bool) -> Self {
        self.sublinear_tf = sublinear_tf;
        self
    }

    /// Set output normalization.
    #[must_use]
    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    /// Set minimum document frequency threshold.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Set maximum vocabulary size.
    #[must_use]
    pub fn with_max_features(mut self, max_features: Option<usize>) -> Self {
        self.max_features = max_features;
        self
    }

    /// Check settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_df` is 0 or `max_features` is `Some(0)`.
    pub fn validate(&self) -> Result<()> {
        if self.min_df == 0 {
            return Err(SentirError::hyperparameter("min_df", self.min_df, ">= 1"));
        }
        if self.max_features == Some(0) {
            return Err(SentirError::hyperparameter("max_features", 0, ">= 1"));
        }
        Ok(())
    }

    /// Learn vocabulary and IDF weights from normalized documents.
    ///
    /// An empty corpus, or one without any token, is not an error: the
    /// result has an empty vocabulary and carries
    /// [`FitWarning::EmptyVocabulary`].
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid.
    pub fn fit<S: AsRef<str>>(&self, corpus: &[S]) -> Result<FittedTfidf> {
        let tokenizer = WhitespaceTokenizer::new();
        let documents: Vec<Vec<String>> = corpus
            .iter()
            .map(|doc| tokenizer.tokenize(doc.as_ref()))
            .collect();
        self.fit_tokens(&documents)
    }

    /// Fit on `corpus` and transform the same documents.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid.
    pub fn fit_transform<S: AsRef<str>>(
        &self,
        corpus: &[S],
    ) -> Result<(FittedTfidf, Vec<SparseVector>)> {
        let fitted = self.fit(corpus)?;
        let vectors = fitted.transform_batch(corpus);
        Ok((fitted, vectors))
    }

    /// Learn vocabulary and IDF weights from pre-tokenized documents.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid.
    pub fn fit_tokens<S: AsRef<str>>(&self, documents: &[Vec<S>]) -> Result<FittedTfidf> {
        self.validate()?;

        let n_docs = documents.len();
        let mut term_freq: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();

        for doc in documents {
            let mut doc_terms: HashSet<&str> = HashSet::new();
            for token in doc {
                let term = token.as_ref();
                *term_freq.entry(term).or_insert(0) += 1;
                doc_terms.insert(term);
            }
            for term in doc_terms {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut kept: Vec<(&str, usize)> = term_freq
            .into_iter()
            .filter(|(term, _)| doc_freq.get(term).copied().unwrap_or(0) >= self.min_df)
            .collect();

        if let Some(max_features) = self.max_features {
            kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            kept.truncate(max_features);
        }

        let vocabulary = Vocabulary::from_terms(kept.into_iter().map(|(term, _)| term));

        let n = n_docs as f64;
        let idf = vocabulary
            .iter()
            .map(|(term, _)| {
                let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
                if self.smooth_idf {
                    ((1.0 + n) / (1.0 + df)).ln() + 1.0
                } else {
                    (n / df).ln() + 1.0
                }
            })
            .collect();

        let mut warnings = Vec::new();
        if vocabulary.is_empty() {
            let warning = FitWarning::EmptyVocabulary { documents: n_docs };
            tracing::warn!(stage = %warning.stage(), "{warning}");
            warnings.push(warning);
        }

        tracing::debug!(
            documents = n_docs,
            vocabulary = vocabulary.len(),
            "fitted tf-idf vectorizer"
        );

        Ok(FittedTfidf {
            settings: *self,
            vocabulary,
            idf,
            n_documents: n_docs,
            warnings,
        })
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// A vectorizer whose vocabulary and IDF weights are fixed.
///
/// The single source of feature dimensionality: every vector it produces
/// has [`FittedTfidf::dimension`] entries, whatever the input.
#[derive(Debug, Clone)]
pub struct FittedTfidf {
    settings: TfidfVectorizer,
    vocabulary: Vocabulary,
    idf: Vec<f64>,
    n_documents: usize,
    warnings: Vec<FitWarning>,
}

impl FittedTfidf {
    /// Transform normalized text into a TF-IDF vector.
    ///
    /// Tokens missing from the vocabulary are ignored; text without any
    /// known token yields the zero vector.
    #[must_use]
    pub fn transform(&self, text: &str) -> SparseVector {
        self.transform_tokens(&WhitespaceTokenizer::new().tokenize(text))
    }

    /// Transform an already-tokenized document.
    #[must_use]
    pub fn transform_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            if let Some(idx) = self.vocabulary.get(token.as_ref()) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let (indices, values): (Vec<usize>, Vec<f64>) = counts
            .into_iter()
            .map(|(idx, count)| {
                let tf = if self.settings.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                (idx, tf * self.idf[idx])
            })
            .unzip();

        let mut vector = SparseVector::from_sorted_parts(self.dimension(), indices, values);
        if self.settings.norm == Norm::L2 {
            vector.normalize_l2();
        }
        vector
    }

    /// Transform every text in order.
    pub fn transform_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SparseVector> {
        texts.iter().map(|t| self.transform(t.as_ref())).collect()
    }

    /// Number of features (= vocabulary size).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    /// The learned vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// IDF weight per feature index.
    #[must_use]
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Number of documents in the fitted corpus.
    #[must_use]
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Settings this vectorizer was fitted with.
    #[must_use]
    pub fn settings(&self) -> &TfidfVectorizer {
        &self.settings
    }

    /// Degenerate-fit diagnostics.
    #[must_use]
    pub fn warnings(&self) -> &[FitWarning] {
        &self.warnings
    }
}
