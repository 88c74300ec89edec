//! Stop words filtering for text preprocessing.
//!
//! Stop words are common words (like "the", "is", "at") that carry little
//! discriminative meaning for sentiment and are removed before vectorizing.
//!
//! The default English list is the NLTK corpus list, including the clitic
//! fragments ("don", "t", "ll") that contraction splitting leaves behind.
//!
//! # Examples
//!
//! ```
//! use sentir::text::stopwords::StopWordsFilter;
//!
//! let filter = StopWordsFilter::english();
//!
//! let tokens = vec!["this".to_string(), "product".into(), "is".into(), "great".into()];
//! let filtered = filter.filter_owned(tokens);
//! assert_eq!(filtered, vec!["product", "great"]);
//! ```

use std::collections::HashSet;

/// Stop words filter that removes common words from token lists.
///
/// Stop words are case-insensitive and checked using a `HashSet` for O(1) lookup.
///
/// # Examples
///
/// ```
/// use sentir::text::stopwords::StopWordsFilter;
///
/// let custom_filter = StopWordsFilter::new(vec!["foo", "bar"]);
/// let tokens = vec!["foo".to_string(), "test".into(), "bar".into(), "data".into()];
/// assert_eq!(custom_filter.filter_owned(tokens), vec!["test", "data"]);
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Set of stop words (stored in lowercase for case-insensitive matching)
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a new stop words filter with custom stop words.
    ///
    /// Words are lowercased on insertion.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with the English stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentir::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// assert!(filter.is_stop_word("The"));
    /// assert!(filter.is_stop_word("not"));
    /// assert!(!filter.is_stop_word("great"));
    /// ```
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Filter stop words from a list of tokens, preserving original case.
    #[must_use]
    pub fn filter_owned(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|t| !self.is_stop_word(t))
            .collect()
    }

    /// Check if a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Get the number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the filter is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

/// Default English stop words (179 words).
///
/// # Examples
///
/// ```
/// use sentir::text::stopwords::ENGLISH_STOP_WORDS;
///
/// assert!(ENGLISH_STOP_WORDS.contains(&"the"));
/// assert!(ENGLISH_STOP_WORDS.contains(&"wouldn't"));
/// assert!(!ENGLISH_STOP_WORDS.contains(&"product"));
/// ```
pub const ENGLISH_STOP_WORDS: &[&str] = &build_stop_words();

/// Category-based stop word definitions. Each tuple: (category, words).
const STOP_WORD_CATEGORIES: &[(&str, &[&str])] = &[
    ("articles", &["a", "an", "the"]),
    ("pronouns", &[
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
        "you", "you're", "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves",
        "he", "him", "his", "himself", "she", "she's", "her", "hers", "herself",
        "it", "it's", "its", "itself", "they", "them", "their", "theirs", "themselves",
    ]),
    ("determiners", &["this", "that", "that'll", "these", "those"]),
    ("questions", &["what", "which", "who", "whom", "when", "where", "why", "how"]),
    ("prepositions", &[
        "of", "at", "by", "for", "with", "about", "against", "between", "into", "through",
        "during", "before", "after", "above", "below", "to", "from", "up", "down",
        "in", "out", "on", "off", "over", "under",
    ]),
    ("conjunctions", &["and", "but", "if", "or", "because", "as", "until", "while", "nor", "than"]),
    ("verbs", &[
        "am", "is", "are", "was", "were", "be", "been", "being",
        "have", "has", "had", "having", "do", "does", "did", "doing",
        "can", "will", "should", "should've",
    ]),
    ("adverbs_quantifiers", &[
        "again", "further", "then", "once", "here", "there", "all", "any", "both", "each",
        "few", "more", "most", "other", "some", "such", "no", "not", "only", "own",
        "same", "so", "too", "very", "just", "now",
    ]),
    ("clitic_fragments", &["s", "t", "d", "ll", "m", "o", "re", "ve", "y", "ma"]),
    ("negated_auxiliaries", &[
        "don", "don't", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't",
        "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't",
        "isn", "isn't", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't",
        "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't",
        "won", "won't", "wouldn", "wouldn't",
    ]),
];

/// Total number of stop words across all categories.
const TOTAL_STOP_WORDS: usize = count_total_stop_words();

/// Count total stop words at compile time.
const fn count_total_stop_words() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < STOP_WORD_CATEGORIES.len() {
        total += STOP_WORD_CATEGORIES[i].1.len();
        i += 1;
    }
    total
}

/// Flatten all category words into a single array at compile time.
const fn build_stop_words() -> [&'static str; TOTAL_STOP_WORDS] {
    let mut result = [""; TOTAL_STOP_WORDS];
    let mut idx = 0;
    let mut cat = 0;
    while cat < STOP_WORD_CATEGORIES.len() {
        let words = STOP_WORD_CATEGORIES[cat].1;
        let mut w = 0;
        while w < words.len() {
            result[idx] = words[w];
            idx += 1;
            w += 1;
        }
        cat += 1;
    }
    result
}

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
