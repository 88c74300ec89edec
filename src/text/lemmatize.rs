//! Lemmatization: reducing words to their dictionary base form.
//!
//! Unlike stemming, a lemmatizer only produces real words: "works" → "work",
//! "batteries" → "battery", but "perfectly" and "amazing" stay as they are.
//!
//! [`RuleLemmatizer`] works without part-of-speech tags. It follows the noun
//! morphology of the WordNet lemmatizer: an irregular-form table first, then
//! inflectional suffix rules, with guards for words whose trailing "s" is
//! not a plural marker.
//!
//! # Examples
//!
//! ```
//! use sentir::text::lemmatize::{Lemmatizer, RuleLemmatizer};
//!
//! let lemmatizer = RuleLemmatizer::english();
//!
//! assert_eq!(lemmatizer.lemmatize("works"), "work");
//! assert_eq!(lemmatizer.lemmatize("batteries"), "battery");
//! assert_eq!(lemmatizer.lemmatize("children"), "child");
//! assert_eq!(lemmatizer.lemmatize("perfectly"), "perfectly");
//! ```

use std::collections::{HashMap, HashSet};

/// Trait for lemmatization algorithms.
///
/// Implementations must be idempotent: `lemmatize(lemmatize(w)) == lemmatize(w)`.
pub trait Lemmatizer {
    /// Reduce a single lowercase word to its lemma.
    fn lemmatize(&self, word: &str) -> String;

    /// Lemmatize every token in order.
    fn lemmatize_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| self.lemmatize(token.as_ref()))
            .collect()
    }
}

/// Rule-based, POS-independent lemmatizer.
#[derive(Debug, Clone)]
pub struct RuleLemmatizer {
    /// Irregular forms mapped straight to their lemma.
    irregular: HashMap<&'static str, &'static str>,
    /// Words ending in "s" that are already base forms.
    invariant: HashSet<&'static str>,
}

impl RuleLemmatizer {
    /// Lemmatizer with the built-in English tables.
    #[must_use]
    pub fn english() -> Self {
        Self {
            irregular: IRREGULAR_FORMS.iter().copied().collect(),
            invariant: INVARIANT_WORDS.iter().copied().collect(),
        }
    }

    /// Number of irregular forms known to this lemmatizer.
    #[must_use]
    pub fn irregular_count(&self) -> usize {
        self.irregular.len()
    }

    fn apply_suffix_rules(word: &str) -> Option<String> {
        let n_chars = word.chars().count();
        if n_chars <= 3 {
            return None;
        }
        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return None;
        }
        if n_chars > 4 {
            if let Some(stem) = word.strip_suffix("ies") {
                return Some(format!("{stem}y"));
            }
        }
        if word.ends_with("sses") {
            return Some(word[..word.len() - 2].to_string());
        }
        for suffix in ["xes", "ches", "shes", "zzes"] {
            if word.ends_with(suffix) {
                return Some(word[..word.len() - 2].to_string());
            }
        }
        word.strip_suffix('s').map(ToString::to_string)
    }
}

impl Default for RuleLemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(lemma) = self.irregular.get(word) {
            return (*lemma).to_string();
        }
        if self.invariant.contains(word) || !word.chars().all(char::is_alphabetic) {
            return word.to_string();
        }
        match Self::apply_suffix_rules(word) {
            // "mens" strips to "men", which still has an irregular lemma
            Some(stem) => match self.irregular.get(stem.as_str()) {
                Some(lemma) => (*lemma).to_string(),
                None => stem,
            },
            None => word.to_string(),
        }
    }
}

/// Irregular plural forms. No value may appear as a key.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("people", "person"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("oxen", "ox"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("wolves", "wolf"),
    ("thieves", "thief"),
    ("loaves", "loaf"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("heroes", "hero"),
    ("echoes", "echo"),
    ("buses", "bus"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("calories", "calorie"),
    ("hoodies", "hoodie"),
    ("selfies", "selfie"),
    ("brownies", "brownie"),
    ("goodies", "goodie"),
    ("freebies", "freebie"),
];

/// Words ending in "s" that must not lose it.
const INVARIANT_WORDS: &[&str] = &[
    "news", "series", "species", "lens", "always", "perhaps", "sometimes", "afterwards",
    "towards", "besides", "whereas", "nevertheless", "headquarters", "means", "physics",
    "electronics", "mathematics", "economics", "politics", "thanks", "pants", "jeans",
    "scissors", "glasses", "clothes", "sales",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        let l = RuleLemmatizer::english();
        assert_eq!(l.lemmatize("products"), "product");
        assert_eq!(l.lemmatize("stars"), "star");
        assert_eq!(l.lemmatize("houses"), "house");
        assert_eq!(l.lemmatize("ties"), "tie");
    }

    #[test]
    fn test_sibilant_plurals() {
        let l = RuleLemmatizer::english();
        assert_eq!(l.lemmatize("boxes"), "box");
        assert_eq!(l.lemmatize("watches"), "watch");
        assert_eq!(l.lemmatize("dishes"), "dish");
        assert_eq!(l.lemmatize("classes"), "class");
    }

    #[test]
    fn test_ies_plural() {
        let l = RuleLemmatizer::english();
        assert_eq!(l.lemmatize("batteries"), "battery");
        assert_eq!(l.lemmatize("deliveries"), "delivery");
    }

    #[test]
    fn test_guards_leave_word_unchanged() {
        let l = RuleLemmatizer::english();
        for word in ["glass", "status", "analysis", "gas", "bus", "news", "always", "amazing"] {
            assert_eq!(l.lemmatize(word), word, "{word} should be unchanged");
        }
    }

    #[test]
    fn test_non_alphabetic_untouched() {
        let l = RuleLemmatizer::english();
        assert_eq!(l.lemmatize("product's"), "product's");
        assert_eq!(l.lemmatize("90s"), "90s");
    }

    #[test]
    fn test_irregular() {
        let l = RuleLemmatizer::english();
        assert_eq!(l.lemmatize("people"), "person");
        assert_eq!(l.lemmatize("knives"), "knife");
        assert_eq!(l.lemmatize("movies"), "movie");
        assert!(l.irregular_count() > 20);
    }

    #[test]
    fn test_irregular_values_are_fixed_points() {
        let l = RuleLemmatizer::english();
        for (_, lemma) in IRREGULAR_FORMS {
            assert_eq!(l.lemmatize(lemma), *lemma, "{lemma} is not a fixed point");
        }
    }

    #[test]
    fn test_idempotent() {
        let l = RuleLemmatizer::english();
        let words = [
            "works", "batteries", "boxes", "glasses", "children", "perfectly", "chargers",
            "buzzes", "potatoes", "ties", "cases", "mens", "childrens", "peoples", "womens",
        ];
        for word in words {
            let once = l.lemmatize(word);
            let twice = l.lemmatize(&once);
            assert_eq!(once, twice, "lemmatize({word}) is not idempotent");
        }
    }

    #[test]
    fn test_regular_suffix_on_irregular_plural() {
        let l = RuleLemmatizer::english();
        assert_eq!(l.lemmatize("mens"), "man");
        assert_eq!(l.lemmatize("childrens"), "child");
        assert_eq!(l.lemmatize("peoples"), "person");
        assert_eq!(l.lemmatize("feets"), "foot");
    }

    #[test]
    fn test_idempotent_on_suffixed_table_entries() {
        let l = RuleLemmatizer::english();
        for (form, lemma) in IRREGULAR_FORMS {
            for word in [*form, *lemma] {
                for suffix in ["", "s", "es"] {
                    let word = format!("{word}{suffix}");
                    let once = l.lemmatize(&word);
                    let twice = l.lemmatize(&once);
                    assert_eq!(once, twice, "lemmatize({word}) is not idempotent");
                }
            }
        }
    }

    #[test]
    fn test_lemmatize_tokens() {
        let l = RuleLemmatizer::english();
        let tokens = vec!["product", "works", "perfectly"];
        assert_eq!(l.lemmatize_tokens(&tokens), vec!["product", "work", "perfectly"]);
    }
}
