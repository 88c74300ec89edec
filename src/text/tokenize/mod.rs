//! Tokenization algorithms for text preprocessing.
//!
//! This module provides two tokenization strategies:
//! - Whitespace tokenization (splits on Unicode whitespace), used to re-read
//!   already-normalized text
//! - Word tokenization (alphanumeric runs + standalone punctuation), used on
//!   raw review text
//!
//! Both implement the [`Tokenizer`] trait and never fail: any string,
//! including the empty string, yields a (possibly empty) token list.

use crate::text::Tokenizer;

/// Whitespace tokenizer that splits text on Unicode whitespace characters.
///
/// It preserves punctuation attached to words.
///
/// # Examples
///
/// ```
/// use sentir::text::{Tokenizer, tokenize::WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
///
/// assert_eq!(tokenizer.tokenize("Hello, world!"), vec!["Hello,", "world!"]);
/// assert_eq!(tokenizer.tokenize("line1\nline2\ttab"), vec!["line1", "line2", "tab"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(ToString::to_string).collect()
    }
}

/// Word tokenizer that splits on whitespace and separates punctuation.
///
/// - Splits on Unicode whitespace
/// - Emits every other non-alphanumeric character as its own token
/// - Keeps ASCII apostrophes inside words (e.g. "don't" stays together)
///
/// # Examples
///
/// ```
/// use sentir::text::{Tokenizer, tokenize::WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
///
/// assert_eq!(tokenizer.tokenize("Hello, world!"), vec!["Hello", ",", "world", "!"]);
/// assert_eq!(tokenizer.tokenize("I don't know."), vec!["I", "don't", "know", "."]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Characters that end a word and form a token of their own.
    fn is_separator(c: char) -> bool {
        !c.is_alphanumeric() && !c.is_whitespace() && c != '\''
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for ch in text.chars() {
            if ch.is_whitespace() {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            } else if Self::is_separator(ch) {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
                tokens.push(ch.to_string());
            } else {
                current.push(ch);
            }
        }

        if !current.is_empty() {
            tokens.push(current);
        }

        tokens
    }
}

#[cfg(test)]
mod tests;
