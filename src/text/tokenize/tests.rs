use super::*;

// ========== WhitespaceTokenizer Tests ==========

#[test]
fn test_whitespace_tokenizer_basic() {
    let tokenizer = WhitespaceTokenizer::new();
    assert_eq!(tokenizer.tokenize("product great"), vec!["product", "great"]);
}

#[test]
fn test_whitespace_tokenizer_multiple_spaces() {
    let tokenizer = WhitespaceTokenizer::new();
    assert_eq!(tokenizer.tokenize("  foo   bar "), vec!["foo", "bar"]);
}

#[test]
fn test_whitespace_tokenizer_empty_string() {
    let tokenizer = WhitespaceTokenizer::new();
    assert_eq!(tokenizer.tokenize(""), Vec::<String>::new());
    assert_eq!(tokenizer.tokenize("   \n\t  "), Vec::<String>::new());
}

// ========== WordTokenizer Tests ==========

#[test]
fn test_word_tokenizer_separates_punctuation() {
    let tokenizer = WordTokenizer::new();
    assert_eq!(
        tokenizer.tokenize("This product is great!"),
        vec!["This", "product", "is", "great", "!"]
    );
}

#[test]
fn test_word_tokenizer_keeps_contractions() {
    let tokenizer = WordTokenizer::new();
    assert_eq!(
        tokenizer.tokenize("It doesn't work."),
        vec!["It", "doesn't", "work", "."]
    );
}

#[test]
fn test_word_tokenizer_consecutive_punctuation() {
    let tokenizer = WordTokenizer::new();
    assert_eq!(tokenizer.tokenize("Wow!!"), vec!["Wow", "!", "!"]);
    assert_eq!(tokenizer.tokenize("(ok)"), vec!["(", "ok", ")"]);
}

#[test]
fn test_word_tokenizer_unicode_punctuation_is_separator() {
    let tokenizer = WordTokenizer::new();
    assert_eq!(
        tokenizer.tokenize("great…really"),
        vec!["great", "…", "really"]
    );
    assert_eq!(tokenizer.tokenize("don’t"), vec!["don", "’", "t"]);
}

#[test]
fn test_word_tokenizer_keeps_digits_in_words() {
    let tokenizer = WordTokenizer::new();
    assert_eq!(
        tokenizer.tokenize("5 stars, 10/10"),
        vec!["5", "stars", ",", "10", "/", "10"]
    );
}

#[test]
fn test_word_tokenizer_empty() {
    let tokenizer = WordTokenizer::new();
    assert!(tokenizer.tokenize("").is_empty());
    assert!(tokenizer.tokenize(" \t\n").is_empty());
}
