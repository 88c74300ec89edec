pub(crate) use super::*;
use crate::warning::FitWarning;

fn corpus() -> Vec<&'static str> {
    vec!["product great", "product terrible", "battery great"]
}

#[test]
fn test_vocabulary_sorted_and_deduplicated() {
    let vocab = Vocabulary::from_terms(["zeta", "alpha", "mid", "alpha"]);
    assert_eq!(vocab.len(), 3);
    assert_eq!(vocab.get("alpha"), Some(0));
    assert_eq!(vocab.get("mid"), Some(1));
    assert_eq!(vocab.get("zeta"), Some(2));
    assert_eq!(vocab.term(1), Some("mid"));
    assert!(vocab.get("missing").is_none());
}

#[test]
fn test_vocabulary_iter_in_index_order() {
    let vocab = Vocabulary::from_terms(["b", "a"]);
    let pairs: Vec<_> = vocab.iter().collect();
    assert_eq!(pairs, vec![("a", 0), ("b", 1)]);
}

#[test]
fn test_fit_dimension_equals_vocabulary() {
    let fitted = TfidfVectorizer::new().fit(&corpus()).expect("fit should succeed");
    assert_eq!(fitted.dimension(), 4);
    assert_eq!(fitted.vocabulary().len(), 4);
    assert_eq!(fitted.idf().len(), 4);
    assert_eq!(fitted.n_documents(), 3);
    assert!(fitted.warnings().is_empty());
}

#[test]
fn test_smooth_idf_values() {
    let fitted = TfidfVectorizer::new().fit(&corpus()).expect("fit should succeed");
    let vocab = fitted.vocabulary();

    // product: df = 2 of N = 3
    let product = vocab.get("product").expect("in vocabulary");
    let expected = (4.0_f64 / 3.0).ln() + 1.0;
    assert!((fitted.idf()[product] - expected).abs() < 1e-12);

    // terrible: df = 1
    let terrible = vocab.get("terrible").expect("in vocabulary");
    let expected = (4.0_f64 / 2.0).ln() + 1.0;
    assert!((fitted.idf()[terrible] - expected).abs() < 1e-12);
}

#[test]
fn test_rare_terms_weigh_more() {
    let fitted = TfidfVectorizer::new().fit(&corpus()).expect("fit should succeed");
    let vocab = fitted.vocabulary();
    let product = vocab.get("product").expect("in vocabulary");
    let terrible = vocab.get("terrible").expect("in vocabulary");
    assert!(fitted.idf()[terrible] > fitted.idf()[product]);
}

#[test]
fn test_transform_is_unit_length() {
    let fitted = TfidfVectorizer::new().fit(&corpus()).expect("fit should succeed");
    let v = fitted.transform("product great great");
    assert_eq!(v.dim(), 4);
    assert_eq!(v.nnz(), 2);
    assert!((v.l2_norm() - 1.0).abs() < 1e-12);
    assert!(v.is_non_negative());
}

#[test]
fn test_transform_without_norm_is_raw_weight() {
    let fitted = TfidfVectorizer::new()
        .with_norm(Norm::None)
        .fit(&corpus())
        .expect("fit should succeed");
    let great = fitted.vocabulary().get("great").expect("in vocabulary");
    let v = fitted.transform("great great");
    assert!((v.get(great) - 2.0 * fitted.idf()[great]).abs() < 1e-12);
}

#[test]
fn test_sublinear_tf() {
    let fitted = TfidfVectorizer::new()
        .with_norm(Norm::None)
        .with_sublinear_tf(true)
        .fit(&corpus())
        .expect("fit should succeed");
    let great = fitted.vocabulary().get("great").expect("in vocabulary");
    let v = fitted.transform("great great great");
    let expected = (1.0 + 3.0_f64.ln()) * fitted.idf()[great];
    assert!((v.get(great) - expected).abs() < 1e-12);
}

#[test]
fn test_unknown_tokens_give_zero_vector() {
    let fitted = TfidfVectorizer::new().fit(&corpus()).expect("fit should succeed");
    let v = fitted.transform("completely unseen words");
    assert_eq!(v.dim(), fitted.dimension());
    assert!(v.is_zero());

    let empty = fitted.transform("");
    assert_eq!(empty.dim(), fitted.dimension());
    assert!(empty.is_zero());
}

#[test]
fn test_transform_is_deterministic() {
    let fitted = TfidfVectorizer::new().fit(&corpus()).expect("fit should succeed");
    assert_eq!(fitted.transform("battery great"), fitted.transform("battery great"));
}

#[test]
fn test_fit_transform_matches_separate_calls() {
    let vectorizer = TfidfVectorizer::new();
    let (fitted, vectors) = vectorizer
        .fit_transform(&corpus())
        .expect("fit_transform should succeed");
    assert_eq!(vectors.len(), 3);
    assert_eq!(vectors, fitted.transform_batch(&corpus()));
}

#[test]
fn test_min_df_filters_rare_terms() {
    let fitted = TfidfVectorizer::new()
        .with_min_df(2)
        .fit(&corpus())
        .expect("fit should succeed");
    assert_eq!(fitted.dimension(), 2);
    assert!(fitted.vocabulary().contains("product"));
    assert!(fitted.vocabulary().contains("great"));
    assert!(!fitted.vocabulary().contains("battery"));
}

#[test]
fn test_max_features_keeps_most_frequent() {
    let docs = vec!["good good good fine", "good fine okay", "okay"];
    let fitted = TfidfVectorizer::new()
        .with_max_features(Some(2))
        .fit(&docs)
        .expect("fit should succeed");
    assert_eq!(fitted.dimension(), 2);
    assert!(fitted.vocabulary().contains("good"));
    // fine and okay both occur twice; lexicographic order decides
    assert!(fitted.vocabulary().contains("fine"));
    assert!(!fitted.vocabulary().contains("okay"));
}

#[test]
fn test_invalid_settings_rejected() {
    assert!(TfidfVectorizer::new()
        .with_max_features(Some(0))
        .fit(&corpus())
        .is_err());
    assert!(TfidfVectorizer::new().with_min_df(0).fit(&corpus()).is_err());
}

#[test]
fn test_empty_corpus_warns() {
    let empty: Vec<&str> = Vec::new();
    let fitted = TfidfVectorizer::new().fit(&empty).expect("fit should succeed");
    assert_eq!(fitted.dimension(), 0);
    assert!(matches!(
        fitted.warnings(),
        [FitWarning::EmptyVocabulary { documents: 0 }]
    ));
    assert_eq!(fitted.transform("anything").dim(), 0);
}

#[test]
fn test_blank_documents_warn() {
    let fitted = TfidfVectorizer::new()
        .fit(&["", "   "])
        .expect("fit should succeed");
    assert!(fitted.vocabulary().is_empty());
    assert_eq!(fitted.warnings().len(), 1);
}

#[test]
fn test_vocabulary_grows_with_corpus() {
    let small = TfidfVectorizer::new().fit(&corpus()).expect("fit should succeed");
    let mut bigger = corpus();
    bigger.push("screen flicker");
    let large = TfidfVectorizer::new().fit(&bigger).expect("fit should succeed");
    assert!(large.dimension() >= small.dimension());
    for (term, _) in small.vocabulary().iter() {
        assert!(large.vocabulary().contains(term));
    }
}

#[test]
fn test_settings_roundtrip_json() {
    let settings = TfidfVectorizer::new().with_norm(Norm::None).with_min_df(2);
    let json = serde_json::to_string(&settings).expect("serialize");
    assert!(json.contains("\"none\""));
    let back: TfidfVectorizer = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, settings);
}
