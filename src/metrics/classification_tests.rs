use super::*;
use crate::classification::Label::{Negative, Positive};

const EPS: f64 = 1e-12;

#[test]
fn test_perfect_predictions() {
    let y = vec![Positive, Negative, Positive, Negative];
    let report = evaluate(&y, &y).expect("valid input");
    assert!((report.accuracy() - 1.0).abs() < EPS);
    for label in Label::ALL {
        let m = report.class(label);
        assert!((m.precision - 1.0).abs() < EPS);
        assert!((m.recall - 1.0).abs() < EPS);
        assert!((m.f1 - 1.0).abs() < EPS);
        assert_eq!(m.support, 2);
    }
    assert_eq!(report.confusion_matrix(), [[2, 0], [0, 2]]);
    assert!(!report.is_degenerate());
}

#[test]
fn test_mixed_predictions() {
    let y_true = vec![Positive, Positive, Positive, Negative, Negative];
    let y_pred = vec![Positive, Positive, Negative, Negative, Positive];
    let report = evaluate(&y_true, &y_pred).expect("valid input");

    assert!((report.accuracy() - 0.6).abs() < EPS);
    // positive: tp=2, fp=1, fn=1
    let pos = report.class(Positive);
    assert!((pos.precision - 2.0 / 3.0).abs() < EPS);
    assert!((pos.recall - 2.0 / 3.0).abs() < EPS);
    assert_eq!(pos.support, 3);
    // negative: tp=1, fp=1, fn=1
    let neg = report.class(Negative);
    assert!((neg.precision - 0.5).abs() < EPS);
    assert!((neg.recall - 0.5).abs() < EPS);
    assert_eq!(neg.support, 2);

    assert_eq!(report.confusion_matrix(), [[1, 1], [1, 2]]);
    assert_eq!(report.n_samples(), 5);
}

#[test]
fn test_averages() {
    let y_true = vec![Positive, Positive, Positive, Negative, Negative];
    let y_pred = vec![Positive, Positive, Negative, Negative, Positive];
    let report = evaluate(&y_true, &y_pred).expect("valid input");

    let pos_f1 = report.class(Positive).f1;
    let neg_f1 = report.class(Negative).f1;
    assert!((report.macro_avg().f1 - (pos_f1 + neg_f1) / 2.0).abs() < EPS);
    assert!((report.weighted_avg().f1 - (3.0 * pos_f1 + 2.0 * neg_f1) / 5.0).abs() < EPS);
    // weighted recall equals accuracy
    assert!((report.weighted_avg().recall - report.accuracy()).abs() < EPS);
}

#[test]
fn test_never_predicted_class_uses_zero_policy() {
    let y_true = vec![Positive, Negative, Positive];
    let y_pred = vec![Negative, Negative, Negative];
    let report = evaluate(&y_true, &y_pred).expect("valid input");

    let pos = report.class(Positive);
    assert_eq!(pos.precision, 0.0);
    assert_eq!(pos.recall, 0.0);
    assert_eq!(pos.f1, 0.0);
    assert!(report.is_degenerate());
    assert_eq!(
        report.warnings(),
        &[EvaluationWarning::UndefinedPrecision { label: Positive }]
    );
}

#[test]
fn test_one_policy() {
    let y_true = vec![Positive, Negative, Positive];
    let y_pred = vec![Negative, Negative, Negative];
    let report = evaluate_with(&y_true, &y_pred, ZeroDivision::One).expect("valid input");
    let pos = report.class(Positive);
    assert_eq!(pos.precision, 1.0);
    assert_eq!(pos.recall, 0.0);
    assert_eq!(pos.f1, 0.0);
}

#[test]
fn test_absent_true_class() {
    let y_true = vec![Negative, Negative];
    let y_pred = vec![Negative, Negative];
    let report = evaluate(&y_true, &y_pred).expect("valid input");
    assert_eq!(report.class(Positive).support, 0);
    assert!(report
        .warnings()
        .contains(&EvaluationWarning::UndefinedRecall { label: Positive }));
    assert!(report
        .warnings()
        .contains(&EvaluationWarning::UndefinedPrecision { label: Positive }));
    assert!((report.accuracy() - 1.0).abs() < EPS);
}

#[test]
fn test_no_nan_anywhere() {
    let cases: Vec<(Vec<Label>, Vec<Label>)> = vec![
        (vec![Positive], vec![Negative]),
        (vec![Negative], vec![Negative]),
        (vec![Positive, Positive], vec![Negative, Negative]),
    ];
    for (y_true, y_pred) in cases {
        for policy in [ZeroDivision::Zero, ZeroDivision::One] {
            let report = evaluate_with(&y_true, &y_pred, policy).expect("valid input");
            let mut values = vec![report.accuracy()];
            for label in Label::ALL {
                let m = report.class(label);
                values.extend([m.precision, m.recall, m.f1]);
            }
            for avg in [report.macro_avg(), report.weighted_avg()] {
                values.extend([avg.precision, avg.recall, avg.f1]);
            }
            assert!(values.iter().all(|v| v.is_finite()), "{values:?}");
        }
    }
}

#[test]
fn test_rejects_bad_input() {
    assert!(matches!(evaluate(&[], &[]), Err(SentirError::EmptyInput(_))));
    assert!(matches!(
        evaluate(&[Positive, Negative], &[Positive]),
        Err(SentirError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_display_table() {
    let y = vec![Positive, Negative];
    let text = evaluate(&y, &y).expect("valid input").to_string();
    assert!(text.contains("precision"));
    assert!(text.contains("negative"));
    assert!(text.contains("positive"));
    assert!(text.contains("accuracy"));
    assert!(text.contains("macro avg"));
    assert!(text.contains("weighted avg"));
    assert!(text.contains("1.00"));
}

#[test]
fn test_zero_division_serde() {
    let json = serde_json::to_string(&ZeroDivision::One).expect("serialize");
    assert_eq!(json, "\"one\"");
    assert_eq!(ZeroDivision::default(), ZeroDivision::Zero);
}
