//! CLI integration tests for the `sentir` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn sentir() -> Command {
    let mut cmd = Command::cargo_bin("sentir").expect("sentir binary");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn write_csv(rows: &[(&str, &str)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "review,sentiment").expect("write");
    for (review, sentiment) in rows {
        writeln!(file, "\"{review}\",{sentiment}").expect("write");
    }
    file
}

#[test]
fn test_help_lists_subcommands() {
    sentir()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("normalize"))
        .stdout(predicate::str::contains("train"))
        .stdout(predicate::str::contains("predict"));
}

#[test]
fn test_normalize_prints_one_line_per_text() {
    sentir()
        .args([
            "normalize",
            "This product is amazing and works perfectly",
            "is the and",
        ])
        .assert()
        .success()
        .stdout("product amazing work perfectly\n\n");
}

#[test]
fn test_normalize_requires_text() {
    sentir().arg("normalize").assert().failure();
}

#[test]
fn test_train_on_sample() {
    sentir()
        .arg("train")
        .assert()
        .success()
        .stdout(predicate::str::contains("naive_bayes"))
        .stdout(predicate::str::contains("logistic_regression"))
        .stdout(predicate::str::contains("accuracy"))
        .stdout(predicate::str::contains("Test: 5"));
}

#[test]
fn test_train_test_size_override() {
    sentir()
        .args(["train", "--test-size", "0.5", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test: 10"));
}

#[test]
fn test_train_rejects_bad_test_size() {
    sentir()
        .args(["train", "--test-size", "1.5"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("test_size"));
}

#[test]
fn test_predict_labels_every_text() {
    sentir()
        .args(["predict", "This product is great!", "is the and"])
        .assert()
        .success()
        .stdout(predicate::str::contains("product great"))
        .stdout(predicate::str::contains("(no tokens)"))
        .stdout(predicate::str::contains("p(positive)").count(4));
}

#[test]
fn test_predict_with_csv() {
    let mut rows = Vec::new();
    for _ in 0..10 {
        rows.push(("Great sound, love it", "positive"));
        rows.push(("Awful sound, hate it", "negative"));
    }
    let file = write_csv(&rows);

    sentir()
        .args(["predict", "--data"])
        .arg(file.path())
        .arg("love the sound")
        .assert()
        .success()
        .stdout(predicate::str::contains("positive"))
        .stdout(predicate::str::contains("negative").not());
}

#[test]
fn test_malformed_csv_fails() {
    let file = write_csv(&[("Fine", "positive"), ("Odd", "maybe")]);

    sentir()
        .args(["train", "--data"])
        .arg(file.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("line 3"));
}

#[test]
fn test_missing_data_file() {
    sentir()
        .args(["train", "--data", "/nonexistent/reviews.csv"])
        .assert()
        .code(3);
}

#[test]
fn test_config_file() {
    let mut config = NamedTempFile::new().expect("temp file");
    write!(config, r#"{{ "test_size": 0.5 }}"#).expect("write");

    sentir()
        .arg("--config")
        .arg(config.path())
        .arg("train")
        .assert()
        .success()
        .stdout(predicate::str::contains("Test: 10"));
}

#[test]
fn test_config_file_unknown_field() {
    let mut config = NamedTempFile::new().expect("temp file");
    write!(config, r#"{{ "test_fraction": 0.5 }}"#).expect("write");

    sentir()
        .arg("--config")
        .arg(config.path())
        .arg("train")
        .assert()
        .code(5);
}
