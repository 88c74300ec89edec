//! Train command implementation
//!
//! Fits both classifiers and prints the split, one report per model and
//! every warning raised along the way.

use crate::error::Result;
use crate::output;
use colored::Colorize;
use sentir::config::PipelineConfig;
use sentir::pipeline::FittedPipeline;
use std::path::Path;

/// Run the train command
pub(crate) fn run(config: PipelineConfig, data: Option<&Path>) -> Result<()> {
    let fitted = super::fit(config, data)?;
    print_summary(&fitted);
    print_reports(&fitted);
    print_warnings(&fitted);
    Ok(())
}

fn print_summary(fitted: &FittedPipeline) {
    let config = fitted.config();
    let split = fitted.split();

    output::section("Dataset");
    output::kv("Reviews", split.len());
    output::kv("Train", split.train.len());
    output::kv("Test", split.test.len());
    output::kv("Test size", config.test_size);
    output::kv("Seed", config.random_state);
    output::kv("Vocabulary", fitted.vectorizer().dimension());
}

fn print_reports(fitted: &FittedPipeline) {
    for entry in fitted.models() {
        output::section(entry.name);
        output::kv(
            "Accuracy",
            format!("{:.4}", entry.report.accuracy()).green().bold(),
        );
        println!();
        print!("{}", entry.report);

        let cm = entry.report.confusion_matrix();
        println!();
        println!("  Confusion matrix (rows = true, columns = predicted):");
        println!("  {:>10} {:>10} {:>10}", "", "negative", "positive");
        println!("  {:>10} {:>10} {:>10}", "negative", cm[0][0], cm[0][1]);
        println!("  {:>10} {:>10} {:>10}", "positive", cm[1][0], cm[1][1]);
    }
}

fn print_warnings(fitted: &FittedPipeline) {
    if fitted.warnings().is_empty() {
        return;
    }
    output::section("Warnings");
    for warning in fitted.warnings() {
        output::warning(&warning.to_string());
    }
}
