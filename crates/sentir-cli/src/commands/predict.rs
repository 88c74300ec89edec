//! Predict command implementation

use crate::error::Result;
use crate::output;
use colored::Colorize;
use sentir::config::PipelineConfig;
use std::path::Path;

/// Longest review excerpt shown next to a prediction
const EXCERPT_CHARS: usize = 60;

/// Run the predict command
pub(crate) fn run(config: PipelineConfig, data: Option<&Path>, texts: &[String]) -> Result<()> {
    let fitted = super::fit(config, data)?;

    for (text, predictions) in texts.iter().zip(fitted.predict_batch(texts)?) {
        output::section(&output::truncate(text, EXCERPT_CHARS));
        if let Some(first) = predictions.first() {
            let normalized = if first.normalized.is_empty() {
                "(no tokens)".dimmed().to_string()
            } else {
                first.normalized.clone()
            };
            output::kv("Normalized", normalized);
        }
        for prediction in &predictions {
            println!(
                "  {:<20} {}  p(positive) = {:.3}",
                prediction.model,
                output::label(prediction.label),
                prediction.probability
            );
        }
    }
    Ok(())
}
