//! Command implementations

pub(crate) mod normalize;
pub(crate) mod predict;
pub(crate) mod train;

use crate::error::{CliError, Result};
use sentir::config::PipelineConfig;
use sentir::data::Dataset;
use sentir::pipeline::{FittedPipeline, SentimentPipeline};
use std::path::Path;

/// Load `path`, or the built-in sample corpus when no path is given.
pub(crate) fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.to_path_buf()));
            }
            Ok(Dataset::from_csv_path(path)?)
        }
        None => Ok(Dataset::sample()),
    }
}

/// Fit the full pipeline on the chosen dataset.
pub(crate) fn fit(config: PipelineConfig, data: Option<&Path>) -> Result<FittedPipeline> {
    let dataset = load_dataset(data)?;
    tracing::debug!(reviews = dataset.len(), "loaded dataset");
    Ok(SentimentPipeline::new(config).fit(&dataset)?)
}
