//! sentir - review sentiment from the command line
//!
//! Usage:
//!   sentir normalize "This product is amazing"     # Show normalized tokens
//!   sentir train                                   # Fit and evaluate on the sample corpus
//!   sentir train --data reviews.csv --seed 7       # Fit and evaluate on a CSV file
//!   sentir predict "Great battery" "Broke fast"    # Label novel reviews
//!
//! Set `RUST_LOG` (or pass `-v`) to see fit progress.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

use commands::{normalize, predict, train};
use error::CliError;
use sentir::config::PipelineConfig;

/// sentir - classify product reviews as positive or negative
///
/// Normalizes review text, builds TF-IDF features, and trains a naive
/// Bayes and a logistic regression classifier side by side.
#[derive(Parser)]
#[command(name = "sentir")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON pipeline configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the normalized form of each text
    Normalize {
        /// Review texts
        #[arg(value_name = "TEXT", required = true)]
        texts: Vec<String>,
    },

    /// Fit both classifiers and print their held-out evaluation
    Train {
        /// CSV file with a `review,sentiment` header (defaults to the built-in sample)
        #[arg(long, value_name = "CSV")]
        data: Option<PathBuf>,

        /// Fraction of reviews held out for evaluation
        #[arg(long)]
        test_size: Option<f64>,

        /// Shuffle seed for the train/test split
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Fit, then label each text with every classifier
    Predict {
        /// CSV file with a `review,sentiment` header (defaults to the built-in sample)
        #[arg(long, value_name = "CSV")]
        data: Option<PathBuf>,

        /// Review texts
        #[arg(value_name = "TEXT", required = true)]
        texts: Vec<String>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn load_config(path: Option<&PathBuf>) -> Result<PipelineConfig, CliError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.clone()));
            }
            Ok(PipelineConfig::from_json_file(path)?)
        }
        None => Ok(PipelineConfig::default()),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Normalize { texts } => normalize::run(&texts),

        Commands::Train {
            data,
            test_size,
            seed,
        } => {
            let mut config = load_config(cli.config.as_ref())?;
            if let Some(test_size) = test_size {
                config = config.with_test_size(test_size);
            }
            if let Some(seed) = seed {
                config = config.with_random_state(seed);
            }
            train::run(config, data.as_deref())
        }

        Commands::Predict { data, texts } => {
            let config = load_config(cli.config.as_ref())?;
            predict::run(config, data.as_deref(), &texts)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            e.exit_code()
        }
    }
}
