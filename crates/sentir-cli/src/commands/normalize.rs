//! Normalize command implementation

use crate::error::Result;
use sentir::text::Normalizer;

/// Print each text's normalized form, one per line.
pub(crate) fn run(texts: &[String]) -> Result<()> {
    let normalizer = Normalizer::english();
    for text in texts {
        println!("{}", normalizer.normalize_to_text(text));
    }
    Ok(())
}
