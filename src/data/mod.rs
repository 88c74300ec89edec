//! Review datasets: in-memory construction, CSV loading and the built-in
//! sample corpus.
//!
//! CSV input must start with the header `review,sentiment` (in that order)
//! and hold exactly two fields per row. Sentiment values are `positive` or
//! `negative`, compared case-insensitively after trimming. Any malformed row
//! aborts loading with the offending line number.

use crate::classification::Label;
use crate::error::{Result, SentirError};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Expected CSV header, in order.
pub const CSV_HEADER: [&str; 2] = ["review", "sentiment"];

/// One review, optionally labeled. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Raw review text.
    pub text: String,
    /// Known sentiment, if any.
    pub label: Option<Label>,
}

impl Review {
    /// Labeled review.
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self {
            text: text.into(),
            label: Some(label),
        }
    }

    /// Review without a known sentiment.
    pub fn unlabeled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    review: String,
    sentiment: String,
}

/// Ordered collection of reviews.
///
/// # Examples
///
/// ```
/// use sentir::classification::Label;
/// use sentir::data::Dataset;
///
/// let csv = "review,sentiment\nGreat value,positive\nBroke in a day,NEGATIVE\n";
/// let dataset = Dataset::from_reader(csv.as_bytes()).expect("well-formed CSV");
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(
///     dataset.labels().expect("all labeled"),
///     vec![Label::Positive, Label::Negative]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    reviews: Vec<Review>,
}

impl Dataset {
    /// Wrap existing reviews.
    #[must_use]
    pub fn new(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    /// Build from `(text, label)` literals.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Label)>,
        S: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(text, label)| Review::new(text, label))
                .collect(),
        )
    }

    /// Load a `review,sentiment` CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or any row is malformed.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;
        tracing::debug!(path = %path.display(), reviews = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// Parse `review,sentiment` CSV from any reader.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::Dataset`] for a wrong header, a row with the
    /// wrong number of fields, or an unknown sentiment value, and
    /// [`SentirError::Csv`] for unreadable input.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let found: Vec<&str> = headers.iter().collect();
        if found != CSV_HEADER {
            return Err(SentirError::Dataset {
                line: 1,
                message: format!(
                    "expected header \"{}\", found \"{}\"",
                    CSV_HEADER.join(","),
                    found.join(",")
                ),
            });
        }

        let mut reviews = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, csv::Position::line);

            if record.len() != CSV_HEADER.len() {
                return Err(SentirError::Dataset {
                    line,
                    message: format!(
                        "expected {} fields, found {}",
                        CSV_HEADER.len(),
                        record.len()
                    ),
                });
            }

            let row: CsvRow = record.deserialize(Some(&headers))?;
            let label = row
                .sentiment
                .parse::<Label>()
                .map_err(|err| SentirError::Dataset {
                    line,
                    message: err.to_string(),
                })?;
            reviews.push(Review {
                text: row.review,
                label: Some(label),
            });
        }

        Ok(Self::new(reviews))
    }

    /// The built-in balanced corpus of 20 short product reviews.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_pairs(SAMPLE_REVIEWS.iter().copied())
    }

    /// Number of reviews.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// True when there are no reviews.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// All reviews in order.
    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Review texts in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.reviews.iter().map(|r| r.text.as_str()).collect()
    }

    /// Labels in order.
    ///
    /// # Errors
    ///
    /// Returns [`SentirError::InvalidInput`] naming the first unlabeled row.
    pub fn labels(&self) -> Result<Vec<Label>> {
        self.reviews
            .iter()
            .enumerate()
            .map(|(row, review)| {
                review.label.ok_or_else(|| {
                    SentirError::InvalidInput(format!("review at row {row} has no label"))
                })
            })
            .collect()
    }

    /// Number of labeled reviews per class, indexed by [`Label::index`].
    #[must_use]
    pub fn label_counts(&self) -> [usize; 2] {
        let mut counts = [0; 2];
        for label in self.reviews.iter().filter_map(|r| r.label) {
            counts[label.index()] += 1;
        }
        counts
    }
}

const SAMPLE_REVIEWS: [(&str, Label); 20] = [
    ("This product is amazing and works perfectly", Label::Positive),
    ("Great quality, I love it", Label::Positive),
    ("Excellent value for the money, highly recommend", Label::Positive),
    ("The battery lasts forever, great product", Label::Positive),
    ("Fast shipping and the item looks beautiful", Label::Positive),
    ("Absolutely fantastic, exceeded my expectations", Label::Positive),
    ("Very comfortable and easy to use", Label::Positive),
    ("Best purchase I have made this year", Label::Positive),
    ("Sturdy build and great customer service", Label::Positive),
    ("My kids love this toy, wonderful gift", Label::Positive),
    ("Terrible product, broke after two days", Label::Negative),
    ("Very disappointed, it does not work at all", Label::Negative),
    ("Cheap material and poor quality", Label::Negative),
    ("Waste of money, would not recommend", Label::Negative),
    ("The battery died within a week, awful", Label::Negative),
    ("Arrived damaged and customer service was useless", Label::Negative),
    ("Horrible experience, the product stopped working", Label::Negative),
    ("Uncomfortable and smells bad", Label::Negative),
    ("Worst purchase ever, returning it", Label::Negative),
    ("Flimsy and overpriced, not worth it", Label::Negative),
];
