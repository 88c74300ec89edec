//! Binary sentiment label.

use crate::error::{Result, SentirError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of exactly two sentiment classes.
///
/// Class indices follow the sorted order of the string forms:
/// `negative = 0`, `positive = 1`.
///
/// # Examples
///
/// ```
/// use sentir::classification::Label;
///
/// let label: Label = "Positive".parse().expect("known label");
/// assert_eq!(label, Label::Positive);
/// assert_eq!(label.index(), 1);
/// assert!("neutral".parse::<Label>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Negative sentiment (class index 0)
    Negative,
    /// Positive sentiment (class index 1)
    Positive,
}

impl Label {
    /// Both labels in class-index order.
    pub const ALL: [Label; 2] = [Label::Negative, Label::Positive];

    /// Class index used by the models.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Negative => 0,
            Self::Positive => 1,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Positive => "positive",
        }
    }

    /// The opposite class.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = SentirError;

    /// Accepts the two names with surrounding whitespace, in any letter case.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("positive") {
            Ok(Self::Positive)
        } else if trimmed.eq_ignore_ascii_case("negative") {
            Ok(Self::Negative)
        } else {
            Err(SentirError::InvalidLabel {
                value: s.to_string(),
            })
        }
    }
}
