//! Normalized title keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower-cased, whitespace-trimmed projection of a title.
///
/// Used only as a join key against the poster table, never for display.
///
/// ```
/// use recomenda::catalog::NormalizedTitle;
///
/// let key = NormalizedTitle::new("  The Dark Knight ");
/// assert_eq!(key.as_str(), "the dark knight");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedTitle(String);

impl NormalizedTitle {
    /// Normalize a raw title.
    pub fn new(title: &str) -> Self {
        NormalizedTitle(title.to_lowercase().trim().to_string())
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key and return its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for NormalizedTitle {
    fn from(title: &str) -> Self {
        NormalizedTitle::new(title)
    }
}

impl AsRef<str> for NormalizedTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
