//! The poster metadata table.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::title::NormalizedTitle;

/// A poster row: normalized title key and poster URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterCatalogEntry {
    pub title: NormalizedTitle,
    pub poster_url: String,
}

impl PosterCatalogEntry {
    /// Create an entry, normalizing the raw title.
    pub fn new<S: Into<String>>(title: &str, poster_url: S) -> Self {
        PosterCatalogEntry {
            title: NormalizedTitle::new(title),
            poster_url: poster_url.into(),
        }
    }
}

/// Poster URLs indexed by normalized title.
///
/// When a key appears more than once, the first row wins. Keys are kept in
/// first-appearance order for fuzzy matching.
#[derive(Debug, Clone, Default)]
pub struct PosterCatalog {
    urls: AHashMap<NormalizedTitle, String>,
    keys: Vec<String>,
}

impl PosterCatalog {
    pub fn new(entries: Vec<PosterCatalogEntry>) -> Self {
        let mut urls = AHashMap::with_capacity(entries.len());
        let mut keys = Vec::with_capacity(entries.len());

        for entry in entries {
            if !urls.contains_key(&entry.title) {
                keys.push(entry.title.as_str().to_string());
                urls.insert(entry.title, entry.poster_url);
            }
        }

        PosterCatalog { urls, keys }
    }

    /// The URL stored for an exact key, possibly empty.
    pub fn get(&self, title: &NormalizedTitle) -> Option<&str> {
        self.urls.get(title).map(String::as_str)
    }

    /// All distinct keys, in first-appearance order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<PosterCatalogEntry> for PosterCatalog {
    fn from_iter<T: IntoIterator<Item = PosterCatalogEntry>>(iter: T) -> Self {
        PosterCatalog::new(iter.into_iter().collect())
    }
}
