//! Primary catalog entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RecomendaError, Result};

/// The named text attributes of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Genres,
    Keywords,
    Tagline,
    Cast,
    Director,
    Overview,
}

impl Attribute {
    /// Every attribute, in column order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Genres,
        Attribute::Keywords,
        Attribute::Tagline,
        Attribute::Cast,
        Attribute::Director,
        Attribute::Overview,
    ];

    /// The column name of this attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Genres => "genres",
            Attribute::Keywords => "keywords",
            Attribute::Tagline => "tagline",
            Attribute::Cast => "cast",
            Attribute::Director => "director",
            Attribute::Overview => "overview",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attribute {
    type Err = RecomendaError;

    fn from_str(s: &str) -> Result<Self> {
        Attribute::ALL
            .into_iter()
            .find(|attribute| attribute.name() == s)
            .ok_or_else(|| RecomendaError::invalid_argument(format!("Unknown attribute: {s}")))
    }
}

/// An immutable movie record.
///
/// Missing attributes are empty strings, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stable row index within the catalog.
    pub id: usize,
    /// Display title, also the key for primary fuzzy matching.
    pub title: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub overview: String,
}

impl CatalogEntry {
    /// Create an entry with a title and all attributes empty.
    pub fn new<S: Into<String>>(id: usize, title: S) -> Self {
        CatalogEntry {
            id,
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set one attribute, builder style.
    pub fn with<S: Into<String>>(mut self, attribute: Attribute, value: S) -> Self {
        self.set(attribute, value);
        self
    }

    /// Set one attribute in place.
    pub fn set<S: Into<String>>(&mut self, attribute: Attribute, value: S) {
        let value = value.into();
        match attribute {
            Attribute::Genres => self.genres = value,
            Attribute::Keywords => self.keywords = value,
            Attribute::Tagline => self.tagline = value,
            Attribute::Cast => self.cast = value,
            Attribute::Director => self.director = value,
            Attribute::Overview => self.overview = value,
        }
    }

    /// The text of one attribute.
    pub fn attribute(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Genres => &self.genres,
            Attribute::Keywords => &self.keywords,
            Attribute::Tagline => &self.tagline,
            Attribute::Cast => &self.cast,
            Attribute::Director => &self.director,
            Attribute::Overview => &self.overview,
        }
    }
}

/// An immutable snapshot of the primary catalog.
///
/// Entry ids always equal their position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, renumbering entries by position.
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let entries = entries
            .into_iter()
            .enumerate()
            .map(|(id, mut entry)| {
                entry.id = id;
                entry
            })
            .collect();

        Catalog { entries }
    }

    /// Build a catalog of title-only entries.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Catalog::new(
            titles
                .into_iter()
                .enumerate()
                .map(|(id, title)| CatalogEntry::new(id, title))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// All titles in id order.
    pub fn titles(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.title.clone()).collect()
    }

    /// The lowest id whose title equals `title` exactly.
    pub fn find_by_title(&self, title: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.title == title)
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogEntry>>(iter: T) -> Self {
        Catalog::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_round_trip_names() {
        for attribute in Attribute::ALL {
            assert_eq!(attribute.name().parse::<Attribute>().unwrap(), attribute);
        }
        assert!("year".parse::<Attribute>().is_err());
    }

    #[test]
    fn test_attribute_serde_uses_column_names() {
        let json = serde_json::to_string(&vec![Attribute::Cast, Attribute::Director]).unwrap();
        assert_eq!(json, r#"["cast","director"]"#);
    }

    #[test]
    fn test_entry_defaults_to_empty_attributes() {
        let entry = CatalogEntry::new(0, "Avatar").with(Attribute::Director, "James Cameron");

        assert_eq!(entry.attribute(Attribute::Director), "James Cameron");
        for attribute in [Attribute::Genres, Attribute::Tagline, Attribute::Overview] {
            assert_eq!(entry.attribute(attribute), "");
        }
    }

    #[test]
    fn test_catalog_renumbers_ids() {
        let catalog = Catalog::new(vec![CatalogEntry::new(7, "Up"), CatalogEntry::new(3, "Heat")]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().id, 0);
        assert_eq!(catalog.get(1).unwrap().id, 1);
        assert_eq!(catalog.get(1).unwrap().title, "Heat");
    }

    #[test]
    fn test_find_by_title_prefers_first_duplicate() {
        let catalog = Catalog::from_titles(["Heat", "The Thing", "Heat"]);

        assert_eq!(catalog.find_by_title("Heat"), Some(0));
        assert_eq!(catalog.find_by_title("heat"), None);
        assert_eq!(catalog.titles(), vec!["Heat", "The Thing", "Heat"]);
    }
}
