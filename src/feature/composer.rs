//! Composite text construction.
//!
//! Each entry's configured attributes are joined, in list order, with a single
//! space. Empty attributes still contribute their (empty) segment, so the
//! separator count is fixed by the field list.

use crate::catalog::{Attribute, Catalog, CatalogEntry};

/// The attributes merged into composite text by default, in order.
pub const DEFAULT_FEATURES: [Attribute; 5] = [
    Attribute::Genres,
    Attribute::Keywords,
    Attribute::Tagline,
    Attribute::Cast,
    Attribute::Director,
];

/// Merges selected attributes of an entry into one text blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFeatureComposer {
    fields: Vec<Attribute>,
}

impl Default for TextFeatureComposer {
    fn default() -> Self {
        TextFeatureComposer::new(DEFAULT_FEATURES.to_vec())
    }
}

impl TextFeatureComposer {
    pub fn new(fields: Vec<Attribute>) -> Self {
        TextFeatureComposer { fields }
    }

    pub fn fields(&self) -> &[Attribute] {
        &self.fields
    }

    /// Composite text of one entry.
    pub fn compose(&self, entry: &CatalogEntry) -> String {
        self.fields
            .iter()
            .map(|field| entry.attribute(*field))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Composite text of every entry, in id order.
    pub fn compose_all(&self, catalog: &Catalog) -> Vec<String> {
        catalog.iter().map(|entry| self.compose(entry)).collect()
    }
}
