//! Poster artwork lookup.
//!
//! The poster table spells titles independently of the primary catalog, so a
//! title is first normalized, then looked up exactly, then fuzzily with a
//! strict cutoff. Anything that still misses gets the placeholder URL. A
//! lookup never fails.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::{NormalizedTitle, PosterCatalog};
use crate::fuzzy::FuzzyTitleResolver;

/// Image shown when no poster can be found.
pub const DEFAULT_PLACEHOLDER_POSTER_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/a/ac/No_image_available.svg";

/// How a poster URL was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PosterMatch {
    /// The normalized title is a poster key.
    Exact { url: String },
    /// A different poster key was close enough.
    Fuzzy { key: String, url: String },
    /// Nothing usable was found.
    Placeholder { url: String },
}

impl PosterMatch {
    pub fn url(&self) -> &str {
        match self {
            PosterMatch::Exact { url }
            | PosterMatch::Fuzzy { url, .. }
            | PosterMatch::Placeholder { url } => url,
        }
    }

    pub fn into_url(self) -> String {
        match self {
            PosterMatch::Exact { url }
            | PosterMatch::Fuzzy { url, .. }
            | PosterMatch::Placeholder { url } => url,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, PosterMatch::Placeholder { .. })
    }
}

/// Finds poster URLs for catalog titles.
#[derive(Debug, Clone)]
pub struct PosterLookupService {
    posters: Arc<PosterCatalog>,
    resolver: FuzzyTitleResolver,
    placeholder: String,
}

impl PosterLookupService {
    /// Create a service with the strict poster resolver and default placeholder.
    pub fn new(posters: Arc<PosterCatalog>) -> Self {
        PosterLookupService {
            posters,
            resolver: FuzzyTitleResolver::poster(),
            placeholder: DEFAULT_PLACEHOLDER_POSTER_URL.to_string(),
        }
    }

    pub fn with_resolver(mut self, resolver: FuzzyTitleResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Number of distinct poster keys.
    pub fn len(&self) -> usize {
        self.posters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posters.is_empty()
    }

    /// Poster URL for a title; the placeholder when none is found.
    pub fn poster_for(&self, title: &str) -> String {
        self.lookup(title).into_url()
    }

    /// Poster URL for a title, with how it was found.
    ///
    /// The first key that matches decides: if its stored URL is empty the
    /// placeholder is returned without trying further keys.
    pub fn lookup(&self, title: &str) -> PosterMatch {
        let key = NormalizedTitle::new(title);

        if let Some(url) = self.posters.get(&key) {
            return self.non_empty(url, |url| PosterMatch::Exact { url });
        }

        if let Some(close) = self.resolver.best(key.as_str(), self.posters.keys()) {
            let url = self
                .posters
                .get(&NormalizedTitle::new(&close))
                .unwrap_or_default();
            debug!("poster for {title:?} matched fuzzily on {close:?}");
            return self.non_empty(url, |url| PosterMatch::Fuzzy { key: close, url });
        }

        debug!("no poster for {title:?}");
        self.placeholder_match()
    }

    fn non_empty<F>(&self, url: &str, found: F) -> PosterMatch
    where
        F: FnOnce(String) -> PosterMatch,
    {
        if url.is_empty() {
            self.placeholder_match()
        } else {
            found(url.to_string())
        }
    }

    fn placeholder_match(&self) -> PosterMatch {
        PosterMatch::Placeholder {
            url: self.placeholder.clone(),
        }
    }
}
