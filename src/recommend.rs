//! Ranking similar catalog entries for a free-text query.
//!
//! A query is resolved to a catalog title with the lenient primary resolver,
//! the first entry carrying that title becomes the anchor, and every other
//! entry is ranked by its similarity to the anchor.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{RecomendaError, Result};
use crate::fuzzy::FuzzyTitleResolver;
use crate::vector::NeighborIndex;

/// Number of recommendations returned when the caller does not say.
pub const DEFAULT_TOP_N: usize = 20;

/// One ranked catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: usize,
    pub score: f64,
}

/// The ranked neighbours of a resolved query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Catalog id the query resolved to.
    pub query_id: usize,
    /// Catalog title the query resolved to.
    pub query_title: String,
    /// Best first; never contains `query_id`.
    pub items: Vec<Recommendation>,
}

impl RecommendationResult {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids of the recommended entries, best first.
    pub fn ids(&self) -> Vec<usize> {
        self.items.iter().map(|item| item.id).collect()
    }
}

/// Rank a similarity row, dropping `exclude` and keeping `top_n` entries.
///
/// The sort is stable: equal scores keep their catalog order.
pub fn rank(mut row: Vec<(usize, f64)>, exclude: usize, top_n: usize) -> Vec<Recommendation> {
    row.sort_by(|a, b| b.1.total_cmp(&a.1));

    row.into_iter()
        .filter(|(id, _)| *id != exclude)
        .take(top_n)
        .map(|(id, score)| Recommendation { id, score })
        .collect()
}

/// Resolves queries and ranks neighbours over a built similarity index.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    catalog: Arc<Catalog>,
    titles: Vec<String>,
    index: Arc<dyn NeighborIndex>,
    resolver: FuzzyTitleResolver,
}

impl RecommendationService {
    /// Create a service. The index must cover exactly the catalog's entries.
    pub fn new(
        catalog: Arc<Catalog>,
        index: Arc<dyn NeighborIndex>,
        resolver: FuzzyTitleResolver,
    ) -> Result<Self> {
        if index.len() != catalog.len() {
            return Err(RecomendaError::invalid_argument(format!(
                "{} index covers {} entries but the catalog has {}",
                index.name(),
                index.len(),
                catalog.len()
            )));
        }

        Ok(RecommendationService {
            titles: catalog.titles(),
            catalog,
            index,
            resolver,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn resolver(&self) -> &FuzzyTitleResolver {
        &self.resolver
    }

    /// Best catalog title for a raw query, compared case-sensitively.
    pub fn resolve_title(&self, query: &str) -> Option<String> {
        self.resolver.best(query, &self.titles)
    }

    /// Recommend up to `top_n` entries similar to the title `query` resolves to.
    ///
    /// Fails with [`RecomendaError::NotFound`] when no title clears the
    /// resolver cutoff.
    pub fn recommend(&self, query: &str, top_n: usize) -> Result<RecommendationResult> {
        if query.trim().is_empty() {
            return Err(RecomendaError::invalid_argument("query must not be empty"));
        }

        let Some(title) = self.resolve_title(query) else {
            debug!("no catalog title close to {query:?}");
            return Err(RecomendaError::not_found(format!(
                "no movie matching {query:?}"
            )));
        };

        let query_id = self
            .catalog
            .find_by_title(&title)
            .ok_or_else(|| RecomendaError::other(format!("resolved title {title:?} vanished")))?;

        debug!("resolved {query:?} to {title:?} (id {query_id})");

        Ok(RecommendationResult {
            items: self.recommend_for_id(query_id, top_n)?,
            query_id,
            query_title: title,
        })
    }

    /// Rank every other entry against the entry `id`.
    pub fn recommend_for_id(&self, id: usize, top_n: usize) -> Result<Vec<Recommendation>> {
        let row = self.index.similarities_of(id)?;
        Ok(rank(row, id, top_n))
    }
}
