//! The similarity engine facade.
//!
//! An [`Engine`] is built once from a catalog snapshot and a poster table:
//!
//! ```text
//! Catalog → TextFeatureComposer → VectorSpaceModel → SimilarityMatrix
//! ```
//!
//! After that it is read-only and can be shared freely (`Arc<Engine>`); every
//! query is a pure function of its arguments and the snapshot.
//!
//! # Examples
//!
//! ```
//! use recomenda::catalog::{Attribute, Catalog, CatalogEntry, PosterCatalog};
//! use recomenda::config::EngineConfig;
//! use recomenda::engine::Engine;
//!
//! let catalog = Catalog::new(vec![
//!     CatalogEntry::new(0, "Alien").with(Attribute::Genres, "Horror Science Fiction"),
//!     CatalogEntry::new(1, "Aliens").with(Attribute::Genres, "Action Science Fiction"),
//!     CatalogEntry::new(2, "Heat").with(Attribute::Genres, "Crime Drama"),
//! ]);
//! let engine = Engine::build(catalog, PosterCatalog::default(), EngineConfig::default()).unwrap();
//!
//! let result = engine.recommend("Alien", 2).unwrap();
//! assert_eq!(result.query_title, "Alien");
//! assert_eq!(result.ids(), vec![1, 2]);
//! ```

use std::sync::Arc;
use std::time::Instant;

use log::info;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, PosterCatalog};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::feature::TextFeatureComposer;
use crate::poster::{PosterLookupService, PosterMatch};
use crate::recommend::{RecommendationResult, RecommendationService};
use crate::vector::{SimilarityMatrix, VectorSpace, VectorSpaceModel};

/// Display data for one catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: usize,
    pub title: String,
    pub overview: String,
    pub poster_url: String,
}

/// A recommendation annotated for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedMovie {
    pub id: usize,
    pub title: String,
    pub score: f64,
    pub poster_url: String,
}

/// Recommendations for a query, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationPage {
    pub query_id: usize,
    pub query_title: String,
    pub movies: Vec<RecommendedMovie>,
}

/// Sizes of the structures built for a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    pub catalog_entries: usize,
    pub poster_entries: usize,
    pub vocabulary_size: usize,
    /// Entries whose composite text has no term.
    pub empty_entries: usize,
}

/// A built, read-only recommendation engine.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    catalog: Arc<Catalog>,
    space: VectorSpace,
    matrix: Arc<SimilarityMatrix>,
    recommender: RecommendationService,
    posters: PosterLookupService,
}

impl Engine {
    /// Build every derived structure for a catalog snapshot.
    ///
    /// Fails with [`EmptyCorpus`](crate::error::RecomendaError::EmptyCorpus)
    /// when no entry has any usable text, or with a configuration error when
    /// `config` is invalid.
    pub fn build(catalog: Catalog, posters: PosterCatalog, config: EngineConfig) -> Result<Self> {
        Self::build_with_model(catalog, posters, config, VectorSpaceModel::new()?)
    }

    /// Like [`build`](Self::build), with a custom vector space model.
    pub fn build_with_model(
        catalog: Catalog,
        posters: PosterCatalog,
        config: EngineConfig,
        model: VectorSpaceModel,
    ) -> Result<Self> {
        config.validate()?;
        let start = Instant::now();

        let composer = TextFeatureComposer::new(config.features.clone());
        let corpus = composer.compose_all(&catalog);
        let space = model.fit(&corpus)?;
        let matrix = Arc::new(SimilarityMatrix::compute_with(space.vectors(), config.parallel));

        let catalog = Arc::new(catalog);
        let recommender = RecommendationService::new(
            Arc::clone(&catalog),
            matrix.clone(),
            config.primary_resolver()?,
        )?;
        let posters = PosterLookupService::new(Arc::new(posters))
            .with_resolver(config.poster_resolver()?)
            .with_placeholder(config.placeholder_poster_url.clone());

        info!(
            "engine built in {} ms: {} movies, {} terms",
            start.elapsed().as_millis(),
            catalog.len(),
            space.dimension()
        );

        Ok(Engine {
            config,
            catalog,
            space,
            matrix,
            recommender,
            posters,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vector_space(&self) -> &VectorSpace {
        &self.space
    }

    pub fn similarity_matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Best catalog title for a raw query, for "found film: X" messages.
    pub fn resolve_title(&self, query: &str) -> Option<String> {
        self.recommender.resolve_title(query)
    }

    /// Up to `top_n` entries similar to the title `query` resolves to.
    pub fn recommend(&self, query: &str, top_n: usize) -> Result<RecommendationResult> {
        self.recommender.recommend(query, top_n)
    }

    /// [`recommend`](Self::recommend) with the configured default count.
    pub fn recommend_default(&self, query: &str) -> Result<RecommendationResult> {
        self.recommend(query, self.config.default_top_n)
    }

    /// Recommendations annotated with titles and poster URLs.
    pub fn recommend_with_posters(&self, query: &str, top_n: usize) -> Result<RecommendationPage> {
        let result = self.recommend(query, top_n)?;

        let movies = result
            .items
            .iter()
            .filter_map(|item| {
                let entry = self.catalog.get(item.id)?;
                Some(RecommendedMovie {
                    id: item.id,
                    title: entry.title.clone(),
                    score: item.score,
                    poster_url: self.poster_for(&entry.title),
                })
            })
            .collect();

        Ok(RecommendationPage {
            query_id: result.query_id,
            query_title: result.query_title,
            movies,
        })
    }

    /// Poster URL for a title; never fails.
    pub fn poster_for(&self, title: &str) -> String {
        self.posters.poster_for(title)
    }

    /// Poster URL for a title, with how it was found.
    pub fn poster_lookup(&self, title: &str) -> PosterMatch {
        self.posters.lookup(title)
    }

    /// Title, overview and poster of one entry.
    pub fn details(&self, id: usize) -> Option<MovieDetails> {
        let entry = self.catalog.get(id)?;
        Some(MovieDetails {
            id,
            title: entry.title.clone(),
            overview: entry.overview.clone(),
            poster_url: self.poster_for(&entry.title),
        })
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            catalog_entries: self.catalog.len(),
            poster_entries: self.posters.len(),
            vocabulary_size: self.space.dimension(),
            empty_entries: self.space.vectors().iter().filter(|v| v.is_zero()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Attribute, CatalogEntry, PosterCatalogEntry};
    use crate::error::RecomendaError;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry::new(0, "Alien")
                .with(Attribute::Genres, "Horror Science Fiction")
                .with(Attribute::Director, "Ridley Scott")
                .with(Attribute::Overview, "In space no one can hear you scream."),
            CatalogEntry::new(1, "Aliens")
                .with(Attribute::Genres, "Action Science Fiction")
                .with(Attribute::Director, "James Cameron"),
            CatalogEntry::new(2, "Heat").with(Attribute::Genres, "Crime Drama"),
            CatalogEntry::new(3, "Silent"),
        ])
    }

    fn posters() -> PosterCatalog {
        vec![PosterCatalogEntry::new("alien ", "http://img/alien.jpg")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_build_and_stats() {
        let engine = Engine::build(catalog(), posters(), EngineConfig::default()).unwrap();
        let stats = engine.stats();

        assert_eq!(stats.catalog_entries, 4);
        assert_eq!(stats.poster_entries, 1);
        assert_eq!(stats.empty_entries, 1);
        assert!(stats.vocabulary_size > 0);
        assert_eq!(engine.similarity_matrix().len(), 4);
    }

    #[test]
    fn test_empty_corpus_aborts_build() {
        let catalog = Catalog::from_titles(["Blank", "Void"]);
        let result = Engine::build(catalog, PosterCatalog::default(), EngineConfig::default());
        assert!(matches!(result, Err(RecomendaError::EmptyCorpus(_))));
    }

    #[test]
    fn test_invalid_config_aborts_build() {
        let config = EngineConfig::default().with_primary_cutoff(2.0);
        let result = Engine::build(catalog(), posters(), config);
        assert!(matches!(result, Err(RecomendaError::Config(_))));
    }

    #[test]
    fn test_recommend_with_posters() {
        let engine = Engine::build(catalog(), posters(), EngineConfig::default()).unwrap();
        let page = engine.recommend_with_posters("Aliens", 2).unwrap();

        assert_eq!(page.query_title, "Aliens");
        assert_eq!(page.movies.len(), 2);
        assert_eq!(page.movies[0].title, "Alien");
        assert_eq!(page.movies[0].poster_url, "http://img/alien.jpg");
        assert_eq!(
            page.movies[1].poster_url,
            engine.config().placeholder_poster_url
        );
    }

    #[test]
    fn test_details() {
        let engine = Engine::build(catalog(), posters(), EngineConfig::default()).unwrap();
        let details = engine.details(0).unwrap();

        assert_eq!(details.title, "Alien");
        assert_eq!(details.overview, "In space no one can hear you scream.");
        assert_eq!(details.poster_url, "http://img/alien.jpg");
        assert!(engine.details(99).is_none());
    }

    #[test]
    fn test_default_top_n() {
        let config = EngineConfig::default().with_default_top_n(1);
        let engine = Engine::build(catalog(), posters(), config).unwrap();
        assert_eq!(engine.recommend_default("Heat").unwrap().len(), 1);
    }
}
