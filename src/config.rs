//! Engine configuration.
//!
//! Every tunable threshold of the engine lives here, with defaults matching
//! the datasets it was tuned on. Configuration can be built in code or read
//! from a JSON file; missing JSON fields take their defaults.
//!
//! ```
//! use recomenda::config::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{ "default_top_n": 8 }"#).unwrap();
//! assert_eq!(config.default_top_n, 8);
//! assert_eq!(config.poster_cutoff, 0.8);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::Attribute;
use crate::error::{RecomendaError, Result};
use crate::feature::DEFAULT_FEATURES;
use crate::fuzzy::{
    DEFAULT_POSTER_CUTOFF, DEFAULT_PRIMARY_CUTOFF, DEFAULT_PRIMARY_MAX_MATCHES,
    FuzzyTitleResolver,
};
use crate::poster::DEFAULT_PLACEHOLDER_POSTER_URL;
use crate::recommend::DEFAULT_TOP_N;

/// Configuration for building and querying an engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Attributes merged into composite text, in order.
    pub features: Vec<Attribute>,
    /// Minimum ratio for a raw query to match a catalog title.
    pub primary_cutoff: f64,
    /// Candidates considered when resolving a raw query.
    pub primary_max_matches: usize,
    /// Minimum ratio for a normalized title to match a poster key.
    pub poster_cutoff: f64,
    /// Recommendations returned when the caller gives no count.
    pub default_top_n: usize,
    /// URL returned when no poster is found.
    pub placeholder_poster_url: String,
    /// Build the similarity matrix on the rayon pool.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            features: DEFAULT_FEATURES.to_vec(),
            primary_cutoff: DEFAULT_PRIMARY_CUTOFF,
            primary_max_matches: DEFAULT_PRIMARY_MAX_MATCHES,
            poster_cutoff: DEFAULT_POSTER_CUTOFF,
            default_top_n: DEFAULT_TOP_N,
            placeholder_poster_url: DEFAULT_PLACEHOLDER_POSTER_URL.to_string(),
            parallel: true,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn with_features(mut self, features: Vec<Attribute>) -> Self {
        self.features = features;
        self
    }

    pub fn with_primary_cutoff(mut self, cutoff: f64) -> Self {
        self.primary_cutoff = cutoff;
        self
    }

    pub fn with_poster_cutoff(mut self, cutoff: f64) -> Self {
        self.poster_cutoff = cutoff;
        self
    }

    pub fn with_default_top_n(mut self, top_n: usize) -> Self {
        self.default_top_n = top_n;
        self
    }

    pub fn with_placeholder_poster_url<S: Into<String>>(mut self, url: S) -> Self {
        self.placeholder_poster_url = url.into();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.features.is_empty() {
            return Err(RecomendaError::invalid_config(
                "at least one feature attribute is required",
            ));
        }
        if self.placeholder_poster_url.is_empty() {
            return Err(RecomendaError::invalid_config(
                "placeholder_poster_url must not be empty",
            ));
        }
        self.primary_resolver()?;
        self.poster_resolver()?;
        Ok(())
    }

    /// Resolver for raw user queries.
    pub fn primary_resolver(&self) -> Result<FuzzyTitleResolver> {
        FuzzyTitleResolver::new(self.primary_cutoff, self.primary_max_matches)
            .map_err(|e| RecomendaError::invalid_config(format!("primary resolver: {e}")))
    }

    /// Resolver for the poster join, always keeping only the best key.
    pub fn poster_resolver(&self) -> Result<FuzzyTitleResolver> {
        FuzzyTitleResolver::new(self.poster_cutoff, 1)
            .map_err(|e| RecomendaError::invalid_config(format!("poster resolver: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();

        assert_eq!(
            config.features,
            vec![
                Attribute::Genres,
                Attribute::Keywords,
                Attribute::Tagline,
                Attribute::Cast,
                Attribute::Director,
            ]
        );
        assert_eq!(config.primary_cutoff, 0.6);
        assert_eq!(config.primary_max_matches, 3);
        assert_eq!(config.poster_cutoff, 0.8);
        assert_eq!(config.default_top_n, 20);
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let config = EngineConfig::default()
            .with_features(vec![Attribute::Overview])
            .with_primary_cutoff(0.7)
            .with_parallel(false);

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""features":["overview"]"#));
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");
        fs::write(&path, r#"{"poster_cutoff": 0.9, "features": ["genres", "cast"]}"#).unwrap();

        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config.poster_cutoff, 0.9);
        assert_eq!(config.features, vec![Attribute::Genres, Attribute::Cast]);
        assert_eq!(config.default_top_n, 20);
    }

    #[test]
    fn test_validation() {
        assert!(EngineConfig::default().with_features(vec![]).validate().is_err());
        assert!(EngineConfig::default().with_primary_cutoff(1.2).validate().is_err());
        assert!(EngineConfig::default().with_poster_cutoff(-0.5).validate().is_err());
        assert!(
            EngineConfig::default()
                .with_placeholder_poster_url("")
                .validate()
                .is_err()
        );

        let invalid = EngineConfig::from_json(r#"{"primary_max_matches": 0}"#);
        assert!(matches!(invalid, Err(RecomendaError::Config(_))));

        let unknown_feature = EngineConfig::from_json(r#"{"features": ["year"]}"#);
        assert!(matches!(unknown_feature, Err(RecomendaError::Json(_))));
    }
}
