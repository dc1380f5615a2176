//! Cutoff-based title resolution.
//!
//! The resolver scores each known title against the query with the sequence
//! matching ratio and keeps the best `max_matches` titles whose ratio reaches
//! the cutoff. Cheap upper bounds prune candidates before the full ratio is
//! computed.
//!
//! Two cutoffs are used by the engine:
//!
//! - [`DEFAULT_PRIMARY_CUTOFF`] for raw user queries against catalog titles;
//! - [`DEFAULT_POSTER_CUTOFF`] for normalized titles against poster keys.
//!
//! # Examples
//!
//! ```
//! use recomenda::fuzzy::FuzzyTitleResolver;
//!
//! let titles = vec!["Toy Story".to_string(), "Toy Story 2".to_string()];
//! let resolver = FuzzyTitleResolver::primary();
//!
//! assert_eq!(resolver.best("Toy Story 2", &titles), Some("Toy Story 2".to_string()));
//! assert!(resolver.resolve("zzz_not_a_real_movie_zzz", &titles).is_empty());
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{RecomendaError, Result};
use crate::fuzzy::sequence_matcher::SequenceMatcher;

/// Lenient cutoff for resolving raw user queries against catalog titles.
pub const DEFAULT_PRIMARY_CUTOFF: f64 = 0.6;

/// Number of candidates kept when resolving a raw user query.
pub const DEFAULT_PRIMARY_MAX_MATCHES: usize = 3;

/// Strict cutoff for joining normalized titles against poster keys.
pub const DEFAULT_POSTER_CUTOFF: f64 = 0.8;

/// A known title and its similarity ratio to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleMatch {
    pub title: String,
    pub score: f64,
}

/// Maps free text to the closest known titles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyTitleResolver {
    cutoff: f64,
    max_matches: usize,
}

impl FuzzyTitleResolver {
    /// Create a resolver.
    ///
    /// `cutoff` must lie in [0, 1] and `max_matches` must be positive.
    pub fn new(cutoff: f64, max_matches: usize) -> Result<Self> {
        if max_matches == 0 {
            return Err(RecomendaError::invalid_argument(
                "max_matches must be greater than 0",
            ));
        }
        if !(0.0..=1.0).contains(&cutoff) {
            return Err(RecomendaError::invalid_argument(format!(
                "cutoff must be in [0, 1], got {cutoff}"
            )));
        }

        Ok(FuzzyTitleResolver {
            cutoff,
            max_matches,
        })
    }

    /// Resolver for raw user queries.
    pub fn primary() -> Self {
        FuzzyTitleResolver {
            cutoff: DEFAULT_PRIMARY_CUTOFF,
            max_matches: DEFAULT_PRIMARY_MAX_MATCHES,
        }
    }

    /// Resolver for the poster join: strict cutoff, best match only.
    pub fn poster() -> Self {
        FuzzyTitleResolver {
            cutoff: DEFAULT_POSTER_CUTOFF,
            max_matches: 1,
        }
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn max_matches(&self) -> usize {
        self.max_matches
    }

    /// Matching titles with their ratios, best first.
    ///
    /// Equal ratios are ordered by descending title. Comparison is
    /// case-sensitive; callers normalize beforehand when they need to.
    pub fn resolve_scored<S: AsRef<str>>(&self, query: &str, known_titles: &[S]) -> Vec<TitleMatch> {
        let matcher = SequenceMatcher::new(query);

        let mut matches: Vec<TitleMatch> = known_titles
            .iter()
            .map(|title| title.as_ref())
            .filter(|title| {
                matcher.real_quick_ratio(title) >= self.cutoff
                    && matcher.quick_ratio(title) >= self.cutoff
            })
            .filter_map(|title| {
                let score = matcher.ratio(title);
                (score >= self.cutoff).then(|| TitleMatch {
                    title: title.to_string(),
                    score,
                })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.title.cmp(&a.title))
        });
        matches.truncate(self.max_matches);
        matches
    }

    /// Matching titles, best first.
    pub fn resolve<S: AsRef<str>>(&self, query: &str, known_titles: &[S]) -> Vec<String> {
        self.resolve_scored(query, known_titles)
            .into_iter()
            .map(|m| m.title)
            .collect()
    }

    /// The single best matching title, if any clears the cutoff.
    pub fn best<S: AsRef<str>>(&self, query: &str, known_titles: &[S]) -> Option<String> {
        self.resolve_scored(query, known_titles)
            .into_iter()
            .next()
            .map(|m| m.title)
    }
}

impl Default for FuzzyTitleResolver {
    fn default() -> Self {
        FuzzyTitleResolver::primary()
    }
}

/// Resolve `query` against `known_titles` in one call.
///
/// Returns at most `max_matches` titles whose ratio is at least `cutoff`,
/// best first. An empty result means nothing was close enough.
pub fn resolve<S: AsRef<str>>(
    query: &str,
    known_titles: &[S],
    cutoff: f64,
    max_matches: usize,
) -> Result<Vec<String>> {
    Ok(FuzzyTitleResolver::new(cutoff, max_matches)?.resolve(query, known_titles))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> Vec<String> {
        ["Avatar", "Toy Story", "Toy Story 2", "The Dark Knight", "Heat"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_exact_beats_fuzzy() {
        let resolver = FuzzyTitleResolver::primary();

        let matches = resolver.resolve_scored("Toy Story 2", &titles());
        assert_eq!(matches[0].title, "Toy Story 2");
        assert_eq!(matches[0].score, 1.0);
        assert_eq!(matches[1].title, "Toy Story");

        let matches = resolver.resolve("Toy Story", &titles());
        assert_eq!(matches[0], "Toy Story");
    }

    #[test]
    fn test_typo_resolves() {
        let resolver = FuzzyTitleResolver::primary();
        assert_eq!(resolver.best("Avatr", &titles()), Some("Avatar".to_string()));
        assert_eq!(
            resolver.best("The Dark Night", &titles()),
            Some("The Dark Knight".to_string())
        );
    }

    #[test]
    fn test_primary_path_is_case_sensitive() {
        let resolver = FuzzyTitleResolver::primary();
        assert!(resolver.resolve("AVATAR", &titles()).is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let resolver = FuzzyTitleResolver::primary();
        assert!(resolver.resolve("zzz_not_a_real_movie_zzz", &titles()).is_empty());
        assert!(resolver.resolve("Avatar", &Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_max_matches_and_ordering() {
        let known = ["abcx", "abcy", "abcz", "abcd"];
        let resolver = FuzzyTitleResolver::new(0.5, 2).unwrap();

        // "abcd" is exact; the three 0.75 ties are ordered by descending title.
        assert_eq!(resolver.resolve("abcd", &known), vec!["abcd", "abcz"]);

        let resolver = FuzzyTitleResolver::new(0.5, 10).unwrap();
        assert_eq!(
            resolver.resolve("abcd", &known),
            vec!["abcd", "abcz", "abcy", "abcx"]
        );
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        // "abcd" vs "bcde" has ratio exactly 0.75.
        let known = ["bcde"];
        assert_eq!(resolve("abcd", &known, 0.75, 1).unwrap(), vec!["bcde"]);
        assert!(resolve("abcd", &known, 0.76, 1).unwrap().is_empty());
    }

    #[test]
    fn test_poster_resolver_is_strict() {
        let resolver = FuzzyTitleResolver::poster();
        assert_eq!(resolver.cutoff(), DEFAULT_POSTER_CUTOFF);
        assert_eq!(resolver.max_matches(), 1);

        let keys = ["avatar (2009)", "the dark knight"];
        assert_eq!(resolver.resolve("the dark knight", &keys), vec!["the dark knight"]);
        // ratio("avatar", "avatar (2009)") = 12 / 19 < 0.8
        assert!(resolver.resolve("avatar", &keys).is_empty());
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            FuzzyTitleResolver::new(0.6, 0),
            Err(RecomendaError::InvalidArgument(_))
        ));
        assert!(FuzzyTitleResolver::new(1.5, 3).is_err());
        assert!(FuzzyTitleResolver::new(-0.1, 3).is_err());
        assert!(FuzzyTitleResolver::new(f64::NAN, 3).is_err());
        assert!(resolve("x", &["x"], 0.6, 0).is_err());
    }
}
