//! Command implementations for the Recomenda CLI.

use std::sync::Arc;

use anyhow::Context;
use log::debug;

use crate::catalog::PosterCatalog;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::{RecomendaError, Result};
use crate::loader::CatalogLoader;
use crate::poster::{PosterLookupService, PosterMatch};

/// Execute a CLI command.
pub fn execute_command(args: RecomendaArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Recommend(recommend_args) => recommend(recommend_args, config, &args),
        Command::Resolve(resolve_args) => resolve(resolve_args, config, &args),
        Command::Poster(poster_args) => poster(poster_args, config, &args),
        Command::Details(details_args) => details(details_args, config, &args),
        Command::Stats(stats_args) => stats(stats_args, config, &args),
    }
}

/// Load the engine configuration, or the defaults without `--config`.
fn load_config(args: &RecomendaArgs) -> Result<EngineConfig> {
    match &args.config {
        Some(path) => {
            debug!("loading configuration from {}", path.display());
            let config = EngineConfig::from_file(path)
                .with_context(|| format!("failed to load configuration {}", path.display()))?;
            Ok(config)
        }
        None => Ok(EngineConfig::default()),
    }
}

/// Load both tables and build an engine.
fn build_engine(catalog_args: &CatalogArgs, config: EngineConfig) -> Result<Engine> {
    let catalog = CatalogLoader::new().load_movies(&catalog_args.movies)?;
    let posters = match &catalog_args.posters {
        Some(path) => CatalogLoader::new()
            .with_encoding(catalog_args.poster_encoding)
            .load_posters(path)?,
        None => PosterCatalog::default(),
    };

    Engine::build(catalog, posters, config)
}

fn recommend(args: &RecommendArgs, config: EngineConfig, cli_args: &RecomendaArgs) -> Result<()> {
    let engine = build_engine(&args.catalog, config)?;
    let top_n = args.top_n.unwrap_or(engine.config().default_top_n);

    match engine.recommend_with_posters(&args.query, top_n) {
        Ok(page) => output_recommendations(&page, cli_args),
        Err(RecomendaError::NotFound(_)) => output_not_found(&args.query, cli_args),
        Err(e) => Err(e),
    }
}

fn resolve(args: &ResolveArgs, config: EngineConfig, cli_args: &RecomendaArgs) -> Result<()> {
    let catalog = CatalogLoader::new().load_movies(&args.catalog.movies)?;
    let resolver = config.primary_resolver()?;

    match resolver.best(&args.query, &catalog.titles()) {
        Some(title) => {
            let result = ResolutionResult {
                query: args.query.clone(),
                title: Some(title),
            };
            output_result("Resolved title:", &result, cli_args)
        }
        None => output_not_found(&args.query, cli_args),
    }
}

fn poster(args: &PosterArgs, config: EngineConfig, cli_args: &RecomendaArgs) -> Result<()> {
    let posters = CatalogLoader::new()
        .with_encoding(args.poster_encoding)
        .load_posters(&args.posters)?;
    let service = PosterLookupService::new(Arc::new(posters))
        .with_resolver(config.poster_resolver()?)
        .with_placeholder(config.placeholder_poster_url.clone());

    let result = match service.lookup(&args.title) {
        PosterMatch::Exact { url } => PosterResult {
            title: args.title.clone(),
            poster_url: url,
            kind: "exact".to_string(),
            matched_key: None,
        },
        PosterMatch::Fuzzy { key, url } => PosterResult {
            title: args.title.clone(),
            poster_url: url,
            kind: "fuzzy".to_string(),
            matched_key: Some(key),
        },
        PosterMatch::Placeholder { url } => PosterResult {
            title: args.title.clone(),
            poster_url: url,
            kind: "placeholder".to_string(),
            matched_key: None,
        },
    };

    output_result("Poster:", &result, cli_args)
}

fn details(args: &DetailsArgs, config: EngineConfig, cli_args: &RecomendaArgs) -> Result<()> {
    let engine = build_engine(&args.catalog, config)?;

    let details = engine.details(args.id).ok_or_else(|| {
        RecomendaError::invalid_argument(format!(
            "id {} is out of range for a catalog of {} movies",
            args.id,
            engine.catalog().len()
        ))
    })?;

    output_result("Movie details:", &details, cli_args)
}

fn stats(args: &StatsArgs, config: EngineConfig, cli_args: &RecomendaArgs) -> Result<()> {
    let engine = build_engine(&args.catalog, config)?;
    output_result("Engine statistics:", &engine.stats(), cli_args)
}
