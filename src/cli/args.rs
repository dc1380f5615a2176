//! Command line argument parsing for the Recomenda CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::loader::Encoding;

/// Recomenda - find movies similar to the ones you like
#[derive(Parser, Debug, Clone)]
#[command(name = "recomenda")]
#[command(about = "Content-based movie recommendations from TF-IDF similarity")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RecomendaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Engine configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "RECOMENDA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl RecomendaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Recommend movies similar to a title
    Recommend(RecommendArgs),

    /// Show which catalog title a query resolves to
    Resolve(ResolveArgs),

    /// Look up the poster of a title
    Poster(PosterArgs),

    /// Show title, overview and poster of a catalog entry
    Details(DetailsArgs),

    /// Show catalog and vector space statistics
    Stats(StatsArgs),
}

/// Input tables shared by several commands.
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Movies CSV file
    #[arg(short, long, value_name = "MOVIES_CSV", env = "RECOMENDA_MOVIES")]
    pub movies: PathBuf,

    /// Poster CSV file with Title and Poster columns
    #[arg(short, long, value_name = "POSTERS_CSV", env = "RECOMENDA_POSTERS")]
    pub posters: Option<PathBuf>,

    /// Text encoding of the poster file
    #[arg(long, default_value = "latin1", value_parser = parse_encoding)]
    pub poster_encoding: Encoding,
}

/// Arguments for recommending movies
#[derive(Parser, Debug, Clone)]
pub struct RecommendArgs {
    /// Title of a movie you like
    #[arg(value_name = "TITLE")]
    pub query: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Number of recommendations (defaults to the configured count)
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,
}

/// Arguments for resolving a title
#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    /// Free-text title
    #[arg(value_name = "TITLE")]
    pub query: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// Arguments for a poster lookup
#[derive(Parser, Debug, Clone)]
pub struct PosterArgs {
    /// Movie title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Poster CSV file with Title and Poster columns
    #[arg(short, long, value_name = "POSTERS_CSV", env = "RECOMENDA_POSTERS")]
    pub posters: PathBuf,

    /// Text encoding of the poster file
    #[arg(long, default_value = "latin1", value_parser = parse_encoding)]
    pub poster_encoding: Encoding,
}

/// Arguments for showing one catalog entry
#[derive(Parser, Debug, Clone)]
pub struct DetailsArgs {
    /// Catalog id (row index)
    #[arg(value_name = "ID")]
    pub id: usize,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// Arguments for statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn parse_encoding(value: &str) -> Result<Encoding, String> {
    value.parse::<Encoding>().map_err(|e| e.to_string())
}
