//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, RecomendaArgs};
use crate::engine::{RecommendationPage, RecommendedMovie};
use crate::error::Result;

/// Result structure for title resolution.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub query: String,
    pub title: Option<String>,
}

/// Result structure for a poster lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct PosterResult {
    pub title: String,
    pub poster_url: String,
    /// How the URL was found: exact, fuzzy or placeholder.
    pub kind: String,
    pub matched_key: Option<String>,
}

/// Result structure for a query with no matching movie.
#[derive(Debug, Serialize, Deserialize)]
pub struct NotFoundResult {
    pub query: String,
    pub found: bool,
}

impl NotFoundResult {
    pub fn new<S: Into<String>>(query: S) -> Self {
        NotFoundResult {
            query: query.into(),
            found: false,
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &RecomendaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output recommendations in the specified format.
pub fn output_recommendations(page: &RecommendationPage, args: &RecomendaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("Found film: {}", page.query_title);
                println!();
            }
            println!("Recommendations:");
            println!("════════════════");
            for (i, movie) in page.movies.iter().enumerate() {
                println!("{}", format_movie(i + 1, movie));
            }
            if page.movies.is_empty() {
                println!("(none)");
            }
            Ok(())
        }
        OutputFormat::Json => output_json(page, args),
    }
}

/// Output the "no matching movie" outcome.
pub fn output_not_found(query: &str, args: &RecomendaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("Sorry, no matching movie found for '{query}'.");
            Ok(())
        }
        OutputFormat::Json => output_json(&NotFoundResult::new(query), args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &RecomendaArgs) -> Result<()> {
    if args.verbosity() > 0 && !message.is_empty() {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(&val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(&value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &RecomendaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_movie(rank: usize, movie: &RecommendedMovie) -> String {
    format!(
        "{rank:>3}. {} (score: {:.3})\n     {}",
        movie.title, movie.score, movie.poster_url
    )
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "-".to_string(),
    }
}
