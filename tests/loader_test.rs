//! Integration tests for loading catalog tables from disk.

use std::fs;

use recomenda::config::EngineConfig;
use recomenda::engine::Engine;
use recomenda::error::{RecomendaError, Result};
use recomenda::loader::{CatalogLoader, Encoding};
use tempfile::TempDir;

const MOVIES_CSV: &str = "\
index,title,genres,keywords,cast,director,overview,budget
0,Avatar,Action Science Fiction,space war,Sigourney Weaver,James Cameron,A marine on Pandora.,237000000
1,Aliens,Action Science Fiction,space marine,Sigourney Weaver,James Cameron,They are back.,18500000
2,Heat,Crime Drama,heist,Al Pacino,Michael Mann,A cop and a thief.,60000000
3,\"Crouching Tiger, Hidden Dragon\",Action Drama,martial arts,Chow Yun-fat,Ang Lee,,17000000
";

#[test]
fn load_tables_and_build_engine() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let movies_path = temp_dir.path().join("movies.csv");
    let posters_path = temp_dir.path().join("posters.csv");

    fs::write(&movies_path, MOVIES_CSV)?;
    // "Amélie" in ISO-8859-1.
    let mut posters = b"imdbId,Title,Poster\n1,Avatar,http://img/avatar.jpg\n2,Am".to_vec();
    posters.extend_from_slice(&[0xe9]);
    posters.extend_from_slice(b"lie,http://img/amelie.jpg\n");
    fs::write(&posters_path, posters)?;

    let catalog = CatalogLoader::new().load_movies(&movies_path)?;
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.get(3).unwrap().title, "Crouching Tiger, Hidden Dragon");
    assert_eq!(catalog.get(0).unwrap().overview, "A marine on Pandora.");

    let posters = CatalogLoader::new()
        .with_encoding(Encoding::Latin1)
        .load_posters(&posters_path)?;
    assert_eq!(posters.len(), 2);

    let engine = Engine::build(catalog, posters, EngineConfig::default())?;
    let page = engine.recommend_with_posters("Avatar", 1)?;
    assert_eq!(page.movies[0].title, "Aliens");
    assert_eq!(engine.poster_for("AMÉLIE"), "http://img/amelie.jpg");
    assert_eq!(engine.poster_for("avatar"), "http://img/avatar.jpg");
    Ok(())
}

#[test]
fn missing_title_column_is_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("movies.csv");
    fs::write(&path, "name,genres\nAvatar,Action\n")?;

    let result = CatalogLoader::new().load_movies(&path);
    assert!(matches!(result, Err(RecomendaError::Column(_))));
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let result = CatalogLoader::new().load_movies("/nonexistent/movies.csv");
    assert!(matches!(result, Err(RecomendaError::Io(_))));
}

#[test]
fn config_file_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{ "default_top_n": 5, "features": ["genres", "director"], "parallel": false }"#,
    )?;

    let config = EngineConfig::from_file(&path)?;
    assert_eq!(config.default_top_n, 5);
    assert_eq!(config.features.len(), 2);
    assert!(!config.parallel);
    assert_eq!(config.primary_cutoff, 0.6);
    Ok(())
}
