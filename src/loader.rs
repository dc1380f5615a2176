//! CSV loading for the catalog tables.
//!
//! The movies table needs a `title` column; `genres`, `keywords`, `tagline`,
//! `cast`, `director` and `overview` are read when present and default to the
//! empty string otherwise. Other columns are ignored.
//!
//! The poster table needs `Title` and `Poster` columns. Column names are
//! matched case-insensitively. Poster files are commonly Latin-1 encoded, so
//! the text encoding is selectable.
//!
//! ```csv
//! index,title,genres,director
//! 0,Avatar,Action Adventure,James Cameron
//! ```

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord};
use log::info;
use serde::{Deserialize, Serialize};

use crate::catalog::{Attribute, Catalog, CatalogEntry, PosterCatalog, PosterCatalogEntry};
use crate::error::{RecomendaError, Result};

/// Text encoding of an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Utf8,
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
}

impl Encoding {
    /// Decode raw bytes into text.
    pub fn decode(&self, bytes: Vec<u8>) -> Result<String> {
        let text = match self {
            Encoding::Utf8 => String::from_utf8(bytes)
                .map_err(|e| RecomendaError::other(format!("invalid UTF-8 input: {e}")))?,
            Encoding::Latin1 => bytes.into_iter().map(char::from).collect(),
        };

        Ok(match text.strip_prefix('\u{feff}') {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => f.write_str("utf8"),
            Encoding::Latin1 => f.write_str("latin1"),
        }
    }
}

impl FromStr for Encoding {
    type Err = RecomendaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "utf8" => Ok(Encoding::Utf8),
            "latin1" | "iso88591" => Ok(Encoding::Latin1),
            other => Err(RecomendaError::invalid_argument(format!(
                "unsupported encoding: {other}"
            ))),
        }
    }
}

/// Reads catalog tables from delimited text.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    delimiter: u8,
    encoding: Encoding,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogLoader {
    /// A comma-delimited UTF-8 loader.
    pub fn new() -> Self {
        CatalogLoader {
            delimiter: b',',
            encoding: Encoding::Utf8,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter as u8;
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Load the movies table from a file.
    pub fn load_movies<P: AsRef<Path>>(&self, path: P) -> Result<Catalog> {
        let catalog = self.read_movies(fs::File::open(path.as_ref())?)?;
        info!(
            "loaded {} movies from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    /// Load the poster table from a file.
    pub fn load_posters<P: AsRef<Path>>(&self, path: P) -> Result<PosterCatalog> {
        let posters = self.read_posters(fs::File::open(path.as_ref())?)?;
        info!(
            "loaded {} poster titles from {}",
            posters.len(),
            path.as_ref().display()
        );
        Ok(posters)
    }

    /// Read the movies table.
    pub fn read_movies<R: Read>(&self, reader: R) -> Result<Catalog> {
        let (headers, records) = self.read_records(reader)?;

        let title = require_column(&headers, "title")?;
        let attributes: Vec<(Attribute, usize)> = Attribute::ALL
            .into_iter()
            .filter_map(|attribute| {
                find_column(&headers, attribute.name()).map(|idx| (attribute, idx))
            })
            .collect();

        let entries = records
            .iter()
            .enumerate()
            .map(|(id, record)| {
                let mut entry = CatalogEntry::new(id, cell(record, title));
                for (attribute, idx) in &attributes {
                    entry.set(*attribute, cell(record, *idx));
                }
                entry
            })
            .collect();

        Ok(Catalog::new(entries))
    }

    /// Read the poster table.
    pub fn read_posters<R: Read>(&self, reader: R) -> Result<PosterCatalog> {
        let (headers, records) = self.read_records(reader)?;

        let title = require_column(&headers, "Title")?;
        let poster = require_column(&headers, "Poster")?;

        Ok(records
            .iter()
            .map(|record| PosterCatalogEntry::new(cell(record, title), cell(record, poster)))
            .collect())
    }

    fn read_records<R: Read>(&self, mut reader: R) -> Result<(StringRecord, Vec<StringRecord>)> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = self.encoding.decode(bytes)?;

        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = csv_reader.headers()?.clone();
        let records = csv_reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

        Ok((headers, records))
    }
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn require_column(headers: &StringRecord, name: &str) -> Result<usize> {
    find_column(headers, name)
        .ok_or_else(|| RecomendaError::column(format!("missing required column {name:?}")))
}

fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("")
}
