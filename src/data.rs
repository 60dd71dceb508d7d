// src/data.rs
//! Record shapes for the two collections plus the transient scrape result.
//!
//! Serde names are the document keys used in the collections, so the same
//! types go straight to the backend and to JSON output.

use serde::{Deserialize, Serialize};

use crate::core::sanitize::{non_empty, split_list};

/// One candidate in the Population collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Movie")]
    pub movie: String,
}

impl PopulationRecord {
    pub fn new(id: i64, movie: impl Into<String>) -> Self {
        Self { id, movie: movie.into() }
    }
}

/// The four fields pulled off a title page, plus the URL they came from.
/// Never stored on its own; see [`DataSetRecord::assemble`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapedFields {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Year")]
    pub year: Option<i32>,
    #[serde(rename = "IMDb rating")]
    pub imdb_rating: Option<f64>,
    #[serde(rename = "Number of Votes")]
    pub number_of_votes: Option<i64>,
    /// Minutes
    #[serde(rename = "Runtime")]
    pub runtime: Option<i64>,
}

impl ScrapedFields {
    pub fn empty(url: &str) -> Self {
        Self { url: url.to_string(), ..Self::default() }
    }
}

/// Operator-entered part of a Data-Set record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ManualFields {
    pub movie: Option<String>,
    pub genre: Vec<String>,
    pub director: Vec<String>,
    pub writer: Vec<String>,
    pub country: Vec<String>,
    pub gross_profit: Option<i64>,
}

impl ManualFields {
    /// Build from raw form text. List fields are comma-separated; a gross of 0 means "not entered".
    pub fn from_text(
        movie: &str,
        genre: &str,
        director: &str,
        writer: &str,
        country: &str,
        gross_profit: i64,
    ) -> Self {
        Self {
            movie: non_empty(movie),
            genre: split_list(genre),
            director: split_list(director),
            writer: split_list(writer),
            country: split_list(country),
            gross_profit: (gross_profit != 0).then_some(gross_profit),
        }
    }
}

/// Enriched record in the Data-Set collection. There is deliberately no budget field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSetRecord {
    #[serde(rename = "URL")]
    pub url: Option<String>,
    #[serde(rename = "Movie")]
    pub movie: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Vec<String>,
    #[serde(rename = "Year")]
    pub year: Option<i32>,
    #[serde(rename = "IMDb rating")]
    pub imdb_rating: Option<f64>,
    #[serde(rename = "Director", default)]
    pub director: Vec<String>,
    #[serde(rename = "Number of Votes")]
    pub number_of_votes: Option<i64>,
    #[serde(rename = "Writer", default)]
    pub writer: Vec<String>,
    #[serde(rename = "Country", default)]
    pub country: Vec<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<i64>,
    #[serde(rename = "Gross Profit")]
    pub gross_profit: Option<i64>,
}

/// Identity of a Data-Set record: the URL when there is one, else (Movie, Year).
///
/// Two different films with the same title and year and no URL share a key
/// and overwrite each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordKey {
    Url(String),
    NameYear { movie: Option<String>, year: Option<i32> },
}

impl DataSetRecord {
    /// Merge the URL, manual fields and (optionally) scraped fields into one record.
    /// Year, rating, votes and runtime come only from the scrape.
    pub fn assemble(url: Option<&str>, manual: ManualFields, scraped: Option<&ScrapedFields>) -> Self {
        Self {
            url: url.and_then(non_empty),
            movie: manual.movie,
            genre: manual.genre,
            year: scraped.and_then(|s| s.year),
            imdb_rating: scraped.and_then(|s| s.imdb_rating),
            director: manual.director,
            number_of_votes: scraped.and_then(|s| s.number_of_votes),
            writer: manual.writer,
            country: manual.country,
            runtime: scraped.and_then(|s| s.runtime),
            gross_profit: manual.gross_profit,
        }
    }

    pub fn match_key(&self) -> RecordKey {
        match &self.url {
            Some(url) => RecordKey::Url(url.clone()),
            None => RecordKey::NameYear { movie: self.movie.clone(), year: self.year },
        }
    }

    pub fn matches(&self, key: &RecordKey) -> bool {
        match key {
            RecordKey::Url(url) => self.url.as_deref() == Some(url.as_str()),
            RecordKey::NameYear { movie, year } => self.movie == *movie && self.year == *year,
        }
    }
}
