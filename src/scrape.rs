// src/scrape.rs
use crate::{
    config::FetchOptions,
    core::net,
    data::ScrapedFields,
    error::Result,
    specs::title,
};

/// Fetch a title page and pull Year, rating, votes and runtime off it.
///
/// Only the request can fail. A page without usable metadata comes back with
/// `None` fields, never an error. Nothing is cached between calls.
pub fn fetch_minimal_fields(url: &str) -> Result<ScrapedFields> {
    fetch_minimal_fields_with(url, &FetchOptions::default())
}

pub fn fetch_minimal_fields_with(url: &str, opts: &FetchOptions) -> Result<ScrapedFields> {
    let url = url.trim();
    let body = net::http_get(url, opts)?;
    let fields = title::extract(url, &body);
    logf!(
        "Fetched {url}: year={:?} rating={:?} votes={:?} runtime={:?}",
        fields.year, fields.imdb_rating, fields.number_of_votes, fields.runtime
    );
    Ok(fields)
}
