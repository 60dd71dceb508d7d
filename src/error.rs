// src/error.rs
use thiserror::Error;

/// Everything the core can fail with.
///
/// Missing or malformed structured data on a page is *not* represented here:
/// extraction degrades to `None` fields instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Network failure, timeout or non-2xx status while retrieving a page.
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    /// Backend could not be reached within the connect/server-selection timeouts.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Backend answered but refused the request.
    #[error("backend rejected request: {0}")]
    Backend(String),

    #[error("invalid request: {0}")]
    Validation(String),

    #[error("could not encode record: {0}")]
    Encode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Error::Unavailable(_))
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, Error::Fetch { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
