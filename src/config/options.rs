// src/config/options.rs
use std::time::Duration;

use super::consts::*;
use crate::error::{Error, Result};

/// Where the two collections live and how long we are willing to wait for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    pub uri: String,
    pub db_name: String,
    pub population_collection: String,
    pub dataset_collection: String,
    pub app_name: String,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl StoreOptions {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            db_name: s!(DEFAULT_DB_NAME),
            population_collection: s!(DEFAULT_POPULATION_COLLECTION),
            dataset_collection: s!(DATASET_COLLECTION),
            app_name: s!(APP_NAME),
            connect_timeout: CONNECT_TIMEOUT,
            server_selection_timeout: SERVER_SELECTION_TIMEOUT,
        }
    }

    /// Read `MONGO_URI`, `DB_NAME` and `COLLECTION_NAME`, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            logd!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with the variable source supplied by the caller.
    /// The connection string is required; everything else falls back to defaults.
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let uri = present(ENV_URI)
            .ok_or_else(|| Error::Config(format!("Missing {ENV_URI} in environment or .env")))?;

        let mut opts = Self::new(uri);
        if let Some(db) = present(ENV_DB_NAME) {
            opts.db_name = db;
        }
        if let Some(col) = present(ENV_COLLECTION) {
            opts.population_collection = col;
        }
        Ok(opts)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: s!(USER_AGENT),
            timeout: FETCH_TIMEOUT,
        }
    }
}
