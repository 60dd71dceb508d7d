// src/config/consts.rs
use std::time::Duration;

// Backend
pub const DEFAULT_DB_NAME: &str = "Movie-List";
pub const DEFAULT_POPULATION_COLLECTION: &str = "Population";
pub const DATASET_COLLECTION: &str = "Data-Set";
pub const APP_NAME: &str = "movie-sampler";
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
pub const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(15);

// Environment keys
pub const ENV_URI: &str = "MONGO_URI";
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_COLLECTION: &str = "COLLECTION_NAME";

// Net config
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(20);
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/123.0 Safari/537.36";

// Listing results are reused for this long
pub const LIST_CACHE_TTL: Duration = Duration::from_secs(10);

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_POPULATION_FILE: &str = "population.csv";
