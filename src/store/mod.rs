// src/store/mod.rs
//! Data access for the Population and Data-Set collections.
//!
//! `RecordStore` owns one lazily opened backend connection and a short-lived
//! cache of the last population listing. Backends plug in through the
//! [`Connector`]/[`Backend`] traits: MongoDB for real use, an in-process
//! store for offline runs and tests.

pub mod backend;
pub mod cache;
pub mod connection;
pub mod memory;
pub mod mongo;

use std::collections::BTreeSet;
use std::time::Duration;

pub use backend::{Backend, Connector, UpsertOutcome};
pub use memory::{MemoryConnector, MemoryDb};
pub use mongo::{MongoBackend, MongoConnector};

use crate::config::consts::LIST_CACHE_TTL;
use crate::config::StoreOptions;
use crate::data::{DataSetRecord, PopulationRecord};
use crate::error::Result;
use cache::TtlCache;
use connection::Connection;

pub struct RecordStore<C: Connector> {
    conn: Connection<C>,
    listing: TtlCache<Vec<PopulationRecord>>,
}

pub type MongoStore = RecordStore<MongoConnector>;

impl MongoStore {
    /// Nothing is contacted until the first operation.
    pub fn open(options: StoreOptions) -> Self {
        RecordStore::new(MongoConnector::new(options))
    }
}

impl<C: Connector> RecordStore<C> {
    pub fn new(connector: C) -> Self {
        Self::with_cache_ttl(connector, LIST_CACHE_TTL)
    }

    pub fn with_cache_ttl(connector: C, ttl: Duration) -> Self {
        Self {
            conn: Connection::new(connector),
            listing: TtlCache::new(ttl),
        }
    }

    /// Explicit health check. Connects first if needed, then pings.
    pub fn ping(&mut self) -> Result<()> {
        self.conn.ensure_connected()?.ping()
    }

    /// Whole population sorted by ID. Served from cache while it is fresh.
    pub fn list_population(&mut self) -> Result<Vec<PopulationRecord>> {
        if let Some(hit) = self.listing.get() {
            logd!("Population listing served from cache ({} rows)", hit.len());
            return Ok(hit.clone());
        }
        let rows = self.conn.ensure_connected()?.find_population()?;
        self.listing.put(rows.clone());
        Ok(rows)
    }

    /// 0 when the ID does not exist.
    pub fn delete_by_id(&mut self, id: i64) -> Result<u64> {
        let deleted = self.conn.ensure_connected()?.delete_one(id)?;
        self.listing.invalidate();
        logf!("delete_by_id({id}) removed {deleted}");
        Ok(deleted)
    }

    /// Bulk delete. IDs that do not exist are ignored; duplicates count once.
    pub fn delete_by_ids(&mut self, ids: &[i64]) -> Result<u64> {
        let unique: Vec<i64> = ids.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        if unique.is_empty() {
            return Ok(0);
        }
        let deleted = self.conn.ensure_connected()?.delete_many(&unique)?;
        self.listing.invalidate();
        logf!("delete_by_ids({} ids) removed {deleted}", unique.len());
        Ok(deleted)
    }

    /// Up to `k` random records. A backend that refuses the size (e.g. `k`
    /// above the population) reports an error rather than a short list.
    pub fn sample_random(&mut self, k: usize) -> Result<Vec<PopulationRecord>> {
        if k == 0 {
            return Ok(Vec::new());
        }
        self.conn.ensure_connected()?.sample(k)
    }

    /// Insert or fully overwrite by URL, or by (Movie, Year) when there is no URL.
    pub fn upsert_dataset_record(&mut self, record: &DataSetRecord) -> Result<UpsertOutcome> {
        let key = record.match_key();
        let outcome = self.conn.ensure_connected()?.upsert_dataset(&key, record)?;
        logf!("Data-Set upsert {key:?}: {outcome:?}");
        Ok(outcome)
    }

    pub fn dataset_records(&mut self) -> Result<Vec<DataSetRecord>> {
        self.conn.ensure_connected()?.find_dataset()
    }

    /// Drop the cached listing so the next read goes to the backend.
    pub fn invalidate_cache(&mut self) {
        self.listing.invalidate();
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_connected()
    }

    pub fn connector(&self) -> &C {
        self.conn.connector()
    }
}
