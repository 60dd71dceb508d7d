// src/store/backend.rs
//! The seam between `RecordStore` and a concrete document database.

use crate::data::{DataSetRecord, PopulationRecord, RecordKey};
use crate::error::Result;

/// Whether an upsert created a new record or replaced an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// A live connection to the two collections. Every method is one round-trip.
pub trait Backend {
    /// Lightweight round-trip proving the server answers.
    fn ping(&self) -> Result<()>;

    /// Population projected to `{ID, Movie}`, sorted by ID ascending.
    fn find_population(&self) -> Result<Vec<PopulationRecord>>;

    /// Number of records removed (0 or 1).
    fn delete_one(&self, id: i64) -> Result<u64>;

    /// Remove every record whose ID is in `ids`, in one operation.
    fn delete_many(&self, ids: &[i64]) -> Result<u64>;

    /// Uniform sample without replacement, at most `k` records, unordered.
    fn sample(&self, k: usize) -> Result<Vec<PopulationRecord>>;

    /// Replace all tracked fields at `key`, creating the record if absent.
    fn upsert_dataset(&self, key: &RecordKey, record: &DataSetRecord) -> Result<UpsertOutcome>;

    fn find_dataset(&self) -> Result<Vec<DataSetRecord>>;
}

/// Knows how to open a [`Backend`]. Connecting includes the initial handshake,
/// so a returned backend has answered at least once.
pub trait Connector {
    type Backend: Backend;

    fn connect(&self) -> Result<Self::Backend>;
}
