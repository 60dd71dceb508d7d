// src/store/memory.rs
//! In-process stand-in for the document database.
//!
//! `MemoryDb` is a cheap, cloneable handle; every connector and backend made
//! from it sees the same collections, which is how two "clients" can race each
//! other in tests. It counts backend round-trips and can be switched offline
//! to behave like an unreachable server.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use rand::seq::index;

use super::backend::{Backend, Connector, UpsertOutcome};
use crate::data::{DataSetRecord, PopulationRecord, RecordKey};
use crate::error::{Error, Result};

#[derive(Default)]
struct State {
    population: BTreeMap<i64, String>,
    dataset: Vec<DataSetRecord>,
    offline: bool,
    connects: usize,
    round_trips: usize,
}

#[derive(Clone, Default)]
pub struct MemoryDb {
    inner: Arc<Mutex<State>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_population<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PopulationRecord>,
    {
        let db = Self::new();
        db.load_population(records);
        db
    }

    /// Bulk load (IDs are unique; a repeated ID replaces the earlier name).
    pub fn load_population<I>(&self, records: I)
    where
        I: IntoIterator<Item = PopulationRecord>,
    {
        let mut st = self.state();
        for r in records {
            st.population.insert(r.id, r.movie);
        }
    }

    pub fn connector(&self) -> MemoryConnector {
        MemoryConnector { db: self.clone() }
    }

    pub fn set_offline(&self, offline: bool) {
        self.state().offline = offline;
    }

    /// Backend calls served so far, connect handshakes included.
    pub fn round_trips(&self) -> usize {
        self.state().round_trips
    }

    pub fn connects(&self) -> usize {
        self.state().connects
    }

    pub fn population_ids(&self) -> Vec<i64> {
        self.state().population.keys().copied().collect()
    }

    pub fn dataset(&self) -> Vec<DataSetRecord> {
        self.state().dataset.clone()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Lock for one round-trip, or fail like a server that cannot be selected.
    fn round_trip(&self) -> Result<MutexGuard<'_, State>> {
        let mut st = self.state();
        if st.offline {
            return Err(Error::Unavailable(s!("memory backend is offline")));
        }
        st.round_trips += 1;
        Ok(st)
    }
}

#[derive(Clone)]
pub struct MemoryConnector {
    db: MemoryDb,
}

impl MemoryConnector {
    pub fn db(&self) -> &MemoryDb {
        &self.db
    }
}

impl Connector for MemoryConnector {
    type Backend = MemoryBackend;

    fn connect(&self) -> Result<MemoryBackend> {
        let mut st = self.db.round_trip()?;
        st.connects += 1;
        Ok(MemoryBackend { db: self.db.clone() })
    }
}

pub struct MemoryBackend {
    db: MemoryDb,
}

impl Backend for MemoryBackend {
    fn ping(&self) -> Result<()> {
        self.db.round_trip().map(|_| ())
    }

    fn find_population(&self) -> Result<Vec<PopulationRecord>> {
        let st = self.db.round_trip()?;
        Ok(st
            .population
            .iter()
            .map(|(id, movie)| PopulationRecord::new(*id, movie.clone()))
            .collect())
    }

    fn delete_one(&self, id: i64) -> Result<u64> {
        let mut st = self.db.round_trip()?;
        Ok(u64::from(st.population.remove(&id).is_some()))
    }

    fn delete_many(&self, ids: &[i64]) -> Result<u64> {
        let mut st = self.db.round_trip()?;
        let mut deleted = 0;
        for id in ids {
            if st.population.remove(id).is_some() {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    fn sample(&self, k: usize) -> Result<Vec<PopulationRecord>> {
        let st = self.db.round_trip()?;
        let len = st.population.len();
        if k > len {
            return Err(Error::Backend(format!(
                "sample size {k} exceeds population of {len}"
            )));
        }
        let all: Vec<(&i64, &String)> = st.population.iter().collect();
        let picked = index::sample(&mut rand::thread_rng(), len, k);
        Ok(picked
            .into_iter()
            .map(|i| PopulationRecord::new(*all[i].0, all[i].1.clone()))
            .collect())
    }

    fn upsert_dataset(&self, key: &RecordKey, record: &DataSetRecord) -> Result<UpsertOutcome> {
        let mut st = self.db.round_trip()?;
        match st.dataset.iter().position(|r| r.matches(key)) {
            Some(i) => {
                st.dataset[i] = record.clone();
                Ok(UpsertOutcome::Updated)
            }
            None => {
                st.dataset.push(record.clone());
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    fn find_dataset(&self) -> Result<Vec<DataSetRecord>> {
        Ok(self.db.round_trip()?.dataset.clone())
    }
}
