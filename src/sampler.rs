// src/sampler.rs
//! Draw a random subset of the population and, on confirmation, delete it.
//!
//! Sampling and deleting are two separate backend operations. Another writer
//! can change the population in between: a sampled movie may already be gone
//! (it is then simply not counted), and nothing new is picked up. This is
//! accepted for a single-operator tool; no lock or transaction guards it.

use crate::data::PopulationRecord;
use crate::error::{Error, Result};
use crate::store::{Connector, RecordStore};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawOutcome {
    /// What was drawn, sorted by ID.
    pub sampled: Vec<PopulationRecord>,
    pub confirmed: bool,
    pub deleted: u64,
}

/// Caller-side availability check before sampling: `1 <= k <= remaining`.
/// Returns how many records remain.
pub fn check_available<C: Connector>(store: &mut RecordStore<C>, k: usize) -> Result<usize> {
    if k == 0 {
        return Err(Error::Validation(s!("sample size must be at least 1")));
    }
    let remaining = store.list_population()?.len();
    if k > remaining {
        return Err(Error::Validation(format!(
            "Not enough movies to sample {k} (only {remaining} left)"
        )));
    }
    Ok(remaining)
}

/// Preview: `k` random records sorted by ID, nothing deleted.
pub fn draw<C: Connector>(store: &mut RecordStore<C>, k: usize) -> Result<Vec<PopulationRecord>> {
    let mut sampled = store.sample_random(k)?;
    sampled.sort_by_key(|r| r.id);
    Ok(sampled)
}

/// Draw `k`, show them to `confirm`, and delete exactly those IDs if it agrees.
pub fn draw_and_delete<C, F>(store: &mut RecordStore<C>, k: usize, confirm: F) -> Result<DrawOutcome>
where
    C: Connector,
    F: FnOnce(&[PopulationRecord]) -> bool,
{
    let sampled = draw(store, k)?;
    if sampled.is_empty() || !confirm(&sampled) {
        return Ok(DrawOutcome { sampled, confirmed: false, deleted: 0 });
    }

    let ids: Vec<i64> = sampled.iter().map(|r| r.id).collect();
    let deleted = store.delete_by_ids(&ids)?;
    if deleted < ids.len() as u64 {
        logf!("Drew {} but deleted {deleted}; the population changed in between", ids.len());
    }
    store.invalidate_cache();
    Ok(DrawOutcome { sampled, confirmed: true, deleted })
}
