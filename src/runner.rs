// src/runner.rs
//! Operation boundary for frontends.
//!
//! Every method here runs one user action to completion. Failures are logged,
//! handed to the [`Report`] sink, and replaced by a safe default (empty list,
//! zero count, `None`, `false`), so nothing escapes as a fault.

use crate::{
    config::FetchOptions,
    data::{DataSetRecord, ManualFields, PopulationRecord, ScrapedFields},
    error::Result,
    report::Report,
    sampler::{self, DrawOutcome},
    scrape,
    store::{Connector, RecordStore, UpsertOutcome},
};

pub struct Runner<C: Connector, R: Report> {
    store: RecordStore<C>,
    fetch: FetchOptions,
    report: R,
}

impl<C: Connector, R: Report> Runner<C, R> {
    pub fn new(store: RecordStore<C>, report: R) -> Self {
        Self { store, fetch: FetchOptions::default(), report }
    }

    pub fn ping(&mut self) -> bool {
        let res = self.store.ping();
        let ok = settle(&mut self.report, "ping", res.map(|_| true), false);
        if ok {
            self.report.info("Connection OK (ping passed).");
        }
        ok
    }

    pub fn list_population(&mut self) -> Vec<PopulationRecord> {
        let res = self.store.list_population();
        settle(&mut self.report, "list population", res, Vec::new())
    }

    pub fn delete_by_id(&mut self, id: i64) -> u64 {
        let res = self.store.delete_by_id(id);
        settle(&mut self.report, "delete", res, 0)
    }

    pub fn delete_by_ids(&mut self, ids: &[i64]) -> u64 {
        let res = self.store.delete_by_ids(ids);
        settle(&mut self.report, "bulk delete", res, 0)
    }

    pub fn sample_random(&mut self, k: usize) -> Vec<PopulationRecord> {
        let res = sampler::draw(&mut self.store, k);
        settle(&mut self.report, "sample", res, Vec::new())
    }

    /// Remaining population size if `k` can be drawn; reports why not otherwise.
    pub fn available(&mut self, k: usize) -> Option<usize> {
        let res = sampler::check_available(&mut self.store, k).map(Some);
        settle(&mut self.report, "availability check", res, None)
    }

    pub fn draw_and_delete<F>(&mut self, k: usize, confirm: F) -> DrawOutcome
    where
        F: FnOnce(&[PopulationRecord]) -> bool,
    {
        let res = sampler::draw_and_delete(&mut self.store, k, confirm);
        let out = settle(&mut self.report, "draw and delete", res, DrawOutcome::default());
        if out.confirmed {
            self.report.info(&format!("Deleted {} movies.", out.deleted));
        }
        out
    }

    pub fn fetch(&mut self, url: &str) -> Option<ScrapedFields> {
        fetch_reported(url, &self.fetch, &mut self.report)
    }

    /// Assemble a Data-Set record and upsert it.
    pub fn save(
        &mut self,
        url: Option<&str>,
        manual: ManualFields,
        scraped: Option<&ScrapedFields>,
    ) -> Option<UpsertOutcome> {
        let record = DataSetRecord::assemble(url, manual, scraped);
        let res = self.store.upsert_dataset_record(&record).map(Some);
        let out = settle(&mut self.report, "save", res, None);
        if out.is_some() {
            self.report.info("Saved to Data-Set.");
        }
        out
    }

    pub fn dataset(&mut self) -> Vec<DataSetRecord> {
        let res = self.store.dataset_records();
        settle(&mut self.report, "read Data-Set", res, Vec::new())
    }

    pub fn refresh(&mut self) {
        self.store.invalidate_cache();
    }

    pub fn report(&self) -> &R {
        &self.report
    }
}

/// Fetch without a store: for frontends that scrape before any database is configured.
/// Same boundary as the `Runner` methods.
pub fn fetch_reported<R: Report>(url: &str, opts: &FetchOptions, report: &mut R) -> Option<ScrapedFields> {
    let res = scrape::fetch_minimal_fields_with(url, opts).map(Some);
    let out = settle(report, "fetch", res, None);
    if out.is_some() {
        report.info("Fetched minimal fields.");
    }
    out
}

fn settle<T, R: Report>(report: &mut R, op: &str, res: Result<T>, default: T) -> T {
    match res {
        Ok(v) => v,
        Err(e) => {
            loge!("{op} failed: {e}");
            report.failure(op, &e);
            default
        }
    }
}
