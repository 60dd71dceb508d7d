// src/report.rs
use crate::error::Error;

/// Where operation outcomes are surfaced to a human.
/// Frontends implement this; the core only calls it.
pub trait Report {
    /// Free-form status line.
    fn info(&mut self, _msg: &str) {}

    /// An operation failed and its safe default was returned instead.
    fn failure(&mut self, _op: &str, _err: &Error) {}
}

/// Keeps everything in memory; useful when rendering happens later.
#[derive(Debug, Default)]
pub struct Collected {
    pub infos: Vec<String>,
    pub failures: Vec<(String, String)>,
}

impl Report for Collected {
    fn info(&mut self, msg: &str) {
        self.infos.push(msg.to_string());
    }

    fn failure(&mut self, op: &str, err: &Error) {
        self.failures.push((op.to_string(), err.to_string()));
    }
}
