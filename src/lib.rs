// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod report;
pub mod runner;
pub mod sampler;
pub mod scrape;
pub mod store;

pub use error::{Error, Result};
