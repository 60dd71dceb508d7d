// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction. Each spec knows *where the ground truth lives in
//! the HTML* of one kind of page and how to read it without falling over.
//!
//! ## What lives here
//! - **Pure HTML parsing** of an already-downloaded document (no network).
//! - **Source precedence**, e.g. the embedded JSON-LD block first, then a
//!   visible DOM fragment as a fallback.
//! - **Normalization** of loosely formatted values via `core::parse`.
//!
//! ## What does **not** live here
//! - Fetching (`core::net`), persistence (`store`), merging with operator input
//!   (`data::DataSetRecord::assemble`).
//!
//! ## Conventions & invariants
//! - Missing or malformed metadata is **not an error**: the field is `None`.
//!   Manual entry compensates; a half-empty page must never abort a fetch.
//! - Specs are testable **offline** against saved HTML fixtures.
//!
//! ## Current specs
//! - `title` – Year, rating, vote count and runtime from a movie title page.
pub mod title;
