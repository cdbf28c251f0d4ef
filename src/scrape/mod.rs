// src/scrape/mod.rs
//! Scan loop and per-page extraction producing the long-form collection.

pub mod driver;
pub mod extractor;
pub mod records;

pub use driver::{drop_load_timeouts, ScanDriver};
pub use records::{FieldOutcome, RoleRecord};
