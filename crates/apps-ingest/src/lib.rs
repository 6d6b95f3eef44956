//! App catalog ingestion utilities.
//!
//! This crate loads the Google Play and App Store exports into positional
//! string tables and renders bounded windows of rows for inspection.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use apps_ingest::{explore, read_app_table};
//! use apps_model::Marketplace;
//!
//! let table = read_app_table(Path::new("AppleStore.csv"), Marketplace::AppStore)?;
//! println!("{}", explore(&table.rows, 0, 3, true));
//! ```

mod error;
mod explore;
mod loader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use loader::{read_app_table, read_app_table_from_reader};

// === Exploration ===
pub use explore::{ExploreWindow, explore, with_header};
