//! Data model shared by the app-profiles crates.
//!
//! Catalog exports are kept as positional string rows; the meaning of each
//! position is described by the [`ColumnLayout`] of the [`Marketplace`] the
//! file came from.

pub mod error;
pub mod market;
pub mod table;

pub use error::{ModelError, Result};
pub use market::{
    APP_STORE_LAYOUT, BoundedColumn, ColumnLayout, ColumnRef, GOOGLE_PLAY_LAYOUT, Marketplace,
};
pub use table::{AppTable, Row, cell};
