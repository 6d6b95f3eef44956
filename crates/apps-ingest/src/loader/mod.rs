//! Catalog loading.

mod reader;

pub use reader::{read_app_table, read_app_table_from_reader};
