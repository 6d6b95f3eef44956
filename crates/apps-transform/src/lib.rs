//! Cleaning passes over app catalog tables.
//!
//! Every pass borrows its input and returns a new [`apps_model::AppTable`];
//! nothing is mutated in place.

pub mod clean;
pub mod dedupe;
pub mod error;
pub mod language;
pub mod price;
pub mod validate;

pub use clean::{
    CleanedTable, CleaningReport, CleaningStage, DUPLICATE_EXAMPLES, clean, clean_through,
};
pub use dedupe::{
    DuplicateReport, ReviewsIndex, duplicate_report, resolve_duplicates, reviews_index, rows_named,
};
pub use error::{Result, TransformError};
pub use language::{NON_ASCII_THRESHOLD, filter_english, is_english, non_ascii_count};
pub use price::{filter_free, is_free};
pub use validate::{RejectReason, RejectedRow, Validated, validate_rows};
