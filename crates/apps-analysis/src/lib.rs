//! Descriptive statistics over cleaned app catalogs.
//!
//! - [`freq_table`] / [`display_table`]: percentage share per category
//! - [`grouped_average`]: mean popularity per category
//! - [`apps_in_group`], [`average_below`]: drill-downs into one category
//! - [`market_profile`]: share and average side by side, for recommending
//!   a category

pub mod average;
pub mod error;
pub mod frequency;
pub mod listing;
pub mod profile;

pub use average::{Normalize, average_below, grouped_average};
pub use error::{AnalysisError, Result};
pub use frequency::{FrequencyTable, display_table, freq_table, sort_descending, value_counts};
pub use listing::apps_in_group;
pub use profile::{GroupProfile, market_profile};
