//! Library components of the app-profiles CLI.

pub mod logging;
pub mod pipeline;
pub mod summary;
