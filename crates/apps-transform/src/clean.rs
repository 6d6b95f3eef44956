//! Cleaning pipeline with explicit stages.
//!
//! The stages run in order, each returning a new table:
//! 1. **Validate**: drop rows that break the layout (see [`crate::validate`])
//! 2. **Deduplicate**: one row per app name, for exports with repeated entries
//! 3. **English**: drop apps whose names are mostly non-ASCII
//! 4. **Free**: keep apps whose price equals the free sentinel

use std::fmt;

use apps_model::AppTable;
use tracing::{info, info_span};

use crate::dedupe::{DuplicateReport, duplicate_report, resolve_duplicates};
use crate::error::Result;
use crate::language::filter_english;
use crate::price::filter_free;
use crate::validate::{RejectedRow, validate_rows};

/// Number of repeated names kept as examples in the duplicate report.
pub const DUPLICATE_EXAMPLES: usize = 10;

/// Cleaning stages, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CleaningStage {
    Loaded,
    Validated,
    Deduplicated,
    English,
    Free,
}

impl CleaningStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Loaded => "loaded",
            Self::Validated => "validated",
            Self::Deduplicated => "deduplicated",
            Self::English => "english",
            Self::Free => "free",
        }
    }
}

impl fmt::Display for CleaningStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What each stage removed from one export.
#[derive(Debug, Clone, Default)]
pub struct CleaningReport {
    /// Row count after each stage that ran, in order.
    pub stages: Vec<(CleaningStage, usize)>,
    pub rejected: Vec<RejectedRow>,
    /// Present when the export is deduplicated.
    pub duplicates: Option<DuplicateReport>,
}

impl CleaningReport {
    pub fn rows_after(&self, stage: CleaningStage) -> Option<usize> {
        self.stages
            .iter()
            .find(|(ran, _)| *ran == stage)
            .map(|(_, rows)| *rows)
    }

    pub fn final_rows(&self) -> usize {
        self.stages.last().map_or(0, |(_, rows)| *rows)
    }
}

#[derive(Debug, Clone)]
pub struct CleanedTable {
    pub table: AppTable,
    pub report: CleaningReport,
}

pub fn clean(table: &AppTable) -> Result<CleanedTable> {
    clean_through(table, CleaningStage::Free)
}

/// Runs the stages up to and including `last`, for inspecting an
/// intermediate table. `Loaded` returns the input unchanged.
pub fn clean_through(table: &AppTable, last: CleaningStage) -> Result<CleanedTable> {
    let span = info_span!("clean", marketplace = %table.marketplace, through = %last);
    let _guard = span.enter();
    let layout = table.layout();
    let mut report = CleaningReport::default();
    report.stages.push((CleaningStage::Loaded, table.len()));
    let mut current = table.clone();

    if last >= CleaningStage::Validated {
        let validated = validate_rows(&current);
        report.rejected = validated.rejected;
        current = validated.table;
        report.stages.push((CleaningStage::Validated, current.len()));
    }

    if last >= CleaningStage::Deduplicated && layout.deduplicate {
        report.duplicates = Some(duplicate_report(
            &current,
            layout.name,
            DUPLICATE_EXAMPLES,
        ));
        current = resolve_duplicates(&current, layout.name, layout.reviews)?;
        report.stages.push((CleaningStage::Deduplicated, current.len()));
    }

    if last >= CleaningStage::English {
        current = filter_english(&current, layout.name);
        report.stages.push((CleaningStage::English, current.len()));
    }

    if last >= CleaningStage::Free {
        current = filter_free(
            &current,
            layout.price,
            table.marketplace.free_price_sentinel(),
        );
        report.stages.push((CleaningStage::Free, current.len()));
    }

    info!(
        loaded = table.len(),
        rejected = report.rejected.len(),
        duplicates = report.duplicates.as_ref().map_or(0, |d| d.duplicate_count),
        kept = current.len(),
        "cleaning complete"
    );
    Ok(CleanedTable {
        table: current,
        report,
    })
}
