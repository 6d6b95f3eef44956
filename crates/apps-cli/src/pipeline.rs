//! Catalog processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read one catalog export into a positional table
//! 2. **Clean**: Validate, deduplicate, keep English free apps
//! 3. **Analyze**: Frequency tables, average popularity, market profile
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use apps_analysis::{
    GroupProfile, Normalize, display_table, grouped_average, market_profile, sort_descending,
};
use apps_ingest::read_app_table;
use apps_model::{AppTable, Marketplace};
use apps_transform::{CleaningReport, CleaningStage, clean_through};
use tracing::{info, info_span};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

pub fn ingest(marketplace: Marketplace, path: &Path) -> Result<AppTable> {
    let span = info_span!("ingest", marketplace = %marketplace, path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let table = read_app_table(path, marketplace)
        .with_context(|| format!("load {marketplace} export {}", path.display()))?;
    info!(
        rows = table.len(),
        columns = table.header.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(table)
}

// ============================================================================
// Stage 2: Clean
// ============================================================================

/// A cleaned catalog together with what cleaning removed.
#[derive(Debug, Clone)]
pub struct CleanedCatalog {
    pub marketplace: Marketplace,
    pub table: AppTable,
    pub report: CleaningReport,
}

pub fn ingest_and_clean(marketplace: Marketplace, path: &Path) -> Result<CleanedCatalog> {
    ingest_and_clean_through(marketplace, path, CleaningStage::Free)
}

/// Ingest and run cleaning up to and including `last`.
pub fn ingest_and_clean_through(
    marketplace: Marketplace,
    path: &Path,
    last: CleaningStage,
) -> Result<CleanedCatalog> {
    let raw = ingest(marketplace, path)?;
    let cleaned = clean_through(&raw, last)
        .with_context(|| format!("clean {marketplace} export through {last}"))?;
    Ok(CleanedCatalog {
        marketplace,
        table: cleaned.table,
        report: cleaned.report,
    })
}

// ============================================================================
// Stage 3: Analyze
// ============================================================================

/// Popularity metrics differ per export: Google Play has install brackets,
/// the App Store only rating counts.
pub fn popularity_normalize(marketplace: Marketplace) -> Normalize {
    match marketplace {
        Marketplace::GooglePlay => Normalize::Installs,
        Marketplace::AppStore => Normalize::Raw,
    }
}

pub fn popularity_label(marketplace: Marketplace) -> &'static str {
    match marketplace {
        Marketplace::GooglePlay => "installs",
        Marketplace::AppStore => "user ratings",
    }
}

/// A frequency table over one column, ordered for display.
#[derive(Debug, Clone)]
pub struct FrequencySection {
    pub column: String,
    pub entries: Vec<(String, f64)>,
}

#[derive(Debug, Clone)]
pub struct MarketAnalysis {
    pub marketplace: Marketplace,
    pub apps: usize,
    pub frequencies: Vec<FrequencySection>,
    /// Average popularity per category, highest first.
    pub averages: Vec<(String, f64)>,
    pub profiles: Vec<GroupProfile>,
}

pub fn analyze(table: &AppTable) -> Result<MarketAnalysis> {
    let marketplace = table.marketplace;
    let span = info_span!("analyze", marketplace = %marketplace);
    let _guard = span.enter();
    let layout = table.layout();
    let category = layout.resolve(layout.category)?;
    let normalize = popularity_normalize(marketplace);

    let mut columns = vec![category];
    if let Some(genre) = layout.genre {
        columns.push(layout.resolve(genre)?);
    }
    let mut frequencies = Vec::with_capacity(columns.len());
    for column in columns {
        frequencies.push(FrequencySection {
            column: layout.column_name(column).unwrap_or("?").to_string(),
            entries: display_table(table, column)
                .with_context(|| format!("frequency table for {marketplace}"))?,
        });
    }

    let averages = sort_descending(
        grouped_average(table, category, layout.popularity, normalize)
            .with_context(|| format!("average {} for {marketplace}", popularity_label(marketplace)))?,
    );
    let profiles = market_profile(table, category, layout.popularity, normalize)
        .with_context(|| format!("market profile for {marketplace}"))?;
    info!(
        apps = table.len(),
        categories = averages.len(),
        "analysis complete"
    );

    Ok(MarketAnalysis {
        marketplace,
        apps: table.len(),
        frequencies,
        averages,
        profiles,
    })
}
