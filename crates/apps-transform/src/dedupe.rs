use std::collections::{HashMap, HashSet};

use apps_model::{AppTable, Row, cell};

use crate::error::{Result, TransformError};

/// Highest review count observed per app name.
pub type ReviewsIndex = HashMap<String, f64>;

/// Names that occur more than once, counted before resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateReport {
    /// Occurrences of a name after its first one.
    pub duplicate_count: usize,
    /// First repeated names in encounter order; a name may appear twice.
    pub examples: Vec<String>,
}

pub fn duplicate_report(table: &AppTable, key: usize, examples: usize) -> DuplicateReport {
    let mut seen = HashSet::new();
    let mut report = DuplicateReport::default();
    for row in &table.rows {
        let name = cell(row, key).unwrap_or("");
        if !seen.insert(name) {
            report.duplicate_count += 1;
            if report.examples.len() < examples {
                report.examples.push(name.to_string());
            }
        }
    }
    report
}

/// Every row whose `key` equals `name`, with its data-row index.
pub fn rows_named<'a>(table: &'a AppTable, key: usize, name: &str) -> Vec<(usize, &'a Row)> {
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| cell(row, key) == Some(name))
        .collect()
}

/// Parses a review count. `NaN` and infinities are rejected: they never
/// compare equal to a maximum, which would drop every row of their key.
pub(crate) fn parse_number(row: &[String], index: usize, column: usize) -> Result<f64> {
    let value = cell(row, column).ok_or(TransformError::MissingColumn { row: index, column })?;
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| TransformError::InvalidNumber {
            row: index,
            column: column.to_string(),
            value: value.to_string(),
        })
}

fn key_of(row: &[String], index: usize, key: usize) -> Result<&str> {
    cell(row, key).ok_or(TransformError::MissingColumn {
        row: index,
        column: key,
    })
}

pub fn reviews_index(table: &AppTable, key: usize, metric: usize) -> Result<ReviewsIndex> {
    let mut index = ReviewsIndex::new();
    for (row_index, row) in table.rows.iter().enumerate() {
        let name = key_of(row, row_index, key)?;
        let reviews = parse_number(row, row_index, metric)?;
        index
            .entry(name.to_string())
            .and_modify(|max| {
                if *max < reviews {
                    *max = reviews;
                }
            })
            .or_insert(reviews);
    }
    Ok(index)
}

/// Keeps one row per `key`: the first row whose `metric` equals the
/// highest `metric` seen for that key. Kept rows stay in input order.
pub fn resolve_duplicates(table: &AppTable, key: usize, metric: usize) -> Result<AppTable> {
    let max_reviews = reviews_index(table, key, metric)?;
    let mut added: HashSet<&str> = HashSet::with_capacity(max_reviews.len());
    let mut rows = Vec::with_capacity(max_reviews.len());
    for (row_index, row) in table.rows.iter().enumerate() {
        let name = key_of(row, row_index, key)?;
        let reviews = parse_number(row, row_index, metric)?;
        let is_max = max_reviews.get(name).is_some_and(|max| *max == reviews);
        if is_max && added.insert(name) {
            rows.push(row.clone());
        }
    }
    tracing::debug!(
        marketplace = %table.marketplace,
        before = table.len(),
        after = rows.len(),
        "resolved duplicate apps"
    );
    Ok(table.with_rows(rows))
}
