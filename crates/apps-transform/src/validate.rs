//! Content rules that catch malformed export rows.
//!
//! A row is rejected when its field count differs from the layout, or when
//! its star rating parses to a number outside `0.0..=max`. Ratings that do
//! not parse (e.g. `NaN`) are left alone; the exports use them for apps
//! without ratings.

use std::fmt;

use apps_model::{AppTable, ColumnLayout, cell};

#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    Arity {
        expected: usize,
        found: usize,
    },
    OutOfRange {
        column: &'static str,
        value: String,
        max: f64,
    },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arity { expected, found } => {
                write!(f, "expected {expected} fields, found {found}")
            }
            Self::OutOfRange { column, value, max } => {
                write!(f, "{column} '{value}' is outside 0..={max}")
            }
        }
    }
}

/// A data row removed by validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// Index among the data rows of the input table.
    pub index: usize,
    pub name: String,
    pub reason: RejectReason,
}

#[derive(Debug, Clone)]
pub struct Validated {
    pub table: AppTable,
    pub rejected: Vec<RejectedRow>,
}

/// Splits a table into rows that satisfy the layout and rejected rows.
///
/// Kept rows stay in input order with their fields untouched.
pub fn validate_rows(table: &AppTable) -> Validated {
    let layout = table.layout();
    let mut rows = Vec::with_capacity(table.len());
    let mut rejected = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        match check_row(row, layout) {
            None => rows.push(row.clone()),
            Some(reason) => {
                let name = table.name_of(row).to_string();
                tracing::warn!(
                    marketplace = %table.marketplace,
                    index,
                    name = %name,
                    reason = %reason,
                    "rejected row"
                );
                rejected.push(RejectedRow {
                    index,
                    name,
                    reason,
                });
            }
        }
    }
    Validated {
        table: table.with_rows(rows),
        rejected,
    }
}

fn check_row(row: &[String], layout: &ColumnLayout) -> Option<RejectReason> {
    if row.len() != layout.arity() {
        return Some(RejectReason::Arity {
            expected: layout.arity(),
            found: row.len(),
        });
    }
    let bound = layout.rating;
    let value = cell(row, bound.column)?;
    let rating = value.trim().parse::<f64>().ok()?;
    if rating.is_finite() && !(0.0..=bound.max).contains(&rating) {
        return Some(RejectReason::OutOfRange {
            column: layout.column_name(bound.column).unwrap_or("rating"),
            value: value.to_string(),
            max: bound.max,
        });
    }
    None
}
