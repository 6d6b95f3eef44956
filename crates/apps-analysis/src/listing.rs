use apps_model::AppTable;

use crate::error::{Result, field};

/// `(label, metric)` of every row in `group`, in input order.
///
/// When `only` is non-empty, rows whose metric is not one of those exact
/// strings are skipped; this selects install brackets such as
/// `1,000,000,000+` without parsing them.
pub fn apps_in_group(
    table: &AppTable,
    group_column: usize,
    group: &str,
    label_column: usize,
    metric_column: usize,
    only: &[String],
) -> Result<Vec<(String, String)>> {
    let mut listed = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        if field(row, index, group_column)? != group {
            continue;
        }
        let metric = field(row, index, metric_column)?;
        if !only.is_empty() && !only.iter().any(|value| value == metric) {
            continue;
        }
        listed.push((field(row, index, label_column)?.to_string(), metric.to_string()));
    }
    Ok(listed)
}
