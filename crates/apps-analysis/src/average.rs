use std::borrow::Cow;
use std::collections::HashMap;

use apps_model::AppTable;

use crate::error::{AnalysisError, Result, field};

/// Preparation applied to a metric field before it is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Normalize {
    /// Parse the field as-is.
    #[default]
    Raw,
    /// Strip `+` and `,` from open-ended install brackets such as `1,000,000+`.
    Installs,
}

impl Normalize {
    pub fn apply(self, value: &str) -> Cow<'_, str> {
        match self {
            Self::Raw => Cow::Borrowed(value),
            Self::Installs => Cow::Owned(value.replace(['+', ','], "")),
        }
    }

    /// Finite value of the field, if it parses.
    pub fn parse(self, value: &str) -> Option<f64> {
        self.apply(value)
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
    }
}

pub(crate) fn metric_value(
    row: &[String],
    index: usize,
    column: usize,
    normalize: Normalize,
) -> Result<f64> {
    let value = field(row, index, column)?;
    normalize
        .parse(value)
        .ok_or_else(|| AnalysisError::InvalidNumber {
            row: index,
            column,
            value: value.to_string(),
        })
}

/// Mean of `metric` per distinct value of `group`, in first-seen group order.
pub fn grouped_average(
    table: &AppTable,
    group: usize,
    metric: usize,
    normalize: Normalize,
) -> Result<Vec<(String, f64)>> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(String, f64, usize)> = Vec::new();
    for (index, row) in table.rows.iter().enumerate() {
        let key = field(row, index, group)?;
        let value = metric_value(row, index, metric, normalize)?;
        let position = *positions.entry(key).or_insert_with(|| {
            totals.push((key.to_string(), 0.0, 0));
            totals.len() - 1
        });
        let entry = &mut totals[position];
        entry.1 += value;
        entry.2 += 1;
    }
    Ok(totals
        .into_iter()
        .map(|(key, sum, count)| (key, sum / count as f64))
        .collect())
}

/// Mean of the values in one group that fall strictly below `threshold`.
///
/// Returns `None` when no row of the group qualifies.
pub fn average_below(
    table: &AppTable,
    group_column: usize,
    group: &str,
    metric: usize,
    normalize: Normalize,
    threshold: f64,
) -> Result<Option<f64>> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for (index, row) in table.rows.iter().enumerate() {
        if field(row, index, group_column)? != group {
            continue;
        }
        let value = metric_value(row, index, metric, normalize)?;
        if value < threshold {
            sum += value;
            count += 1;
        }
    }
    Ok((count > 0).then(|| sum / count as f64))
}
