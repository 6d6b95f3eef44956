use std::collections::BTreeMap;

use apps_model::AppTable;

use crate::error::{Result, field};

/// Share of rows, in percent, per distinct column value.
pub type FrequencyTable = BTreeMap<String, f64>;

pub fn value_counts(table: &AppTable, column: usize) -> Result<BTreeMap<String, usize>> {
    let mut counts = BTreeMap::new();
    for (index, row) in table.rows.iter().enumerate() {
        let value = field(row, index, column)?;
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    Ok(counts)
}

/// Percentage of rows holding each value of `column`. Empty for an empty table.
pub fn freq_table(table: &AppTable, column: usize) -> Result<FrequencyTable> {
    let total = table.len() as f64;
    Ok(value_counts(table, column)?
        .into_iter()
        .map(|(value, count)| (value, count as f64 / total * 100.0))
        .collect())
}

/// Frequency table ordered for display, highest share first.
pub fn display_table(table: &AppTable, column: usize) -> Result<Vec<(String, f64)>> {
    Ok(sort_descending(freq_table(table, column)?.into_iter().collect()))
}

/// Orders `(key, number)` pairs by number, then key, both descending.
pub fn sort_descending(mut pairs: Vec<(String, f64)>) -> Vec<(String, f64)> {
    pairs.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use apps_model::Marketplace;

    fn genres(values: &[&str]) -> AppTable {
        AppTable::new(
            Marketplace::AppStore,
            vec!["prime_genre".to_string()],
            values.iter().map(|value| vec![(*value).to_string()]).collect(),
        )
    }

    #[test]
    fn percentages_of_total_rows() {
        let table = genres(&["Games", "Games", "Games", "Navigation"]);
        let frequencies = freq_table(&table, 0).unwrap();

        assert_eq!(frequencies.len(), 2);
        assert_eq!(frequencies["Games"], 75.0);
        assert_eq!(frequencies["Navigation"], 25.0);
    }

    #[test]
    fn empty_table_has_no_entries() {
        assert!(freq_table(&genres(&[]), 0).unwrap().is_empty());
    }

    #[test]
    fn display_orders_ties_by_key_descending() {
        let table = genres(&["Book", "Games", "Games", "Weather", "Finance"]);
        let ordered = display_table(&table, 0).unwrap();
        let keys: Vec<&str> = ordered.iter().map(|(key, _)| key.as_str()).collect();

        assert_eq!(keys, vec!["Games", "Weather", "Finance", "Book"]);
        assert_eq!(ordered[0].1, 40.0);
    }

    #[test]
    fn missing_column_is_an_error() {
        let table = genres(&["Games"]);
        assert!(freq_table(&table, 3).is_err());
    }
}
