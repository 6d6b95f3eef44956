//! Property tests for frequency tables.

use apps_analysis::{display_table, freq_table};
use apps_model::{AppTable, Marketplace};
use proptest::prelude::*;

fn table(values: Vec<String>) -> AppTable {
    AppTable::new(
        Marketplace::AppStore,
        vec!["prime_genre".to_string()],
        values.into_iter().map(|value| vec![value]).collect(),
    )
}

proptest! {
    #[test]
    fn percentages_sum_to_one_hundred(
        values in prop::collection::vec("[A-E]", 1..200),
    ) {
        let frequencies = freq_table(&table(values), 0).unwrap();
        let total: f64 = frequencies.values().sum();
        prop_assert!((total - 100.0).abs() < 1e-9 * frequencies.len().max(1) as f64 + 1e-9);
    }

    #[test]
    fn display_is_sorted_descending(
        values in prop::collection::vec("[A-E]", 0..200),
    ) {
        let shown = display_table(&table(values), 0).unwrap();
        for pair in shown.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }
}
