//! Literal free-price filtering.
//!
//! Prices are compared as strings against the sentinel the export uses for
//! free apps, so `"0.00"` does not match `"0"`.

use apps_model::{AppTable, cell};

pub fn is_free(row: &[String], column: usize, sentinel: &str) -> bool {
    cell(row, column) == Some(sentinel)
}

pub fn filter_free(table: &AppTable, column: usize, sentinel: &str) -> AppTable {
    let rows = table
        .rows
        .iter()
        .filter(|row| is_free(row, column, sentinel))
        .cloned()
        .collect();
    table.with_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use apps_model::{Marketplace, Row};

    fn row(price: &str) -> Row {
        vec!["App".to_string(), price.to_string()]
    }

    #[test]
    fn sentinel_is_marketplace_specific() {
        let google = Marketplace::GooglePlay.free_price_sentinel();
        let apple = Marketplace::AppStore.free_price_sentinel();

        assert!(is_free(&row("0"), 1, google));
        assert!(!is_free(&row("0.0"), 1, google));
        assert!(is_free(&row("0.0"), 1, apple));
        assert!(!is_free(&row("0"), 1, apple));
    }

    #[test]
    fn other_zero_spellings_are_excluded() {
        for price in ["$0.00", "Free", "0.00", " 0", ""] {
            assert!(!is_free(&row(price), 1, "0"), "{price:?} should not be free");
            assert!(!is_free(&row(price), 1, "0.0"), "{price:?} should not be free");
        }
        assert!(!is_free(&["App".to_string()], 1, "0"));
    }

    #[test]
    fn filter_free_keeps_matching_rows() {
        let table = AppTable::new(
            Marketplace::GooglePlay,
            Vec::new(),
            vec![row("0"), row("$4.99"), row("0")],
        );
        assert_eq!(filter_free(&table, 1, "0").len(), 2);
    }
}
