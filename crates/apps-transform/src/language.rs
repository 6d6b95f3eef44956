//! Heuristic detection of non-English app names.

use apps_model::{AppTable, cell};

/// Names with more non-ASCII characters than this are not English.
///
/// Up to three are tolerated so that names with an emoji, `™` or a dash
/// still count as English.
pub const NON_ASCII_THRESHOLD: usize = 3;

pub fn non_ascii_count(text: &str) -> usize {
    text.chars().filter(|ch| u32::from(*ch) > 127).count()
}

pub fn is_english(text: &str) -> bool {
    non_ascii_count(text) <= NON_ASCII_THRESHOLD
}

/// Keeps rows whose `column` reads as English. Truncated rows are dropped.
pub fn filter_english(table: &AppTable, column: usize) -> AppTable {
    let rows = table
        .rows
        .iter()
        .filter(|row| cell(row, column).is_some_and(is_english))
        .cloned()
        .collect();
    table.with_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use apps_model::Marketplace;

    #[test]
    fn tolerates_a_few_symbols() {
        assert!(is_english("Instagram"));
        assert!(is_english("Instachat 😜"));
        assert!(is_english("Docs To Go™ Free Office Suite"));
        assert!(is_english("Sudoku ★ ★ ★"));
    }

    #[test]
    fn rejects_mostly_foreign_names() {
        assert!(!is_english("爱奇艺PPS -《欢乐颂2》电视剧热播"));
        assert!(!is_english("中国語 AQリスニング"));
        assert!(!is_english("★ ★ ★ ★"));
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(non_ascii_count("é"), 1);
        assert_eq!(non_ascii_count("😜"), 1);
        assert_eq!(non_ascii_count("\u{7f}"), 0);
        assert_eq!(non_ascii_count("\u{80}"), 1);
    }

    #[test]
    fn filter_keeps_order() {
        let table = AppTable::new(
            Marketplace::AppStore,
            Vec::new(),
            vec![
                vec!["1".into(), "Waze".into()],
                vec!["2".into(), "爱奇艺PPS -《欢乐颂2》电视剧热播".into()],
                vec!["3".into(), "Instachat 😜".into()],
            ],
        );
        let english = filter_english(&table, 1);

        assert_eq!(english.len(), 2);
        assert_eq!(english.rows[0][1], "Waze");
        assert_eq!(english.rows[1][1], "Instachat 😜");
    }
}
