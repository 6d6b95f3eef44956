//! Bounded row dumps for interactive inspection.

use std::fmt;

use apps_model::{AppTable, Row};

/// A window of rows, optionally with the size of the whole dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ExploreWindow<'a> {
    pub rows: &'a [Row],
    /// `(rows, columns)` of the dataset the window was taken from.
    pub counts: Option<(usize, usize)>,
}

/// Takes rows `start..end`, clamped to the dataset.
///
/// Column count is the length of the first row, as the exports are
/// positional and have no schema object.
pub fn explore(rows: &[Row], start: usize, end: usize, with_counts: bool) -> ExploreWindow<'_> {
    let end = end.min(rows.len());
    let start = start.min(end);
    let counts = with_counts.then(|| (rows.len(), rows.first().map_or(0, Vec::len)));
    ExploreWindow {
        rows: &rows[start..end],
        counts,
    }
}

/// Header followed by the data rows, the shape of the file on disk.
pub fn with_header(table: &AppTable) -> Vec<Row> {
    let mut rows = Vec::with_capacity(table.len() + 1);
    rows.push(table.header.clone());
    rows.extend(table.rows.iter().cloned());
    rows
}

impl fmt::Display for ExploreWindow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows {
            writeln!(f, "{row:?}")?;
            writeln!(f)?;
        }
        if let Some((rows, columns)) = self.counts {
            writeln!(f, "Number of rows: {rows}")?;
            writeln!(f, "Number of columns: {columns}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apps_model::Marketplace;

    fn rows() -> Vec<Row> {
        vec![
            vec!["App".to_string(), "Price".to_string()],
            vec!["Waze".to_string(), "0".to_string()],
            vec!["Minecraft".to_string(), "$6.99".to_string()],
        ]
    }

    #[test]
    fn window_is_clamped() {
        let rows = rows();
        assert_eq!(explore(&rows, 1, 10, false).rows.len(), 2);
        assert!(explore(&rows, 5, 10, false).rows.is_empty());
        assert!(explore(&rows, 2, 1, false).rows.is_empty());
    }

    #[test]
    fn counts_cover_whole_dataset() {
        let rows = rows();
        let window = explore(&rows, 0, 1, true);
        assert_eq!(window.counts, Some((3, 2)));
        assert_eq!(explore(&[], 0, 5, true).counts, Some((0, 0)));
    }

    #[test]
    fn renders_rows_then_counts() {
        let rows = rows();
        let rendered = explore(&rows, 1, 2, true).to_string();
        insta::assert_snapshot!(rendered, @r#"
        ["Waze", "0"]

        Number of rows: 3
        Number of columns: 2
        "#);
    }

    #[test]
    fn with_header_prepends_header_row() {
        let table = AppTable::new(
            Marketplace::GooglePlay,
            vec!["App".to_string()],
            vec![vec!["Waze".to_string()]],
        );
        let all = with_header(&table);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], vec!["App"]);
    }
}
