use crate::market::{ColumnLayout, Marketplace};

/// One record of a catalog export; position determines meaning.
pub type Row = Vec<String>;

/// A loaded catalog: header row plus data rows, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct AppTable {
    pub marketplace: Marketplace,
    pub header: Row,
    pub rows: Vec<Row>,
}

impl AppTable {
    pub fn new(marketplace: Marketplace, header: Row, rows: Vec<Row>) -> Self {
        Self {
            marketplace,
            header,
            rows,
        }
    }

    pub fn layout(&self) -> &'static ColumnLayout {
        self.marketplace.layout()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Builds a table sharing this one's marketplace and header.
    #[must_use]
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            marketplace: self.marketplace,
            header: self.header.clone(),
            rows,
        }
    }

    /// App name of a row, or an empty string for a truncated row.
    pub fn name_of<'a>(&self, row: &'a [String]) -> &'a str {
        cell(row, self.layout().name).unwrap_or("")
    }
}

/// Field of a row at `column`, if the row is long enough.
pub fn cell(row: &[String], column: usize) -> Option<&str> {
    row.get(column).map(String::as_str)
}
