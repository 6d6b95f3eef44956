//! CSV file reading into positional string rows.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use apps_model::{AppTable, Marketplace, Row};
use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Reads a catalog export. The first record is the header, every later
/// record a data row.
///
/// Records are read flexibly: a row with the wrong number of fields is kept
/// as-is so that validation can report it instead of aborting the load.
pub fn read_app_table(path: &Path, marketplace: Marketplace) -> Result<AppTable> {
    let file = File::open(path).map_err(|e| IngestError::open(path.to_path_buf(), e))?;
    let table = read_records(file, path, marketplace)?;
    tracing::debug!(
        path = %path.display(),
        marketplace = %marketplace,
        rows = table.len(),
        columns = table.header.len(),
        "loaded catalog"
    );
    Ok(table)
}

/// Reads a catalog export from any reader.
pub fn read_app_table_from_reader<R: Read>(reader: R, marketplace: Marketplace) -> Result<AppTable> {
    read_records(reader, Path::new("<reader>"), marketplace)
}

fn read_records<R: Read>(reader: R, path: &Path, marketplace: Marketplace) -> Result<AppTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => normalize_header(to_row(record.map_err(|e| parse_error(path, &e))?)),
        None => {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|e| parse_error(path, &e))?;
        rows.push(to_row(record));
    }

    let expected = marketplace.layout().arity();
    if header.len() != expected {
        tracing::warn!(
            path = %path.display(),
            expected,
            found = header.len(),
            "header arity differs from the {marketplace} layout"
        );
    }

    Ok(AppTable::new(marketplace, header, rows))
}

fn to_row(record: csv::StringRecord) -> Row {
    record.iter().map(str::to_string).collect()
}

fn normalize_header(mut header: Row) -> Row {
    if let Some(first) = header.first_mut()
        && let Some(stripped) = first.strip_prefix('\u{feff}')
    {
        *first = stripped.to_string();
    }
    header
}

fn parse_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: PathBuf::from(path),
        message: error.to_string(),
    }
}
