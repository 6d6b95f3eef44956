use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("row {row}: column {column} value '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: usize,
        value: String,
    },
    #[error("row {row} has no field at column {column}")]
    MissingColumn { row: usize, column: usize },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

pub(crate) fn field(row: &[String], index: usize, column: usize) -> Result<&str> {
    apps_model::cell(row, column).ok_or(AnalysisError::MissingColumn { row: index, column })
}
