use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("column {column} is out of range for a table with {arity} columns")]
    ColumnOutOfRange { column: String, arity: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
