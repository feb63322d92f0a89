use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid value at row {row}: {value:?}")]
    InvalidValue { row: usize, value: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
