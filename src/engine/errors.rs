use thiserror::Error;

use crate::shared::datetime::DateRangeError;

/// Errors that can occur while loading the order export into memory.
#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Row {row}: invalid payment value {value:?}")]
    InvalidAmount { row: usize, value: String },

    #[error("Row {row}: negative payment value {value}")]
    NegativeAmount { row: usize, value: String },
}

/// Errors surfaced by the report recompute entry point.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    InvalidRange(#[from] DateRangeError),
}
