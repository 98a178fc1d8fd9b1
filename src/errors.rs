use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for domain, storage, and export layers.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Export failed: {0}")]
    Render(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::Storage(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        BudgetError::Render(err.to_string())
    }
}
