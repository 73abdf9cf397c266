use thiserror::Error;

use crate::version::console::Console;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("No published version found for {0}")]
    NotFound(Console),
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid history: {0}")]
    Json(#[from] serde_json::Error),
}
