// Error types shared across the catalog, storage and controller layers

use thiserror::Error;

// Message shown to the user whenever a recompute of the filtered view fails
pub const FILTER_FAILURE_MESSAGE: &str = "Failed to filter cars";

// Errors coming out of the key-value storage collaborator
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage blob is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// Failure reported by a filter engine plugged into the controller
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("filter engine failed: {0}")]
    Engine(String),
}

// A text value that does not name any known option (fuel type, sort mode, ...)
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownValue {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownValue {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// Top-level application error
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error("duplicate record id {0} in catalog")]
    DuplicateRecordId(u32),
    #[error("no record with id {0}")]
    UnknownRecord(u32),
}

impl AppError {
    // Converts the error into the text surfaced to the user, logging the details
    pub fn user_message(&self) -> String {
        match self {
            AppError::Filter(e) => {
                tracing::error!("Filter recompute failed: {}", e);
                // Don't expose internal details to the user
                FILTER_FAILURE_MESSAGE.to_string()
            }
            AppError::DuplicateRecordId(_) | AppError::UnknownRecord(_) => self.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
