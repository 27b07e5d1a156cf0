//! Error types for the JSON bridge

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonError {
    /// Malformed JSON text, or a tagged document that does not describe a value
    #[error("JSON error: {0}")]
    Syntax(#[from] serde_json::Error),

    /// A double that JSON cannot carry as a number
    #[error("Invalid number for JSON: {0}")]
    InvalidNumber(f64),
}

pub type JsonResult<T> = Result<T, JsonError>;
