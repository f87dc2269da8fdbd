//! Error types for the editor

use thiserror::Error;

pub type EditorResult<T> = Result<T, EditorError>;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Schema error: {0}")]
    Schema(#[from] quotedeck_schema::SchemaError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
