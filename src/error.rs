use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("No ingredient database configured. Pass `--db <PATH|URL>`, set COMEDO_CHECK_DB, or run `comedo-check config --set-db <PATH|URL>`")]
    MissingDatabase,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to load ingredient database: {0}")]
    Load(String),

    #[error("Loading the ingredient database timed out after {0:?}")]
    LoadTimeout(Duration),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel generation failed: {0}")]
    ExcelGeneration(String),

    #[error(transparent)]
    Common(#[from] comedo_check_common::Error),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
