//! Unified application error type.
//! CLI, config, source and export modules return AppError; the aggregator
//! itself is total and only reports per-record problems through RecordError.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Record source
    // ---------------------------
    #[error("Invalid records snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Records snapshot not found: {0}")]
    SourceMissing(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Unknown time zone: {0}")]
    InvalidTimeZone(String),

    #[error("Invalid marker mode: {0}")]
    InvalidMarkerMode(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// Per-record problem found while bucketing. Never fatal: the record is
/// moved to the rejected list of the build outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record {id}: malformed date {}", describe_raw(.raw))]
    MalformedRecordDate { id: String, raw: Option<String> },
}

fn describe_raw(raw: &Option<String>) -> String {
    match raw {
        Some(r) => format!("'{r}'"),
        None => "(missing)".to_string(),
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("search query is empty")]
    InvalidQuery,
}
