//! Errors that stop a run before (or instead of) scoring.
//!
//! Per-record problems never show up here: they are `RecordError`s carried
//! inside the batch output. Everything in this enum is either a bad
//! configuration (unknown category, malformed profile tables) or an input
//! that could not be read at all.

use std::path::PathBuf;

use crate::score::TableInvariantViolation;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid category '{0}' (expected general, fat or beverage)")]
    InvalidCategory(String),

    #[error("malformed scoring table: {0}")]
    Table(#[from] TableInvariantViolation),

    #[error("invalid profile file: {0}")]
    ProfileParse(#[from] toml::de::Error),

    #[error("cannot render profiles as TOML: {0}")]
    ProfileRender(#[from] toml::ser::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("{0}: workbook has no worksheet")]
    NoWorksheet(String),

    #[error("unsupported input format '{0}' (expected .csv, .xlsx, .xls or .json)")]
    UnsupportedFormat(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
