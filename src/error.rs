//! Error types for the test creator.
//!
//! Every failure here is local and recoverable: the GUI renders them into its
//! error banner and the headless mode reports them on stderr.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning an import file into test cases.
///
/// Indices are zero-based internally and rendered one-based, matching the
/// "Test N" labels in the test list.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to parse import file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid file format. Please upload a JSON array.")]
    NotAnArray,

    #[error("Test {} is not a JSON object", .index + 1)]
    NotAnObject { index: usize },

    #[error("Test {} is missing `{field}`", .index + 1)]
    MissingField { index: usize, field: &'static str },

    #[error("Test {}: {message}", .index + 1)]
    InvalidField { index: usize, message: String },

    #[error("Cannot import while tests are running")]
    Busy,
}

/// Errors that keep a single test from producing a passing outcome.
#[derive(Error, Debug)]
pub enum ExecuteError {
    #[error("Missing HTTP method")]
    MissingMethod,

    #[error("Invalid JSON input: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid URL `{url}`: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status} {reason}")]
    Status { status: u16, reason: String },
}

/// Errors raised while rendering and packaging the test archive.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Test {} ({endpoint}) has invalid JSON input: {source}", .index + 1)]
    InvalidJson {
        index: usize,
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// File-system errors at the import/download boundary.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory `{}`: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
