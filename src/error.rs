use std::path::PathBuf;

use thiserror::Error;

/// Failures while obtaining a sheet tab as a [`Table`](crate::models::Table).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV from {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("{origin} line {line}: expected {expected} fields, found {found}")]
    TooManyFields {
        origin: String,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{origin} has no header row")]
    NoHeader { origin: String },
}

/// Failures while reshaping a fetched table into output records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("{dataset}: required column `{column}` is missing (found: {found})")]
    MissingColumn {
        dataset: &'static str,
        column: &'static str,
        found: String,
    },

    #[error("{dataset}: headers `{first}` and `{second}` both normalize to `{normalized}`")]
    DuplicateColumn {
        dataset: &'static str,
        first: String,
        second: String,
        normalized: String,
    },

    #[error("{dataset}: `{column}` is empty on sheet line {line}")]
    MissingCell {
        dataset: &'static str,
        column: &'static str,
        line: u64,
    },
}
