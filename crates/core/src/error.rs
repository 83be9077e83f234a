//! Error types for catalogue fetching and font downloading.

use std::{io, path::PathBuf, result};

use reqwest::StatusCode;

/// Errors that can occur in any stage of a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to create directory {}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to download {url}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("catalogue JSON schema does not match: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("catalogue JSON schema does not match: {0}")]
    SchemaViolation(String),

    #[error("unable to save to file {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid {field} pattern {pattern:?}")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Whether the failure happened talking to a remote host.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Request { .. } | Error::Status { .. })
    }
}

pub type Result<T> = result::Result<T, Error>;
