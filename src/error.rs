//! Errors surfaced by the picker core.
//!
//! The core never retries or recovers; every variant is handed back to the
//! caller unchanged and the cursor it was working on stays as it was.

use thiserror::Error;

/// Boxed collaborator failure. Keeps the core independent of any transport.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum PickerError {
    /// The directory-listing collaborator rejected a request.
    #[error("failed to list {path}: {source}")]
    Listing {
        path: String,
        #[source]
        source: BoxError,
    },

    /// The session-creation collaborator rejected a request.
    #[error("failed to open a session for {path}: {source}")]
    Commit {
        path: String,
        #[source]
        source: BoxError,
    },

    /// A commit was requested while no file was selected.
    #[error("no file selected")]
    NothingSelected,
}

impl PickerError {
    pub fn listing(path: Option<&str>, source: impl Into<BoxError>) -> Self {
        Self::Listing {
            path: path.unwrap_or("<default root>").to_string(),
            source: source.into(),
        }
    }

    pub fn commit(path: &str, source: impl Into<BoxError>) -> Self {
        Self::Commit {
            path: path.to_string(),
            source: source.into(),
        }
    }
}

pub type PickerResult<T> = Result<T, PickerError>;
