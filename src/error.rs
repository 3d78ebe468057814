use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised by the library API.
#[derive(Debug, Error)]
pub enum Error {
    /// A value outside the supported set (int, float, string, list, dict)
    /// reached the serializer boundary.
    #[error("this type can't be converted: {type_name}")]
    UnsupportedType { type_name: &'static str },

    /// Upward filesystem search failed.
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// The host editor refused or failed to run a command.
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// JSON input could not be parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from [`crate::ascend`].
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("cannot list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors from a [`crate::host::Host`] implementation.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("command rejected: {command}: {reason}")]
    Rejected { command: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
