//! Error types for catalog processing.
//!
//! Only document-level and configuration-level failures abort a run.
//! Per-entry problems (unsupported formats, failed translations) are
//! recorded as [`Issue`](crate::issues::Issue)s and never escalate.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal and per-pair errors raised by the library.
#[derive(Error, Debug)]
pub enum Error {
    /// The catalog document does not match the string catalog schema.
    #[error("Malformed catalog {}: {message}", display_path(.path))]
    MalformedDocument {
        path: Option<PathBuf>,
        message: String,
    },

    /// Required input (target languages, credentials, catalog path) is absent.
    #[error("Missing configuration: {0}")]
    ConfigurationMissing(String),

    /// A single (key, language) translation failed.
    #[error("Translation of \"{key}\" into {language} failed: {reason}")]
    TranslationFailed {
        key: String,
        language: String,
        reason: String,
    },
}

impl Error {
    pub fn malformed(message: impl Into<String>) -> Self {
        Error::MalformedDocument {
            path: None,
            message: message.into(),
        }
    }

    /// Attach the document path to a `MalformedDocument` error.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Error::MalformedDocument { message, .. } => Error::MalformedDocument {
                path: Some(path.into()),
                message,
            },
            other => other,
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "<memory>".to_string(),
    }
}

/// Failure reported by a translation backend.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Transport-level failure, including timeouts.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Service answered but the payload had no usable translation.
    #[error("empty response from translation service")]
    EmptyResponse,

    /// Any other backend-specific failure.
    #[error("{0}")]
    Other(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
