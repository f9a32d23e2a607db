//! Error types for the Driftwatch SDK.
//!
//! Every failure surfaced by the SDK maps to one of a small set of
//! categories: column validation, object storage, platform protocol,
//! transport, or local file access. Nothing is retried internally;
//! callers own any retry policy.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Driftwatch SDK operations.
#[derive(Debug, Error)]
pub enum DriftwatchError {
    /// A candidate dataset does not carry every column the model declares.
    ///
    /// Raised before any upload or bind call is attempted.
    #[error("file {file} is missing required columns {missing:?} (required: {required:?})")]
    Validation {
        /// The local path or storage URL of the offending file.
        file: String,
        /// Required columns absent from the file's header row.
        missing: Vec<String>,
        /// The full required header set.
        required: Vec<String>,
    },

    /// An object storage upload or read failed. Nothing was bound.
    #[error("storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: Option<object_store::Error>,
    },

    /// The platform answered with a payload the SDK cannot interpret.
    ///
    /// Cached dataset state is never mutated when this is raised.
    #[error("protocol error: {message}")]
    Protocol { message: String },

    /// The underlying HTTP request failed before a response was read.
    #[error("transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The platform answered with a status code other than the expected one.
    ///
    /// Surfaced before any body parsing is attempted.
    #[error("unexpected status {actual} from {url} (expected {expected})")]
    UnexpectedStatus {
        url: String,
        expected: u16,
        actual: u16,
    },

    /// A local file could not be read.
    #[error("io error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

/// Result type alias for Driftwatch SDK operations.
pub type Result<T> = std::result::Result<T, DriftwatchError>;

impl From<reqwest::Error> for DriftwatchError {
    fn from(err: reqwest::Error) -> Self {
        DriftwatchError::Transport {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<object_store::Error> for DriftwatchError {
    fn from(err: object_store::Error) -> Self {
        DriftwatchError::Storage {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<std::io::Error> for DriftwatchError {
    fn from(err: std::io::Error) -> Self {
        DriftwatchError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl DriftwatchError {
    /// Create a protocol error quoting the raw payload that failed to parse.
    pub fn unparsable(body: &str) -> Self {
        DriftwatchError::Protocol {
            message: format!("unable to parse response: {body}"),
        }
    }

    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        DriftwatchError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Create a storage error without an underlying cause.
    pub fn storage(message: impl Into<String>) -> Self {
        DriftwatchError::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Whether this error originated in the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DriftwatchError::Transport { .. } | DriftwatchError::UnexpectedStatus { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_names_missing_columns() {
        let err = DriftwatchError::Validation {
            file: "people.csv".into(),
            missing: vec!["prediction".into()],
            required: vec!["age".into(), "prediction".into()],
        };
        let message = err.to_string();
        assert!(message.contains("people.csv"));
        assert!(message.contains("prediction"));
    }

    #[test]
    fn test_unexpected_status_display() {
        let err = DriftwatchError::UnexpectedStatus {
            url: "http://api:9000/api/models".into(),
            expected: 200,
            actual: 500,
        };
        assert_eq!(
            err.to_string(),
            "unexpected status 500 from http://api:9000/api/models (expected 200)"
        );
    }

    #[test]
    fn test_unparsable_quotes_body() {
        let err = DriftwatchError::unparsable("{\"wrong\": \"json\"}");
        assert!(err.to_string().contains("{\"wrong\": \"json\"}"));
    }

    #[test]
    fn test_transport_classification() {
        assert!(DriftwatchError::UnexpectedStatus {
            url: "http://api:9000".into(),
            expected: 200,
            actual: 404,
        }
        .is_transport());
        assert!(!DriftwatchError::unparsable("{}").is_transport());
    }
}
