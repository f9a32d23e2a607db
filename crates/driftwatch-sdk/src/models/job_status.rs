//! Server-side job status for a bound dataset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of the asynchronous metrics job attached to a dataset.
///
/// `Importing` is the only non-terminal state; a job ends in either
/// `Succeeded` (metrics available) or `Error` (no metrics, ever).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Importing,
    Succeeded,
    Error,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JobStatus::Importing => "IMPORTING",
            JobStatus::Succeeded => "SUCCEEDED",
            JobStatus::Error => "ERROR",
        };
        f.write_str(label)
    }
}
