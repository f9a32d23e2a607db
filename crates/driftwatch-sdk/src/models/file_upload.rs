//! Bind requests and their acknowledgments.

use crate::models::job_status::JobStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for the bind endpoints: where the file lives and how to
/// split its rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReference {
    pub file_url: String,
    pub separator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id_column: Option<String>,
}

/// Acknowledgment for a bound reference dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceFileUpload {
    pub uuid: Uuid,
    pub path: String,
    pub date: String,
    pub status: JobStatus,
}

/// Acknowledgment for a bound current dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentFileUpload {
    pub uuid: Uuid,
    pub path: String,
    pub date: String,
    pub status: JobStatus,
    #[serde(default)]
    pub correlation_id_column: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_reference_omits_absent_correlation_column() {
        let reference = FileReference {
            file_url: "s3://bucket/file.csv".into(),
            separator: ",".into(),
            correlation_id_column: None,
        };
        let json = serde_json::to_string(&reference).unwrap();
        assert!(!json.contains("correlationIdColumn"));
    }

    #[test]
    fn test_reference_upload_parses_wire_ack() {
        let ack: ReferenceFileUpload = serde_json::from_str(
            r#"{
                "uuid": "f4a0b3f6-6a1c-4e6e-9a36-27cc0ba0f4b9",
                "path": "s3://bucket/file.csv",
                "date": "2024-01-01T00:00:00Z",
                "status": "IMPORTING"
            }"#,
        )
        .unwrap();
        assert_eq!(ack.status, JobStatus::Importing);
        assert_eq!(ack.path, "s3://bucket/file.csv");
    }
}
