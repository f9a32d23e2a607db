//! Required-column computation and header validation for candidate files.
//!
//! The validator is pure: header extraction (local first line or streamed
//! remote read) is owned by the callers, and only the set comparison and
//! failure shaping happen here. Comparison is exact-string and the
//! candidate's headers are used as split, duplicates included.

use crate::error::{DriftwatchError, Result};
use crate::models::ModelDefinition;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Compute the header set a reference dataset must carry: every feature,
/// every declared output column, and the target.
pub fn required_columns(definition: &ModelDefinition) -> Vec<String> {
    let mut required: Vec<String> = definition
        .features
        .iter()
        .chain(definition.outputs.output.iter())
        .map(|column| column.name.clone())
        .collect();
    required.push(definition.target.name.clone());
    required
}

/// Compute the header set a current dataset must carry: the reference set
/// plus the correlation-id column (when one is declared) and the timestamp
/// column.
pub fn required_columns_for_current(
    definition: &ModelDefinition,
    correlation_id_column: Option<&str>,
) -> Vec<String> {
    let mut required = required_columns(definition);
    if let Some(column) = correlation_id_column {
        required.push(column.to_string());
    }
    required.push(definition.timestamp.name.clone());
    required
}

/// Check that `required` is a subset of `file_headers`.
///
/// On failure the error names the file, the missing columns, and the full
/// required set.
pub fn validate_columns(file: &str, file_headers: &[String], required: &[String]) -> Result<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|column| !file_headers.iter().any(|header| header == *column))
        .cloned()
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DriftwatchError::Validation {
            file: file.to_string(),
            missing,
            required: required.to_vec(),
        })
    }
}

/// Read the header row of a local file: its first line, split verbatim on
/// `separator`.
pub fn read_header_row(path: &Path, separator: &str) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| DriftwatchError::io_with_path(e, path))?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|e| DriftwatchError::io_with_path(e, path))?;
    Ok(split_header_line(&line, separator))
}

/// Split one header line on `separator`, trimming only the line terminator.
pub fn split_header_line(line: &str, separator: &str) -> Vec<String> {
    line.trim_end_matches(['\r', '\n'])
        .split(separator)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ColumnDefinition, DataType, FieldType, Granularity, ModelType, OutputType, SupportedType,
    };
    use std::io::Write;
    use uuid::Uuid;

    fn definition() -> ModelDefinition {
        let prediction =
            ColumnDefinition::new("prediction", SupportedType::Float, FieldType::Numerical);
        ModelDefinition {
            uuid: Uuid::new_v4(),
            name: "people".into(),
            description: None,
            model_type: ModelType::Binary,
            data_type: DataType::Tabular,
            granularity: Granularity::Hour,
            features: vec![ColumnDefinition::new(
                "age",
                SupportedType::Int,
                FieldType::Numerical,
            )],
            outputs: OutputType {
                prediction: prediction.clone(),
                prediction_proba: None,
                output: vec![prediction],
            },
            target: ColumnDefinition::new("adult", SupportedType::Bool, FieldType::Categorical),
            timestamp: ColumnDefinition::new(
                "created_at",
                SupportedType::Datetime,
                FieldType::Datetime,
            ),
            frameworks: None,
            algorithm: None,
            created_at: "2024-01-01T00:00:00Z".into(),
            updated_at: "2024-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn test_required_columns_composition() {
        assert_eq!(
            required_columns(&definition()),
            vec!["age", "prediction", "adult"]
        );
    }

    #[test]
    fn test_required_columns_for_current_appends_correlation_and_timestamp() {
        assert_eq!(
            required_columns_for_current(&definition(), Some("request_id")),
            vec!["age", "prediction", "adult", "request_id", "created_at"]
        );
        assert_eq!(
            required_columns_for_current(&definition(), None),
            vec!["age", "prediction", "adult", "created_at"]
        );
    }

    #[test]
    fn test_validate_accepts_superset_headers() {
        let headers: Vec<String> = ["age", "adult", "prediction", "created_at", "extra"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let required = required_columns(&definition());
        assert!(validate_columns("people.csv", &headers, &required).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_prediction() {
        let headers: Vec<String> = ["age", "adult"].iter().map(|s| s.to_string()).collect();
        let required = required_columns(&definition());
        let err = validate_columns("people.csv", &headers, &required).unwrap_err();
        match err {
            DriftwatchError::Validation { file, missing, .. } => {
                assert_eq!(file, "people.csv");
                assert_eq!(missing, vec!["prediction"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_is_case_sensitive() {
        let headers: Vec<String> = ["Age", "adult", "prediction"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let required = required_columns(&definition());
        assert!(validate_columns("people.csv", &headers, &required).is_err());
    }

    #[test]
    fn test_read_header_row_takes_first_line_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "age,adult,prediction,created_at").unwrap();
        writeln!(file, "30,true,0.9,2024-01-01T00:00:00Z").unwrap();

        let headers = read_header_row(file.path(), ",").unwrap();
        assert_eq!(headers, vec!["age", "adult", "prediction", "created_at"]);
    }

    #[test]
    fn test_read_header_row_custom_separator() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "age|adult|prediction").unwrap();

        let headers = read_header_row(file.path(), "|").unwrap();
        assert_eq!(headers, vec!["age", "adult", "prediction"]);
    }

    #[test]
    fn test_split_keeps_duplicate_headers() {
        assert_eq!(
            split_header_line("age,age,adult\r\n", ","),
            vec!["age", "age", "adult"]
        );
    }
}
