//! Model declarations exchanged with the platform.

use crate::models::column::ColumnDefinition;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of model under observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModelType {
    Binary,
    Multiclass,
    Regression,
}

/// Kind of data the model consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    Tabular,
    Text,
    Image,
}

/// Window used by the platform to aggregate metrics over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Granularity {
    Hour,
    Day,
    Week,
    Month,
}

/// Declared output surface of a model: the prediction column, an optional
/// probability column, and the full list of output columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputType {
    pub prediction: ColumnDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_proba: Option<ColumnDefinition>,
    pub output: Vec<ColumnDefinition>,
}

/// Request body for registering a new model with the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModel {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub model_type: ModelType,
    pub data_type: DataType,
    pub granularity: Granularity,
    pub features: Vec<ColumnDefinition>,
    pub outputs: OutputType,
    pub target: ColumnDefinition,
    pub timestamp: ColumnDefinition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frameworks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
}

/// A registered model as acknowledged by the platform.
///
/// Identical to [`CreateModel`] plus the server-issued identity and
/// bookkeeping timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDefinition {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub model_type: ModelType,
    pub data_type: DataType,
    pub granularity: Granularity,
    pub features: Vec<ColumnDefinition>,
    pub outputs: OutputType,
    pub target: ColumnDefinition,
    pub timestamp: ColumnDefinition,
    #[serde(default)]
    pub frameworks: Option<String>,
    #[serde(default)]
    pub algorithm: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl ModelDefinition {
    /// Features classified as numerical.
    pub fn numerical_features(&self) -> Vec<&ColumnDefinition> {
        self.features.iter().filter(|f| f.is_numerical()).collect()
    }

    /// Features classified as categorical.
    pub fn categorical_features(&self) -> Vec<&ColumnDefinition> {
        self.features.iter().filter(|f| f.is_categorical()).collect()
    }

    /// Features classified as datetime.
    pub fn datetime_features(&self) -> Vec<&ColumnDefinition> {
        self.features.iter().filter(|f| f.is_datetime()).collect()
    }

    /// Features declared with an integer value kind.
    pub fn int_features(&self) -> Vec<&ColumnDefinition> {
        self.features.iter().filter(|f| f.is_int()).collect()
    }

    /// Features declared with a float value kind.
    pub fn float_features(&self) -> Vec<&ColumnDefinition> {
        self.features.iter().filter(|f| f.is_float()).collect()
    }
}

/// Request body for the update-features operation: the full replacement
/// feature list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelFeatures {
    pub features: Vec<ColumnDefinition>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::column::{FieldType, SupportedType};

    fn definition() -> ModelDefinition {
        let prediction =
            ColumnDefinition::new("prediction", SupportedType::Float, FieldType::Numerical);
        ModelDefinition {
            uuid: Uuid::new_v4(),
            name: "churn".into(),
            description: None,
            model_type: ModelType::Binary,
            data_type: DataType::Tabular,
            granularity: Granularity::Day,
            features: vec![
                ColumnDefinition::new("age", SupportedType::Int, FieldType::Numerical),
                ColumnDefinition::new("plan", SupportedType::String, FieldType::Categorical),
                ColumnDefinition::new(
                    "signup_date",
                    SupportedType::Datetime,
                    FieldType::Datetime,
                ),
            ],
            outputs: OutputType {
                prediction: prediction.clone(),
                prediction_proba: None,
                output: vec![prediction],
            },
            target: ColumnDefinition::new("churned", SupportedType::Bool, FieldType::Categorical),
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
    fn test_feature_classification_queries() {
        let definition = definition();
        assert_eq!(definition.numerical_features().len(), 1);
        assert_eq!(definition.categorical_features().len(), 1);
        assert_eq!(definition.datetime_features().len(), 1);
        assert_eq!(definition.int_features().len(), 1);
        assert!(definition.float_features().is_empty());
    }

    #[test]
    fn test_definition_round_trips_camel_case() {
        let definition = definition();
        let json = serde_json::to_value(&definition).unwrap();
        assert_eq!(json["modelType"], "BINARY");
        assert_eq!(json["granularity"], "DAY");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00Z");
        let parsed: ModelDefinition = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, definition);
    }
}
