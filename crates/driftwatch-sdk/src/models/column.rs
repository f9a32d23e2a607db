//! Column definitions shared by model declarations and dataset validation.

use serde::{Deserialize, Serialize};

/// Declared value kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedType {
    Int,
    Float,
    String,
    Bool,
    Datetime,
}

/// Derived classification of a column, used for grouping queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Numerical,
    Categorical,
    Datetime,
}

/// A single declared column: name, value kind, and field classification.
///
/// Names are unique within a model declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: SupportedType,
    pub field_type: FieldType,
}

impl ColumnDefinition {
    pub fn new(
        name: impl Into<String>,
        column_type: SupportedType,
        field_type: FieldType,
    ) -> Self {
        Self {
            name: name.into(),
            column_type,
            field_type,
        }
    }

    pub fn is_numerical(&self) -> bool {
        self.field_type == FieldType::Numerical
    }

    pub fn is_categorical(&self) -> bool {
        self.field_type == FieldType::Categorical
    }

    pub fn is_datetime(&self) -> bool {
        self.field_type == FieldType::Datetime
    }

    pub fn is_int(&self) -> bool {
        self.column_type == SupportedType::Int
    }

    pub fn is_float(&self) -> bool {
        self.column_type == SupportedType::Float
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_wire_format() {
        let column = ColumnDefinition::new("age", SupportedType::Int, FieldType::Numerical);
        let json = serde_json::to_value(&column).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "age", "type": "int", "fieldType": "numerical"})
        );
    }

    #[test]
    fn test_field_classification() {
        let column =
            ColumnDefinition::new("city", SupportedType::String, FieldType::Categorical);
        assert!(column.is_categorical());
        assert!(!column.is_numerical());
        assert!(!column.is_int());
    }
}
