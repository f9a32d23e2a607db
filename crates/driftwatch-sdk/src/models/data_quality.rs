//! Data-quality metric payloads.
//!
//! The payload shape depends on the kind of model the dataset is bound to,
//! so [`DataQuality`] is a tagged wrapper chosen by the handle at parse
//! time rather than a self-describing wire type.

use serde::{Deserialize, Serialize};

/// Occurrence counts for one target class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMetrics {
    pub name: String,
    pub count: u64,
    #[serde(default)]
    pub percentage: Option<f64>,
}

/// Quartile summary of a numerical column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedianMetrics {
    #[serde(default)]
    pub perc_25: Option<f64>,
    #[serde(default)]
    pub median: Option<f64>,
    #[serde(default)]
    pub perc_75: Option<f64>,
}

/// Missing-value counts for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingValue {
    pub count: u64,
    #[serde(default)]
    pub percentage: Option<f64>,
}

/// Per-class central tendency of a numerical feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMedianMetrics {
    pub name: String,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub median_metrics: Option<MedianMetrics>,
}

/// Frequency of one category of a categorical feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFrequency {
    pub name: String,
    pub count: u64,
    #[serde(default)]
    pub frequency: Option<f64>,
}

/// Quality metrics for a numerical feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumericalFeatureMetrics {
    pub feature_name: String,
    #[serde(default)]
    pub missing_value: Option<MissingValue>,
    #[serde(default)]
    pub mean: Option<f64>,
    #[serde(default)]
    pub std: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub median_metrics: Option<MedianMetrics>,
    #[serde(default)]
    pub class_median_metrics: Option<Vec<ClassMedianMetrics>>,
}

/// Quality metrics for a categorical feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoricalFeatureMetrics {
    pub feature_name: String,
    #[serde(default)]
    pub missing_value: Option<MissingValue>,
    #[serde(default)]
    pub category_frequency: Option<Vec<CategoryFrequency>>,
    #[serde(default)]
    pub distinct_value: Option<u64>,
}

/// Per-feature quality metrics, discriminated by the `type` field on the
/// wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeatureMetrics {
    #[serde(rename = "numerical")]
    Numerical(NumericalFeatureMetrics),
    #[serde(rename = "categorical")]
    Categorical(CategoricalFeatureMetrics),
}

impl FeatureMetrics {
    pub fn feature_name(&self) -> &str {
        match self {
            FeatureMetrics::Numerical(metrics) => &metrics.feature_name,
            FeatureMetrics::Categorical(metrics) => &metrics.feature_name,
        }
    }
}

/// Data-quality payload for classification models (binary and multiclass).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationDataQuality {
    #[serde(default)]
    pub n_observations: Option<u64>,
    #[serde(default)]
    pub class_metrics: Option<Vec<ClassMetrics>>,
    #[serde(default)]
    pub feature_metrics: Option<Vec<FeatureMetrics>>,
}

/// Data-quality payload for regression models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionDataQuality {
    #[serde(default)]
    pub n_observations: Option<u64>,
    #[serde(default)]
    pub target_metrics: Option<NumericalFeatureMetrics>,
    #[serde(default)]
    pub feature_metrics: Option<Vec<FeatureMetrics>>,
}

/// Data-quality metrics, keyed by the model kind of the owning dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum DataQuality {
    Classification(ClassificationDataQuality),
    Regression(RegressionDataQuality),
}

impl DataQuality {
    pub fn as_classification(&self) -> Option<&ClassificationDataQuality> {
        match self {
            DataQuality::Classification(quality) => Some(quality),
            DataQuality::Regression(_) => None,
        }
    }

    pub fn as_regression(&self) -> Option<&RegressionDataQuality> {
        match self {
            DataQuality::Regression(quality) => Some(quality),
            DataQuality::Classification(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_metrics_discriminated_by_type() {
        let metrics: Vec<FeatureMetrics> = serde_json::from_str(
            r#"[
                {"type": "numerical", "featureName": "age", "mean": 33.5, "std": 4.2},
                {"type": "categorical", "featureName": "plan", "distinctValue": 3}
            ]"#,
        )
        .unwrap();
        assert!(matches!(metrics[0], FeatureMetrics::Numerical(_)));
        assert!(matches!(metrics[1], FeatureMetrics::Categorical(_)));
        assert_eq!(metrics[0].feature_name(), "age");
        assert_eq!(metrics[1].feature_name(), "plan");
    }

    #[test]
    fn test_classification_payload_parses_camel_case() {
        let quality: ClassificationDataQuality = serde_json::from_str(
            r#"{
                "nObservations": 1000,
                "classMetrics": [{"name": "true", "count": 600, "percentage": 60.0}]
            }"#,
        )
        .unwrap();
        assert_eq!(quality.n_observations, Some(1000));
        assert_eq!(quality.class_metrics.unwrap()[0].count, 600);
    }
}
