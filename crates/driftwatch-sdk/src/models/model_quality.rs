//! Model-quality metric payloads.
//!
//! Like data quality, the wire shape is selected by the owning dataset's
//! model kind, so [`ModelQuality`] wraps one payload struct per kind.

use crate::models::data_quality::{ClassMetrics, FeatureMetrics};
use serde::{Deserialize, Serialize};

/// Distribution histogram attached to quality payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Histogram {
    pub bins: Vec<f64>,
    pub counts: Vec<u64>,
}

/// Quality metrics for binary classification models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryClassificationModelQuality {
    #[serde(default)]
    pub f1: Option<f64>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub precision: Option<f64>,
    #[serde(default)]
    pub recall: Option<f64>,
    #[serde(default)]
    pub f_measure: Option<f64>,
    #[serde(default)]
    pub weighted_precision: Option<f64>,
    #[serde(default)]
    pub weighted_recall: Option<f64>,
    #[serde(default)]
    pub weighted_f_measure: Option<f64>,
    #[serde(default)]
    pub weighted_true_positive_rate: Option<f64>,
    #[serde(default)]
    pub weighted_false_positive_rate: Option<f64>,
    #[serde(default)]
    pub true_positive_rate: Option<f64>,
    #[serde(default)]
    pub false_positive_rate: Option<f64>,
    #[serde(default)]
    pub true_positive_count: Option<u64>,
    #[serde(default)]
    pub false_positive_count: Option<u64>,
    #[serde(default)]
    pub true_negative_count: Option<u64>,
    #[serde(default)]
    pub false_negative_count: Option<u64>,
    #[serde(default)]
    pub area_under_roc: Option<f64>,
    #[serde(default)]
    pub area_under_pr: Option<f64>,
    #[serde(default)]
    pub class_metrics: Option<Vec<ClassMetrics>>,
    #[serde(default)]
    pub feature_metrics: Option<Vec<FeatureMetrics>>,
    #[serde(default)]
    pub histogram: Option<Histogram>,
}

/// Quality metrics for multiclass classification models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiClassificationModelQuality {
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub class_metrics: Option<Vec<ClassMetrics>>,
    #[serde(default)]
    pub feature_metrics: Option<Vec<FeatureMetrics>>,
    #[serde(default)]
    pub histogram: Option<Histogram>,
}

/// Quality metrics for regression models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionModelQuality {
    #[serde(default)]
    pub mean_absolute_error: Option<f64>,
    #[serde(default)]
    pub mean_squared_error: Option<f64>,
    #[serde(default)]
    pub root_mean_squared_error: Option<f64>,
    #[serde(default)]
    pub r_squared: Option<f64>,
    #[serde(default)]
    pub feature_metrics: Option<Vec<FeatureMetrics>>,
    #[serde(default)]
    pub histogram: Option<Histogram>,
}

/// Model-quality metrics, keyed by the model kind of the owning dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelQuality {
    Binary(BinaryClassificationModelQuality),
    Multiclass(MultiClassificationModelQuality),
    Regression(RegressionModelQuality),
}

impl ModelQuality {
    pub fn as_binary(&self) -> Option<&BinaryClassificationModelQuality> {
        match self {
            ModelQuality::Binary(quality) => Some(quality),
            _ => None,
        }
    }

    pub fn as_multiclass(&self) -> Option<&MultiClassificationModelQuality> {
        match self {
            ModelQuality::Multiclass(quality) => Some(quality),
            _ => None,
        }
    }

    pub fn as_regression(&self) -> Option<&RegressionModelQuality> {
        match self {
            ModelQuality::Regression(quality) => Some(quality),
            _ => None,
        }
    }
}
