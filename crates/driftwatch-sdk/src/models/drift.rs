//! Drift detection payloads for current datasets.

use serde::{Deserialize, Serialize};

/// Statistical test used to compare a feature against the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriftAlgorithm {
    Ks,
    ChiSquare,
    Psi,
}

/// Outcome of one drift test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftCalculation {
    #[serde(rename = "type")]
    pub algorithm: DriftAlgorithm,
    #[serde(default)]
    pub value: Option<f64>,
    pub has_drift: bool,
}

/// Drift verdict for one feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDrift {
    pub feature_name: String,
    pub drift_calc: DriftCalculation,
}

/// Drift report for a current dataset against its model's reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drift {
    pub feature_metrics: Vec<FeatureDrift>,
}

impl Drift {
    /// Features whose drift test fired.
    pub fn drifted_features(&self) -> Vec<&FeatureDrift> {
        self.feature_metrics
            .iter()
            .filter(|f| f.drift_calc.has_drift)
            .collect()
    }
}
