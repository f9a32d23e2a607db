//! Dataset-level descriptive statistics computed by the platform.

use serde::{Deserialize, Serialize};

/// Summary statistics for a bound dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub n_variables: u64,
    pub n_observations: u64,
    #[serde(default)]
    pub missing_cells: Option<u64>,
    #[serde(default)]
    pub missing_cells_perc: Option<f64>,
    #[serde(default)]
    pub duplicate_rows: Option<u64>,
    #[serde(default)]
    pub duplicate_rows_perc: Option<f64>,
    /// Number of numeric columns.
    #[serde(default)]
    pub numeric: Option<u64>,
    /// Number of categorical columns.
    #[serde(default)]
    pub categorical: Option<u64>,
    /// Number of datetime columns.
    #[serde(default)]
    pub datetime: Option<u64>,
}
