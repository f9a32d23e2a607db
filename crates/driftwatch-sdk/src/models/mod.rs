//! Wire types exchanged with the Driftwatch platform.
//!
//! All types serialize as camelCase JSON. Metric payloads are opaque to the
//! SDK beyond serde validation; their semantics live server-side.

mod column;
mod data_quality;
mod definition;
mod drift;
mod file_upload;
mod job_status;
mod model_quality;
mod statistics;

pub use column::{ColumnDefinition, FieldType, SupportedType};
pub use data_quality::{
    CategoricalFeatureMetrics, CategoryFrequency, ClassMedianMetrics, ClassMetrics,
    ClassificationDataQuality, DataQuality, FeatureMetrics, MedianMetrics, MissingValue,
    NumericalFeatureMetrics, RegressionDataQuality,
};
pub use definition::{
    CreateModel, DataType, Granularity, ModelDefinition, ModelFeatures, ModelType, OutputType,
};
pub use drift::{Drift, DriftAlgorithm, DriftCalculation, FeatureDrift};
pub use file_upload::{CurrentFileUpload, FileReference, ReferenceFileUpload};
pub use job_status::JobStatus;
pub use model_quality::{
    BinaryClassificationModelQuality, Histogram, ModelQuality, MultiClassificationModelQuality,
    RegressionModelQuality,
};
pub use statistics::DatasetStats;
