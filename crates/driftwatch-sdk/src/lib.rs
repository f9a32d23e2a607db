//! Driftwatch SDK - client library for the Driftwatch ML observability
//! platform.
//!
//! A model is registered with its declared columns, datasets are uploaded
//! and bound to it, and the platform computes statistics, data-quality,
//! and model-quality metrics out of band. The handles returned by this
//! crate track that asynchronous job and cache each metric independently,
//! so repeated reads cost at most one network call per metric once the
//! job has finished.
//!
//! # Example
//!
//! ```rust,ignore
//! use driftwatch_sdk::{DriftwatchClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = DriftwatchClient::new("https://driftwatch.example.com")?;
//!     let model = client.get_model(&model_uuid).await?;
//!
//!     let mut reference = model
//!         .load_reference_dataset("people.csv", "datasets", None, None, ",")
//!         .await?;
//!
//!     // Poll by calling again; the job runs server-side.
//!     if let Some(stats) = reference.statistics().await? {
//!         println!("{} observations", stats.n_observations);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod datasets;
pub mod error;
pub mod model;
pub mod models;
pub mod storage;
pub mod transport;
pub mod validation;

// Re-export commonly used types
pub use client::DriftwatchClient;
pub use datasets::{CurrentDataset, ReferenceDataset};
pub use error::{DriftwatchError, Result};
pub use model::Model;
pub use models::{
    ColumnDefinition, CreateModel, CurrentFileUpload, DataQuality, DataType, DatasetStats, Drift,
    FieldType, FileReference, Granularity, JobStatus, ModelDefinition, ModelFeatures,
    ModelQuality, ModelType, OutputType, ReferenceFileUpload, SupportedType,
};
pub use storage::{ObjectStorage, S3StorageProvider, StorageCredentials, StorageProvider};
pub use transport::{HttpTransport, Transport};
