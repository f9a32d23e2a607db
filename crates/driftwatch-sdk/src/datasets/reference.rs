//! Handle for a bound reference dataset.

use crate::config::ApiConfig;
use crate::datasets::state::{
    parse_data_quality, parse_model_quality, parse_statistics, MetricsState,
};
use crate::error::Result;
use crate::models::{
    DataQuality, DatasetStats, JobStatus, ModelQuality, ModelType, ReferenceFileUpload,
};
use crate::transport::Transport;
use reqwest::{Method, StatusCode};
use std::sync::Arc;
use uuid::Uuid;

/// Client-side proxy for a reference dataset and its metrics job.
///
/// Identity is immutable; the job status and the three metric caches
/// evolve as accessors observe the server. Accessors take `&mut self`:
/// sharing a handle across tasks requires external synchronization.
pub struct ReferenceDataset {
    transport: Arc<dyn Transport>,
    base_url: String,
    model_uuid: Uuid,
    model_type: ModelType,
    uuid: Uuid,
    path: String,
    date: String,
    state: MetricsState,
}

impl std::fmt::Debug for ReferenceDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceDataset")
            .field("model_uuid", &self.model_uuid)
            .field("uuid", &self.uuid)
            .field("path", &self.path)
            .field("date", &self.date)
            .finish_non_exhaustive()
    }
}

impl ReferenceDataset {
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: impl Into<String>,
        model_uuid: Uuid,
        model_type: ModelType,
        upload: ReferenceFileUpload,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            model_uuid,
            model_type,
            uuid: upload.uuid,
            path: upload.path,
            date: upload.date,
            state: MetricsState::new(upload.status),
        }
    }

    /// Server-issued identity of this dataset.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// Storage path the dataset was bound from.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Creation timestamp reported by the platform.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Last job status observed from the platform.
    pub fn status(&self) -> JobStatus {
        self.state.status
    }

    /// Get statistics about the dataset, if the job has produced them.
    pub async fn statistics(&mut self) -> Result<Option<DatasetStats>> {
        if self.state.status == JobStatus::Error {
            self.state.invalidate();
            return Ok(None);
        }
        if !self.state.needs_fetch(&self.state.statistics) {
            return Ok(self.state.statistics.clone());
        }

        let body = self.fetch("statistics").await?;
        let (status, payload) = parse_statistics(&body)?;
        Ok(self.state.observe(status, payload, |s| &mut s.statistics))
    }

    /// Get data-quality metrics about the dataset, if the job has produced
    /// them.
    pub async fn data_quality(&mut self) -> Result<Option<DataQuality>> {
        if self.state.status == JobStatus::Error {
            self.state.invalidate();
            return Ok(None);
        }
        if !self.state.needs_fetch(&self.state.data_quality) {
            return Ok(self.state.data_quality.clone());
        }

        let body = self.fetch("data-quality").await?;
        let (status, payload) = parse_data_quality(&body, self.model_type)?;
        Ok(self.state.observe(status, payload, |s| &mut s.data_quality))
    }

    /// Get model-quality metrics about the dataset, if the job has
    /// produced them.
    pub async fn model_quality(&mut self) -> Result<Option<ModelQuality>> {
        if self.state.status == JobStatus::Error {
            self.state.invalidate();
            return Ok(None);
        }
        if !self.state.needs_fetch(&self.state.model_quality) {
            return Ok(self.state.model_quality.clone());
        }

        let body = self.fetch("model-quality").await?;
        let (status, payload) = parse_model_quality(&body, self.model_type)?;
        Ok(self.state.observe(status, payload, |s| &mut s.model_quality))
    }

    async fn fetch(&self, metric: &str) -> Result<String> {
        let url = format!(
            "{}{}/{}/reference/{metric}",
            self.base_url,
            ApiConfig::MODELS_PATH,
            self.model_uuid
        );
        self.transport
            .invoke(Method::GET, &url, StatusCode::OK, None)
            .await
    }
}
