//! Handle for a bound current dataset.

use crate::config::ApiConfig;
use crate::datasets::state::{
    parse_data_quality, parse_drift, parse_model_quality, parse_statistics, MetricsState,
};
use crate::error::Result;
use crate::models::{
    CurrentFileUpload, DataQuality, DatasetStats, Drift, JobStatus, ModelQuality, ModelType,
};
use crate::transport::Transport;
use reqwest::{Method, StatusCode};
use std::sync::Arc;
use uuid::Uuid;

/// Client-side proxy for a current dataset and its metrics job.
///
/// Same caching state machine as [`ReferenceDataset`], plus a fourth slot
/// for drift against the model's reference.
///
/// [`ReferenceDataset`]: crate::datasets::ReferenceDataset
pub struct CurrentDataset {
    transport: Arc<dyn Transport>,
    base_url: String,
    model_uuid: Uuid,
    model_type: ModelType,
    uuid: Uuid,
    path: String,
    date: String,
    correlation_id_column: Option<String>,
    state: MetricsState,
}

impl std::fmt::Debug for CurrentDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentDataset")
            .field("model_uuid", &self.model_uuid)
            .field("uuid", &self.uuid)
            .field("path", &self.path)
            .field("date", &self.date)
            .finish_non_exhaustive()
    }
}

impl CurrentDataset {
    pub fn new(
        transport: Arc<dyn Transport>,
        base_url: impl Into<String>,
        model_uuid: Uuid,
        model_type: ModelType,
        upload: CurrentFileUpload,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            model_uuid,
            model_type,
            uuid: upload.uuid,
            path: upload.path,
            date: upload.date,
            correlation_id_column: upload.correlation_id_column,
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

    /// Column used to correlate rows with ground truth, when declared.
    pub fn correlation_id_column(&self) -> Option<&str> {
        self.correlation_id_column.as_deref()
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

    /// Get the drift report comparing this dataset against the model's
    /// reference, if the job has produced it.
    pub async fn drift(&mut self) -> Result<Option<Drift>> {
        if self.state.status == JobStatus::Error {
            self.state.invalidate();
            return Ok(None);
        }
        if !self.state.needs_fetch(&self.state.drift) {
            return Ok(self.state.drift.clone());
        }

        let body = self.fetch("drift").await?;
        let (status, payload) = parse_drift(&body)?;
        Ok(self.state.observe(status, payload, |s| &mut s.drift))
    }

    async fn fetch(&self, metric: &str) -> Result<String> {
        let url = format!(
            "{}{}/{}/current/{}/{metric}",
            self.base_url,
            ApiConfig::MODELS_PATH,
            self.model_uuid,
            self.uuid
        );
        self.transport
            .invoke(Method::GET, &url, StatusCode::OK, None)
            .await
    }
}
