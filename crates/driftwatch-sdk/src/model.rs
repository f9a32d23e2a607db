//! A registered model: declared columns, dataset binding, and feature
//! updates.

use crate::config::ApiConfig;
use crate::datasets::{CurrentDataset, ReferenceDataset};
use crate::error::{DriftwatchError, Result};
use crate::models::{
    ColumnDefinition, CurrentFileUpload, DataType, FileReference, Granularity, ModelDefinition,
    ModelFeatures, ModelType, OutputType, ReferenceFileUpload,
};
use crate::storage::location::{object_url, parse_object_url, resolve_object_key, DatasetKind};
use crate::storage::{StorageCredentials, StorageProvider};
use crate::transport::Transport;
use crate::validation;
use reqwest::{Method, StatusCode};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Client-side handle for a registered model.
///
/// Owns the declared column set consumed by dataset validation, and is the
/// entry point for binding reference and current datasets. The feature
/// list is mutable only through [`Model::update_features`], which commits
/// locally only after the platform acknowledges the change.
pub struct Model {
    transport: Arc<dyn Transport>,
    storage: Arc<dyn StorageProvider>,
    base_url: String,
    definition: ModelDefinition,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Model {
    pub fn new(
        transport: Arc<dyn Transport>,
        storage: Arc<dyn StorageProvider>,
        base_url: impl Into<String>,
        definition: ModelDefinition,
    ) -> Self {
        Self {
            transport,
            storage,
            base_url: base_url.into(),
            definition,
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.definition.uuid
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn description(&self) -> Option<&str> {
        self.definition.description.as_deref()
    }

    pub fn model_type(&self) -> ModelType {
        self.definition.model_type
    }

    pub fn data_type(&self) -> DataType {
        self.definition.data_type
    }

    pub fn granularity(&self) -> Granularity {
        self.definition.granularity
    }

    pub fn features(&self) -> &[ColumnDefinition] {
        &self.definition.features
    }

    pub fn target(&self) -> &ColumnDefinition {
        &self.definition.target
    }

    pub fn timestamp(&self) -> &ColumnDefinition {
        &self.definition.timestamp
    }

    pub fn outputs(&self) -> &OutputType {
        &self.definition.outputs
    }

    pub fn frameworks(&self) -> Option<&str> {
        self.definition.frameworks.as_deref()
    }

    pub fn algorithm(&self) -> Option<&str> {
        self.definition.algorithm.as_deref()
    }

    /// The full definition as last acknowledged by the platform.
    pub fn definition(&self) -> &ModelDefinition {
        &self.definition
    }

    /// Delete this model from the platform.
    pub async fn delete(&self) -> Result<()> {
        self.transport
            .invoke(Method::DELETE, &self.model_url(), StatusCode::OK, None)
            .await?;
        Ok(())
    }

    /// Replace the model's feature list, platform first.
    ///
    /// The local list is swapped only after the platform acknowledges the
    /// update, so the client's view and the server's view cannot diverge
    /// on a partial failure.
    pub async fn update_features(&mut self, new_features: Vec<ColumnDefinition>) -> Result<()> {
        let body = to_json(&ModelFeatures {
            features: new_features.clone(),
        })?;
        self.transport
            .invoke(Method::POST, &self.model_url(), StatusCode::OK, Some(body))
            .await?;
        self.definition.features = new_features;
        Ok(())
    }

    /// List every reference dataset bound to this model.
    pub async fn get_reference_datasets(&self) -> Result<Vec<ReferenceDataset>> {
        let url = format!("{}/reference/all", self.model_url());
        let body = self
            .transport
            .invoke(Method::GET, &url, StatusCode::OK, None)
            .await?;
        let uploads: Vec<ReferenceFileUpload> =
            serde_json::from_str(&body).map_err(|_| DriftwatchError::unparsable(&body))?;
        Ok(uploads
            .into_iter()
            .map(|upload| self.reference_handle(upload))
            .collect())
    }

    /// List every current dataset bound to this model.
    pub async fn get_current_datasets(&self) -> Result<Vec<CurrentDataset>> {
        let url = format!("{}/current/all", self.model_url());
        let body = self
            .transport
            .invoke(Method::GET, &url, StatusCode::OK, None)
            .await?;
        let uploads: Vec<CurrentFileUpload> =
            serde_json::from_str(&body).map_err(|_| DriftwatchError::unparsable(&body))?;
        Ok(uploads
            .into_iter()
            .map(|upload| self.current_handle(upload))
            .collect())
    }

    /// Upload a local reference file to object storage, then bind it.
    ///
    /// Validation runs first; a file missing required columns aborts
    /// before any storage or platform call.
    pub async fn load_reference_dataset(
        &self,
        file_name: &str,
        bucket: &str,
        object_name: Option<&str>,
        credentials: Option<&StorageCredentials>,
        separator: &str,
    ) -> Result<ReferenceDataset> {
        let headers = validation::read_header_row(Path::new(file_name), separator)?;
        let required = validation::required_columns(&self.definition);
        validation::validate_columns(file_name, &headers, &required)?;

        let key = resolve_object_key(
            &self.definition.uuid,
            DatasetKind::Reference,
            file_name,
            object_name,
        );
        self.upload(file_name, bucket, &key, DatasetKind::Reference, credentials)
            .await?;

        self.bind_reference(&object_url(bucket, &key), separator)
            .await
    }

    /// Bind a reference file already sitting in object storage.
    ///
    /// The first line of the remote object is read back for validation
    /// before the bind call is made.
    pub async fn bind_reference_dataset(
        &self,
        dataset_url: &str,
        credentials: Option<&StorageCredentials>,
        separator: &str,
    ) -> Result<ReferenceDataset> {
        let headers = self
            .remote_header_row(dataset_url, credentials, separator)
            .await?;
        let required = validation::required_columns(&self.definition);
        validation::validate_columns(dataset_url, &headers, &required)?;

        self.bind_reference(dataset_url, separator).await
    }

    /// Upload a local current file to object storage, then bind it.
    pub async fn load_current_dataset(
        &self,
        file_name: &str,
        bucket: &str,
        correlation_id_column: Option<&str>,
        object_name: Option<&str>,
        credentials: Option<&StorageCredentials>,
        separator: &str,
    ) -> Result<CurrentDataset> {
        let headers = validation::read_header_row(Path::new(file_name), separator)?;
        let required =
            validation::required_columns_for_current(&self.definition, correlation_id_column);
        validation::validate_columns(file_name, &headers, &required)?;

        let key = resolve_object_key(
            &self.definition.uuid,
            DatasetKind::Current,
            file_name,
            object_name,
        );
        self.upload(file_name, bucket, &key, DatasetKind::Current, credentials)
            .await?;

        self.bind_current(&object_url(bucket, &key), separator, correlation_id_column)
            .await
    }

    /// Bind a current file already sitting in object storage.
    pub async fn bind_current_dataset(
        &self,
        dataset_url: &str,
        correlation_id_column: &str,
        credentials: Option<&StorageCredentials>,
        separator: &str,
    ) -> Result<CurrentDataset> {
        let headers = self
            .remote_header_row(dataset_url, credentials, separator)
            .await?;
        let required = validation::required_columns_for_current(
            &self.definition,
            Some(correlation_id_column),
        );
        validation::validate_columns(dataset_url, &headers, &required)?;

        self.bind_current(dataset_url, separator, Some(correlation_id_column))
            .await
    }

    async fn upload(
        &self,
        file_name: &str,
        bucket: &str,
        key: &str,
        kind: DatasetKind,
        credentials: Option<&StorageCredentials>,
    ) -> Result<()> {
        debug!(model = %self.definition.uuid, bucket, key, "uploading dataset");
        let store = self.storage.open(bucket, credentials)?;
        let tags = [
            ("model_uuid".to_string(), self.definition.uuid.to_string()),
            ("model_name".to_string(), self.definition.name.clone()),
            ("file_type".to_string(), kind.to_string()),
        ];
        store.upload(Path::new(file_name), key, &tags).await
    }

    async fn remote_header_row(
        &self,
        dataset_url: &str,
        credentials: Option<&StorageCredentials>,
        separator: &str,
    ) -> Result<Vec<String>> {
        let (bucket, key) = parse_object_url(dataset_url)?;
        let store = self.storage.open(&bucket, credentials)?;
        let line = store.read_first_line(&key).await?;
        Ok(validation::split_header_line(&line, separator))
    }

    async fn bind_reference(
        &self,
        dataset_url: &str,
        separator: &str,
    ) -> Result<ReferenceDataset> {
        let body = to_json(&FileReference {
            file_url: dataset_url.to_string(),
            separator: separator.to_string(),
            correlation_id_column: None,
        })?;
        let url = format!("{}/reference/bind", self.model_url());
        let response = self
            .transport
            .invoke(Method::POST, &url, StatusCode::OK, Some(body))
            .await?;
        let upload: ReferenceFileUpload =
            serde_json::from_str(&response).map_err(|_| DriftwatchError::unparsable(&response))?;
        Ok(self.reference_handle(upload))
    }

    async fn bind_current(
        &self,
        dataset_url: &str,
        separator: &str,
        correlation_id_column: Option<&str>,
    ) -> Result<CurrentDataset> {
        let body = to_json(&FileReference {
            file_url: dataset_url.to_string(),
            separator: separator.to_string(),
            correlation_id_column: correlation_id_column.map(str::to_string),
        })?;
        let url = format!("{}/current/bind", self.model_url());
        let response = self
            .transport
            .invoke(Method::POST, &url, StatusCode::OK, Some(body))
            .await?;
        let upload: CurrentFileUpload =
            serde_json::from_str(&response).map_err(|_| DriftwatchError::unparsable(&response))?;
        Ok(self.current_handle(upload))
    }

    fn reference_handle(&self, upload: ReferenceFileUpload) -> ReferenceDataset {
        ReferenceDataset::new(
            self.transport.clone(),
            self.base_url.clone(),
            self.definition.uuid,
            self.definition.model_type,
            upload,
        )
    }

    fn current_handle(&self, upload: CurrentFileUpload) -> CurrentDataset {
        CurrentDataset::new(
            self.transport.clone(),
            self.base_url.clone(),
            self.definition.uuid,
            self.definition.model_type,
            upload,
        )
    }

    fn model_url(&self) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            ApiConfig::MODELS_PATH,
            self.definition.uuid
        )
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| DriftwatchError::Protocol {
        message: format!("unable to serialize request body: {e}"),
    })
}
