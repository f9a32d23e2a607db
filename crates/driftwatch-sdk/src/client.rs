//! Platform entry point: registering and looking up models.

use crate::config::ApiConfig;
use crate::error::{DriftwatchError, Result};
use crate::model::Model;
use crate::models::{CreateModel, ModelDefinition};
use crate::storage::{S3StorageProvider, StorageProvider};
use crate::transport::{HttpTransport, Transport};
use reqwest::{Method, StatusCode};
use std::sync::Arc;
use uuid::Uuid;

/// Client for one Driftwatch platform deployment.
///
/// Cheap to clone; every [`Model`] handed out shares this client's
/// transport and storage provider.
#[derive(Clone)]
pub struct DriftwatchClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    storage: Arc<dyn StorageProvider>,
}

impl DriftwatchClient {
    /// Create a client with the default HTTP transport and S3 storage.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::with_collaborators(
            base_url,
            Arc::new(HttpTransport::new()?),
            Arc::new(S3StorageProvider),
        ))
    }

    /// Create a client over explicit collaborators.
    pub fn with_collaborators(
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
        storage: Arc<dyn StorageProvider>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
            storage,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register a new model with the platform.
    pub async fn create_model(&self, model: CreateModel) -> Result<Model> {
        let body = serde_json::to_string(&model).map_err(|e| DriftwatchError::Protocol {
            message: format!("unable to serialize request body: {e}"),
        })?;
        let response = self
            .transport
            .invoke(
                Method::POST,
                &self.models_url(),
                StatusCode::CREATED,
                Some(body),
            )
            .await?;
        self.parse_model(&response)
    }

    /// Fetch a registered model by identity.
    pub async fn get_model(&self, uuid: &Uuid) -> Result<Model> {
        let url = format!("{}/{uuid}", self.models_url());
        let response = self
            .transport
            .invoke(Method::GET, &url, StatusCode::OK, None)
            .await?;
        self.parse_model(&response)
    }

    /// List every model registered with the platform.
    pub async fn list_models(&self) -> Result<Vec<Model>> {
        let response = self
            .transport
            .invoke(Method::GET, &self.models_url(), StatusCode::OK, None)
            .await?;
        let definitions: Vec<ModelDefinition> =
            serde_json::from_str(&response).map_err(|_| DriftwatchError::unparsable(&response))?;
        Ok(definitions
            .into_iter()
            .map(|definition| self.model_handle(definition))
            .collect())
    }

    fn parse_model(&self, response: &str) -> Result<Model> {
        let definition: ModelDefinition =
            serde_json::from_str(response).map_err(|_| DriftwatchError::unparsable(response))?;
        Ok(self.model_handle(definition))
    }

    fn model_handle(&self, definition: ModelDefinition) -> Model {
        Model::new(
            self.transport.clone(),
            self.storage.clone(),
            self.base_url.clone(),
            definition,
        )
    }

    fn models_url(&self) -> String {
        format!("{}{}", self.base_url, ApiConfig::MODELS_PATH)
    }
}
