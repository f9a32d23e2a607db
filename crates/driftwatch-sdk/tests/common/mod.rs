//! In-memory collaborators and fixtures shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use driftwatch_sdk::models::{
    ColumnDefinition, DataType, FieldType, Granularity, ModelDefinition, ModelType, OutputType,
    SupportedType,
};
use driftwatch_sdk::{
    DriftwatchError, ObjectStorage, Result, StorageCredentials, StorageProvider, Transport,
};
use reqwest::{Method, StatusCode};
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// One request observed by the mock transport.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub url: String,
    pub body: Option<String>,
}

enum CannedResponse {
    Body(String),
    Status(u16),
}

/// FIFO-scripted [`Transport`]: every queued entry answers exactly one
/// request, and every request is recorded.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<CannedResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_body(&self, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(CannedResponse::Body(body.into()));
    }

    pub fn push_status(&self, status: u16) {
        self.responses
            .lock()
            .unwrap()
            .push_back(CannedResponse::Status(status));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn invoke(
        &self,
        method: Method,
        url: &str,
        expected_status: StatusCode,
        body: Option<String>,
    ) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            url: url.to_string(),
            body,
        });
        match self.responses.lock().unwrap().pop_front() {
            Some(CannedResponse::Body(body)) => Ok(body),
            Some(CannedResponse::Status(actual)) => Err(DriftwatchError::UnexpectedStatus {
                url: url.to_string(),
                expected: expected_status.as_u16(),
                actual,
            }),
            None => panic!("unexpected request to {url}"),
        }
    }
}

/// One upload observed by the mock object store.
#[derive(Debug, Clone)]
pub struct RecordedUpload {
    pub local_path: PathBuf,
    pub key: String,
    pub tags: Vec<(String, String)>,
}

#[derive(Default)]
struct MockStorageInner {
    first_lines: Mutex<HashMap<String, String>>,
    uploads: Mutex<Vec<RecordedUpload>>,
}

/// In-memory [`ObjectStorage`] recording uploads and serving canned
/// header rows.
#[derive(Clone, Default)]
pub struct MockStorage {
    inner: Arc<MockStorageInner>,
}

impl MockStorage {
    pub fn set_first_line(&self, key: impl Into<String>, line: impl Into<String>) {
        self.inner
            .first_lines
            .lock()
            .unwrap()
            .insert(key.into(), line.into());
    }

    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.inner.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStorage for MockStorage {
    async fn upload(
        &self,
        local_path: &Path,
        key: &str,
        tags: &[(String, String)],
    ) -> Result<()> {
        self.inner.uploads.lock().unwrap().push(RecordedUpload {
            local_path: local_path.to_path_buf(),
            key: key.to_string(),
            tags: tags.to_vec(),
        });
        Ok(())
    }

    async fn read_first_line(&self, key: &str) -> Result<String> {
        self.inner
            .first_lines
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| DriftwatchError::storage(format!("no such object: {key}")))
    }
}

/// [`StorageProvider`] handing out clones of one [`MockStorage`] and
/// recording each open.
#[derive(Default)]
pub struct MockStorageProvider {
    store: MockStorage,
    opens: Mutex<Vec<(String, Option<StorageCredentials>)>>,
}

impl MockStorageProvider {
    pub fn store(&self) -> &MockStorage {
        &self.store
    }

    pub fn opens(&self) -> Vec<(String, Option<StorageCredentials>)> {
        self.opens.lock().unwrap().clone()
    }
}

impl StorageProvider for MockStorageProvider {
    fn open(
        &self,
        bucket: &str,
        credentials: Option<&StorageCredentials>,
    ) -> Result<Box<dyn ObjectStorage>> {
        self.opens
            .lock()
            .unwrap()
            .push((bucket.to_string(), credentials.cloned()));
        Ok(Box::new(self.store.clone()))
    }
}

/// The model from the people scenario: one `age` feature, `adult` target,
/// `prediction` output, `created_at` timestamp.
pub fn people_definition(uuid: Uuid, model_type: ModelType) -> ModelDefinition {
    let prediction =
        ColumnDefinition::new("prediction", SupportedType::Float, FieldType::Numerical);
    ModelDefinition {
        uuid,
        name: "people".into(),
        description: None,
        model_type,
        data_type: DataType::Tabular,
        granularity: Granularity::Day,
        features: vec![ColumnDefinition::new(
            "age",
            SupportedType::Int,
            FieldType::Numerical,
        )],
        outputs: OutputType {
            prediction: prediction.clone(),
            prediction_proba: None,
            output: vec![prediction],
        },
        target: ColumnDefinition::new("adult", SupportedType::Bool, FieldType::Categorical),
        timestamp: ColumnDefinition::new(
            "created_at",
            SupportedType::Datetime,
            FieldType::Datetime,
        ),
        frameworks: None,
        algorithm: None,
        created_at: "2024-01-01T00:00:00Z".into(),
        updated_at: "2024-01-01T00:00:00Z".into(),
    }
}
