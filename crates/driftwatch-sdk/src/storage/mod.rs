//! Object storage collaborator.
//!
//! The SDK needs exactly two storage operations: put a local file under a
//! key, and stream the first line of an existing object. Both are behind
//! the [`ObjectStorage`] trait; [`StorageProvider`] constructs one client
//! per bind/load operation from the caller-supplied credentials.

pub mod location;
mod s3;

pub use s3::{S3ObjectStorage, S3StorageProvider};

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Credentials for an S3-compatible object store.
///
/// Any field left `None` falls back to the process environment. A custom
/// `endpoint` points the client at a non-AWS deployment (MinIO and
/// friends).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageCredentials {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

/// One bucket's worth of object storage operations.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload a local file under `key`, tagged with the given key/value
    /// pairs.
    async fn upload(&self, local_path: &Path, key: &str, tags: &[(String, String)])
        -> Result<()>;

    /// Read the first line of the object at `key`, without the line
    /// terminator.
    async fn read_first_line(&self, key: &str) -> Result<String>;
}

/// Builds [`ObjectStorage`] clients.
///
/// Credentials are consumed once per `open` call; nothing is cached across
/// operations.
pub trait StorageProvider: Send + Sync {
    fn open(
        &self,
        bucket: &str,
        credentials: Option<&StorageCredentials>,
    ) -> Result<Box<dyn ObjectStorage>>;
}
