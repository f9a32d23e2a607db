//! S3-backed [`ObjectStorage`] implementation.

use crate::config::StorageConfig;
use crate::error::{DriftwatchError, Result};
use crate::storage::{ObjectStorage, StorageCredentials, StorageProvider};
use async_trait::async_trait;
use futures::StreamExt;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path as ObjectPath;
use object_store::{ObjectStore, PutOptions, PutPayload, TagSet};
use std::path::Path;
use tracing::debug;

/// Object storage client for one S3 bucket.
pub struct S3ObjectStorage {
    store: AmazonS3,
    bucket: String,
}

impl S3ObjectStorage {
    /// Build a client for `bucket`.
    ///
    /// Explicit credentials override the process environment field by
    /// field; a custom endpoint also enables plain-HTTP access for local
    /// deployments.
    pub fn open(bucket: &str, credentials: Option<&StorageCredentials>) -> Result<Self> {
        let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket);

        if let Some(credentials) = credentials {
            if let Some(access_key_id) = &credentials.access_key_id {
                builder = builder.with_access_key_id(access_key_id);
            }
            if let Some(secret_access_key) = &credentials.secret_access_key {
                builder = builder.with_secret_access_key(secret_access_key);
            }
            if let Some(region) = &credentials.region {
                builder = builder.with_region(region);
            }
            if let Some(endpoint) = &credentials.endpoint {
                builder = builder.with_endpoint(endpoint).with_allow_http(true);
            }
        }

        Ok(Self {
            store: builder.build()?,
            bucket: bucket.to_string(),
        })
    }
}

#[async_trait]
impl ObjectStorage for S3ObjectStorage {
    async fn upload(
        &self,
        local_path: &Path,
        key: &str,
        tags: &[(String, String)],
    ) -> Result<()> {
        debug!(bucket = %self.bucket, key, "uploading dataset file");

        let bytes = tokio::fs::read(local_path)
            .await
            .map_err(|e| DriftwatchError::io_with_path(e, local_path))?;

        let mut tag_set = TagSet::default();
        for (name, value) in tags {
            tag_set.push(name, value);
        }

        let options = PutOptions {
            tags: tag_set,
            ..Default::default()
        };
        self.store
            .put_opts(&ObjectPath::from(key), PutPayload::from(bytes), options)
            .await?;
        Ok(())
    }

    async fn read_first_line(&self, key: &str) -> Result<String> {
        debug!(bucket = %self.bucket, key, "reading remote header row");

        let result = self.store.get(&ObjectPath::from(key)).await?;
        let mut stream = result.into_stream();
        let mut buffer = String::new();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            buffer.push_str(&String::from_utf8_lossy(&chunk));
            if buffer.contains('\n') {
                break;
            }
            if buffer.len() > StorageConfig::HEADER_SCAN_LIMIT {
                return Err(DriftwatchError::storage(format!(
                    "no header row found in the first {} bytes of {key}",
                    StorageConfig::HEADER_SCAN_LIMIT
                )));
            }
        }

        let first_line = buffer.split('\n').next().unwrap_or_default();
        Ok(first_line.trim_end_matches('\r').to_string())
    }
}

/// Default [`StorageProvider`]: one fresh S3 client per operation.
#[derive(Debug, Default)]
pub struct S3StorageProvider;

impl StorageProvider for S3StorageProvider {
    fn open(
        &self,
        bucket: &str,
        credentials: Option<&StorageCredentials>,
    ) -> Result<Box<dyn ObjectStorage>> {
        Ok(Box::new(S3ObjectStorage::open(bucket, credentials)?))
    }
}
