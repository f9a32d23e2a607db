//! Canonical object-storage locations for dataset files.
//!
//! Both the "upload a local file" and "bind a pre-uploaded object" paths
//! address storage through these helpers, so the two can never disagree on
//! layout.

use crate::error::{DriftwatchError, Result};
use std::fmt;
use std::path::Path;
use url::Url;
use uuid::Uuid;

/// Which side of the comparison a dataset sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Reference,
    Current,
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DatasetKind::Reference => "reference",
            DatasetKind::Current => "current",
        };
        f.write_str(label)
    }
}

/// Resolve the object key for an upload.
///
/// An explicit `object_name` wins verbatim, collisions and all; otherwise
/// the canonical layout is `{model_uuid}/{kind}/{basename}`.
pub fn resolve_object_key(
    model_uuid: &Uuid,
    kind: DatasetKind,
    file_name: &str,
    object_name: Option<&str>,
) -> String {
    match object_name {
        Some(explicit) => explicit.to_string(),
        None => {
            let basename = Path::new(file_name)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file_name.to_string());
            format!("{model_uuid}/{kind}/{basename}")
        }
    }
}

/// Render an `s3://bucket/key` URL for a bound object.
pub fn object_url(bucket: &str, key: &str) -> String {
    format!("s3://{bucket}/{key}")
}

/// Split an `s3://bucket/key` URL into bucket and key.
pub fn parse_object_url(dataset_url: &str) -> Result<(String, String)> {
    let invalid = || DriftwatchError::storage(format!("invalid object storage url: {dataset_url}"));

    let url = Url::parse(dataset_url).map_err(|_| invalid())?;
    if url.scheme() != "s3" {
        return Err(invalid());
    }
    let bucket = url.host_str().ok_or_else(invalid)?.to_string();
    let key = url.path().trim_start_matches('/').to_string();
    if key.is_empty() {
        return Err(invalid());
    }
    Ok((bucket, key))
}
