//! Centralized configuration for the Driftwatch SDK.
//!
//! Constants for network behavior, storage reads, and platform API paths.

use std::time::Duration;

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
    pub const USER_AGENT: &'static str =
        concat!("driftwatch-sdk/", env!("CARGO_PKG_VERSION"));
}

/// Object storage configuration.
pub struct StorageConfig;

impl StorageConfig {
    /// Upper bound on bytes scanned while looking for the end of a remote
    /// header row. Files without a newline in this window are rejected.
    pub const HEADER_SCAN_LIMIT: usize = 1_048_576;
}

/// Platform API configuration.
pub struct ApiConfig;

impl ApiConfig {
    pub const MODELS_PATH: &'static str = "/api/models";
    pub const DEFAULT_SEPARATOR: &'static str = ",";
}
