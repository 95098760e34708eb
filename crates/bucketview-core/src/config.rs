//! Browser configuration.
//!
//! Provides [`BrowserConfig`], constructed once at process start and handed
//! to the object store client and the edge handler. Nothing in the request
//! path reads the environment.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Bucket served when `S3_BASE_URL` is not set.
pub const DEFAULT_STORE_BASE_URL: &str = "https://geonet-open-data.s3-ap-southeast-2.amazonaws.com";

/// Bucketview configuration.
///
/// # Examples
///
/// ```
/// use bucketview_core::BrowserConfig;
///
/// let config = BrowserConfig::builder()
///     .store_base_url("http://127.0.0.1:9000/bucket/".into())
///     .build();
/// assert_eq!(config.store_url(), "http://127.0.0.1:9000/bucket");
/// assert_eq!(config.gateway_listen, "127.0.0.1:3000");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct BrowserConfig {
    /// Base URL of the bucket, e.g. `https://bucket.s3.amazonaws.com`.
    #[builder(default = String::from(DEFAULT_STORE_BASE_URL))]
    pub store_base_url: String,

    /// Bind address of the local development server.
    #[builder(default = String::from("127.0.0.1:3000"))]
    pub gateway_listen: String,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            store_base_url: String::from(DEFAULT_STORE_BASE_URL),
            gateway_listen: String::from("127.0.0.1:3000"),
            log_level: String::from("info"),
        }
    }
}

impl BrowserConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `S3_BASE_URL` | `https://geonet-open-data.s3-ap-southeast-2.amazonaws.com` |
    /// | `GATEWAY_LISTEN` | `127.0.0.1:3000` |
    /// | `LOG_LEVEL` | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("S3_BASE_URL") {
            if !v.trim().is_empty() {
                config.store_base_url = v;
            }
        }
        if let Ok(v) = std::env::var("GATEWAY_LISTEN") {
            config.gateway_listen = v;
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// The store base URL without trailing slashes, ready to have a path joined.
    #[must_use]
    pub fn store_url(&self) -> &str {
        self.store_base_url.trim_end_matches('/')
    }
}
