//! Object store access.
//!
//! The [`ObjectStore`] trait is the boundary between the edge pipeline and the
//! bucket. [`HttpObjectStore`] implements it with one plain GET per listing;
//! there is no caching, retry, or timeout beyond what the host runtime imposes.

use std::error::Error as _;
use std::future::Future;
use std::pin::Pin;

use bucketview_core::{BrowseError, BrowseResult, BrowserConfig};
use bucketview_listing::encode_uri_component;
use tracing::debug;

use crate::error::EdgeError;

/// Source of raw bucket listing documents.
///
/// # Object Safety
///
/// Futures are boxed so the trait can sit behind `Arc<dyn ObjectStore>`.
pub trait ObjectStore: Send + Sync + 'static {
    /// Fetch the delimiter listing document for `prefix`.
    ///
    /// Returns the response body as text regardless of HTTP status; only
    /// transport failures are errors.
    fn fetch_listing(&self, prefix: &str)
    -> Pin<Box<dyn Future<Output = BrowseResult<String>> + Send>>;
}

/// URL of the delimiter listing for `prefix` under `base_url`.
///
/// # Examples
///
/// ```
/// use bucketview_edge::store::listing_url;
///
/// assert_eq!(
///     listing_url("https://bucket.example.com", "a b/"),
///     "https://bucket.example.com/?prefix=a%20b%2F&delimiter=/",
/// );
/// ```
#[must_use]
pub fn listing_url(base_url: &str, prefix: &str) -> String {
    format!("{base_url}/?prefix={}&delimiter=/", encode_uri_component(prefix))
}

/// Direct URL of the object `key` under `base_url`.
///
/// The whole key is encoded as one component, so `/` becomes `%2F`.
#[must_use]
pub fn object_url(base_url: &str, key: &str) -> String {
    format!("{base_url}/{}", encode_uri_component(key))
}

/// [`ObjectStore`] backed by an HTTP(S) bucket endpoint.
#[derive(Debug, Clone)]
pub struct HttpObjectStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpObjectStore {
    /// Create a client for the bucket configured in `config`.
    pub fn new(config: &BrowserConfig) -> Result<Self, EdgeError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a store reusing an existing HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: &BrowserConfig) -> Self {
        Self {
            client,
            base_url: config.store_url().to_owned(),
        }
    }

    /// The bucket base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ObjectStore for HttpObjectStore {
    fn fetch_listing(
        &self,
        prefix: &str,
    ) -> Pin<Box<dyn Future<Output = BrowseResult<String>> + Send>> {
        let client = self.client.clone();
        let url = listing_url(&self.base_url, prefix);

        Box::pin(async move {
            debug!(%url, "fetching bucket listing");

            let response = client.get(&url).send().await.map_err(|e| network_error(&e))?;
            let status = response.status();
            let body = response.text().await.map_err(|e| network_error(&e))?;

            debug!(%url, %status, bytes = body.len(), "fetched bucket listing");
            Ok(body)
        })
    }
}

/// Convert a transport failure into [`BrowseError::Network`], keeping the
/// full source chain (e.g. `... : Connection refused`).
fn network_error(err: &reqwest::Error) -> BrowseError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    BrowseError::Network(message)
}
