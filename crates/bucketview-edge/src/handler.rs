//! The edge handler: routing, browse pipeline, and response building.

use std::sync::Arc;

use bucketview_core::{BrowseResult, BrowserConfig, ListingRequest};
use bucketview_listing::{encode_uri_component, parse_listing, present, render_listing};
use tracing::{debug, info, warn};

use crate::error::EdgeError;
use crate::event::ViewerRequestEvent;
use crate::model::{EdgeOutcome, EdgeRequest};
use crate::response;
use crate::router::{Route, classify};
use crate::store::{ObjectStore, object_url};

/// Handles edge requests against one configured bucket.
///
/// The handler holds only read-only state, so clones are cheap and requests
/// can be served concurrently without coordination.
///
/// # Type Parameters
///
/// - `S`: the listing source implementing [`ObjectStore`].
#[derive(Debug)]
pub struct EdgeHandler<S: ObjectStore> {
    store: Arc<S>,
    config: Arc<BrowserConfig>,
}

impl<S: ObjectStore> Clone for EdgeHandler<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: ObjectStore> EdgeHandler<S> {
    /// Create a handler over `store` for the bucket in `config`.
    #[must_use]
    pub fn new(store: S, config: BrowserConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    /// Handle one request, producing exactly one outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::future::Future;
    /// use std::pin::Pin;
    ///
    /// use bucketview_core::{BrowseResult, BrowserConfig};
    /// use bucketview_edge::{EdgeHandler, EdgeRequest, ObjectStore};
    ///
    /// struct EmptyBucket;
    ///
    /// impl ObjectStore for EmptyBucket {
    ///     fn fetch_listing(
    ///         &self,
    ///         _prefix: &str,
    ///     ) -> Pin<Box<dyn Future<Output = BrowseResult<String>> + Send>> {
    ///         Box::pin(async { Ok("<ListBucketResult></ListBucketResult>".to_owned()) })
    ///     }
    /// }
    ///
    /// let handler = EdgeHandler::new(EmptyBucket, BrowserConfig::default());
    /// # tokio_test::block_on(async {
    /// let outcome = handler.handle(EdgeRequest::new("/browser", "prefix=")).await;
    /// assert_eq!(outcome.response().map(|r| r.status), Some(200));
    /// # });
    /// ```
    pub async fn handle(&self, request: EdgeRequest) -> EdgeOutcome {
        match classify(&request.uri, &request.querystring) {
            Route::RootRedirect => EdgeOutcome::Respond(response::redirect("/browser")),
            Route::FolderRedirect { prefix } => EdgeOutcome::Respond(response::redirect(format!(
                "/browser?prefix={}",
                encode_uri_component(&prefix)
            ))),
            Route::ObjectRedirect { key } => {
                let location = object_url(self.config.store_url(), &key);
                debug!(key = %key, location = %location, "redirecting to object");
                EdgeOutcome::Respond(response::redirect(location))
            }
            Route::Browse(listing) => EdgeOutcome::Respond(match self.browse(&listing).await {
                Ok(html) => response::listing(html),
                Err(err) => {
                    warn!(prefix = %listing.prefix, error = %err, "browse request failed");
                    response::bad_gateway(&err)
                }
            }),
            Route::PassThrough => EdgeOutcome::PassThrough(request),
        }
    }

    /// Handle the first request of a viewer-request event.
    pub async fn handle_event(&self, event: ViewerRequestEvent) -> Result<EdgeOutcome, EdgeError> {
        let request = event.into_request()?;
        Ok(self.handle(request).await)
    }

    /// Fetch, parse, present and render the listing for `request`.
    async fn browse(&self, request: &ListingRequest) -> BrowseResult<String> {
        let document = self.store.fetch_listing(&request.prefix).await?;
        let listing = parse_listing(&document, &request.prefix)?;
        let page = present(request, listing);

        info!(
            prefix = %request.prefix,
            page = request.page,
            sort = %request.sort,
            limit = request.limit,
            entries = page.total_entries,
            total_pages = page.total_pages,
            "serving bucket listing"
        );

        Ok(render_listing(request, &page))
    }
}
