//! Edge response construction for each pipeline outcome.

use bucketview_core::BrowseError;
use bucketview_listing::render_error;

use crate::model::EdgeResponse;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// `302 Redirect` to `location`.
#[must_use]
pub fn redirect(location: impl Into<String>) -> EdgeResponse {
    EdgeResponse::new(302, "Redirect").with_header("Location", location)
}

/// `200 OK` carrying a rendered listing.
///
/// Listings are never cacheable since bucket contents change underneath them.
#[must_use]
pub fn listing(html: String) -> EdgeResponse {
    EdgeResponse::new(200, "OK")
        .with_header("Content-Type", HTML_CONTENT_TYPE)
        .with_header("Cache-Control", "no-store")
        .with_body(html)
}

/// `502 Bad Gateway` describing a failed browse.
#[must_use]
pub fn bad_gateway(err: &BrowseError) -> EdgeResponse {
    EdgeResponse::new(502, "Bad Gateway")
        .with_header("Content-Type", HTML_CONTENT_TYPE)
        .with_body(render_error(&err.to_string()))
}
