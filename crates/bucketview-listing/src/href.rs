//! Link construction for browse and proxy URLs.

use bucketview_core::SortOrder;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped by JavaScript's `encodeURIComponent`.
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is percent-encoded,
/// including `/`, so a whole key travels as one query value or path segment.
const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string the way `encodeURIComponent` does.
///
/// # Examples
///
/// ```
/// use bucketview_listing::encode_uri_component;
///
/// assert_eq!(encode_uri_component("foo/bar baz.txt"), "foo%2Fbar%20baz.txt");
/// ```
#[must_use]
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT_SET).to_string()
}

/// Browse URL for a folder.
///
/// The prefix is normalized to exactly one trailing slash and no leading
/// slash before encoding, so the bucket root links as `prefix=%2F`.
#[must_use]
pub fn build_href(prefix: &str, page: usize, sort: SortOrder, limit: usize) -> String {
    let folder = format!("{}/", prefix.trim_start_matches('/').trim_end_matches('/'));
    format!(
        "/browser?prefix={}&page={page}&sort={sort}&limit={limit}",
        encode_uri_component(&folder),
    )
}

/// Proxy URL for an object key.
#[must_use]
pub fn proxy_href(key: &str) -> String {
    format!("/proxy/{}", encode_uri_component(key))
}
