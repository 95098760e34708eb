//! Request classification.
//!
//! [`classify`] maps every URI to exactly one [`Route`]. The checks run in a
//! fixed order:
//!
//! 1. `/` exactly: redirect to the browser.
//! 2. `/proxy/<key>`: redirect to the browser (folder-like key) or to the object.
//! 3. `/browser...`: list a prefix.
//! 4. Anything else: pass through untouched.
//!
//! There is no unmatched case, and no route touches the object store.

use bucketview_core::{ListingRequest, SortOrder};
use percent_encoding::percent_decode_str;
use tracing::debug;

const PROXY_PREFIX: &str = "/proxy/";
const BROWSER_PREFIX: &str = "/browser";

/// Outcome of classifying a request URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: redirect to `/browser`.
    RootRedirect,
    /// `/proxy/<key>` where the key ends with `/`: browse it instead.
    FolderRedirect {
        /// Decoded folder key, with its trailing slash.
        prefix: String,
    },
    /// `/proxy/<key>` for an object: redirect to the object URL in the store.
    ObjectRedirect {
        /// Decoded object key.
        key: String,
    },
    /// `/browser`: render a listing.
    Browse(ListingRequest),
    /// Not ours: leave the request to the hosting platform.
    PassThrough,
}

/// Classify a request by its URI and raw query string.
///
/// # Examples
///
/// ```
/// use bucketview_edge::{Route, classify};
///
/// assert_eq!(classify("/", ""), Route::RootRedirect);
/// assert_eq!(
///     classify("/proxy/foo%2Fbar.txt", ""),
///     Route::ObjectRedirect { key: "foo/bar.txt".into() },
/// );
/// assert_eq!(classify("/favicon.ico", ""), Route::PassThrough);
/// ```
#[must_use]
pub fn classify(uri: &str, querystring: &str) -> Route {
    let route = if uri == "/" {
        Route::RootRedirect
    } else if let Some(rest) = uri.strip_prefix(PROXY_PREFIX) {
        proxy_route(rest)
    } else if uri.starts_with(BROWSER_PREFIX) {
        Route::Browse(parse_listing_query(querystring))
    } else {
        Route::PassThrough
    };

    debug!(uri, querystring, route = ?route, "classified request");
    route
}

/// Route a `/proxy/` remainder by whether the decoded key names a folder.
fn proxy_route(rest: &str) -> Route {
    let raw = rest.split_once('?').map_or(rest, |(path, _)| path);
    let key = decode_uri_component(raw);

    if key.ends_with('/') {
        Route::FolderRedirect { prefix: key }
    } else {
        Route::ObjectRedirect { key }
    }
}

/// Build a [`ListingRequest`] from the browse query string.
///
/// `prefix` is form-decoded with the rest of the query and then
/// percent-decoded once more, so doubly encoded links still resolve.
/// Missing or unusable `page`/`limit` values fall back to their defaults.
fn parse_listing_query(querystring: &str) -> ListingRequest {
    let mut prefix = None;
    let mut page = None;
    let mut sort = None;
    let mut limit = None;

    // First occurrence wins.
    for (name, value) in form_urlencoded::parse(querystring.as_bytes()) {
        let slot = match name.as_ref() {
            "prefix" => &mut prefix,
            "page" => &mut page,
            "sort" => &mut sort,
            "limit" => &mut limit,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    let prefix = prefix.as_deref().map(decode_uri_component).unwrap_or_default();

    ListingRequest::new(
        &prefix,
        parse_leading_int(page.as_deref(), ListingRequest::DEFAULT_PAGE),
        SortOrder::from_query(sort.as_deref()),
        parse_leading_int(limit.as_deref(), ListingRequest::DEFAULT_LIMIT),
    )
}

/// Decode a percent-encoded URI component, replacing invalid UTF-8.
fn decode_uri_component(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// Parse the leading decimal digits of `value` as a positive integer.
///
/// Leading whitespace and a `+` sign are accepted and trailing garbage is
/// ignored (`"3abc"` is 3). Anything that does not start with digits, zero,
/// and negative numbers yield `default`. Overlong values saturate.
fn parse_leading_int(value: Option<&str>, default: usize) -> usize {
    let Some(raw) = value else {
        return default;
    };

    let raw = raw.trim_start();
    let (negative, unsigned) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];
    if negative || digits.is_empty() {
        return default;
    }

    let parsed = digits.bytes().fold(0usize, |acc, d| {
        acc.saturating_mul(10).saturating_add(usize::from(d - b'0'))
    });

    if parsed == 0 { default } else { parsed }
}
