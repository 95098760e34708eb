//! Tolerant extraction of folders and keys from a bucket listing document.
//!
//! This is deliberately not an XML parser. The store's delimiter listing is a
//! flat, stable document, so the scanner only checks for the
//! `<ListBucketResult` root marker and then collects the text between literal
//! `<Prefix>`/`</Prefix>` and `<Key>`/`</Key>` pairs. It assumes:
//!
//! - the tags carry no attributes (`<Key id="1">` is not matched),
//! - the tags are never nested inside each other,
//! - an element's text sits on a single line.
//!
//! Text is returned exactly as it appears in the document; entity references
//! such as `&amp;` are not unescaped.

use std::sync::LazyLock;

use bucketview_core::{BrowseError, BrowseResult};
use regex::Regex;
use tracing::debug;

/// Literal that marks a list-bucket response.
const LISTING_ROOT_MARKER: &str = "<ListBucketResult";

static PREFIX_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<Prefix>(.*?)</Prefix>").expect("static regex should compile"));

static KEY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<Key>(.*?)</Key>").expect("static regex should compile"));

/// Folder prefixes and object keys found in one listing document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedListing {
    /// Values of `<Prefix>` elements, i.e. common prefixes.
    pub folders: Vec<String>,
    /// Values of `<Key>` elements, i.e. object keys.
    pub files: Vec<String>,
}

/// Extract folders and files from `document`, dropping entries equal to `prefix`.
///
/// The requested prefix is echoed by the store in the top-level `<Prefix>`
/// element and, for folder marker objects, as a `<Key>`; neither is an entry
/// of its own listing.
///
/// # Errors
///
/// Returns [`BrowseError::Parse`] when the document lacks the
/// `<ListBucketResult` marker.
///
/// # Examples
///
/// ```
/// use bucketview_listing::parse_listing;
///
/// let doc = "<ListBucketResult><Prefix>a/</Prefix><Key>a/x.txt</Key>\
///            <CommonPrefixes><Prefix>a/b/</Prefix></CommonPrefixes></ListBucketResult>";
/// let listing = parse_listing(doc, "a/").unwrap();
/// assert_eq!(listing.folders, vec!["a/b/"]);
/// assert_eq!(listing.files, vec!["a/x.txt"]);
/// ```
pub fn parse_listing(document: &str, prefix: &str) -> BrowseResult<ParsedListing> {
    if !document.contains(LISTING_ROOT_MARKER) {
        return Err(BrowseError::Parse);
    }

    let listing = ParsedListing {
        folders: scan_tag(&PREFIX_TAG, document, prefix),
        files: scan_tag(&KEY_TAG, document, prefix),
    };

    debug!(
        prefix,
        folders = listing.folders.len(),
        files = listing.files.len(),
        "parsed bucket listing"
    );

    Ok(listing)
}

/// Collect the inner text of every match of `tag`, skipping self-references.
fn scan_tag(tag: &Regex, document: &str, prefix: &str) -> Vec<String> {
    tag.captures_iter(document)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|value| *value != prefix)
        .map(str::to_owned)
        .collect()
}
