//! Merge, sort and paginate a parsed listing.

use std::cmp::Ordering;

use bucketview_core::{ListingEntry, ListingRequest, SortOrder};
use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};

use crate::parser::ParsedListing;

/// One page of a listing, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// Entries on the requested page, in display order.
    pub items: Vec<ListingEntry>,
    /// Number of entries across all pages.
    pub total_entries: usize,
    /// `ceil(total_entries / limit)`; zero for an empty listing.
    pub total_pages: usize,
    /// Folder above the listed prefix, `None` at the bucket root or one level below it.
    pub parent_prefix: Option<String>,
}

/// Build the page described by `request` from a parsed listing.
///
/// Folders come before files in the merged sequence, which is then sorted by
/// name. A page beyond the last one is simply empty.
///
/// # Examples
///
/// ```
/// use bucketview_core::{ListingRequest, SortOrder};
/// use bucketview_listing::{ParsedListing, present};
///
/// let listing = ParsedListing {
///     folders: vec!["a/b/".into()],
///     files: vec!["a/c.txt".into(), "a/a.txt".into()],
/// };
/// let page = present(&ListingRequest::new("a/", 1, SortOrder::Asc, 2), listing);
/// assert_eq!(page.total_pages, 2);
/// assert_eq!(page.items[0].name, "a/a.txt");
/// assert_eq!(page.parent_prefix, None);
/// ```
#[must_use]
pub fn present(request: &ListingRequest, listing: ParsedListing) -> ListingPage {
    let mut entries: Vec<ListingEntry> = listing
        .folders
        .into_iter()
        .map(ListingEntry::folder)
        .chain(listing.files.into_iter().map(ListingEntry::file))
        .collect();

    let collator = root_collator();
    entries.sort_by(|a, b| match request.sort {
        SortOrder::Asc => locale_compare(&collator, &a.name, &b.name),
        SortOrder::Desc => locale_compare(&collator, &b.name, &a.name),
    });

    let total_entries = entries.len();
    let limit = request.limit.max(1);
    let total_pages = total_entries.div_ceil(limit);

    let start = request.page.saturating_sub(1).saturating_mul(limit);
    let items = entries.into_iter().skip(start).take(limit).collect();

    ListingPage {
        items,
        total_entries,
        total_pages,
        parent_prefix: parent_prefix(&request.prefix),
    }
}

/// Folder containing `prefix`, with a trailing slash.
///
/// Returns `None` when the parent would be the bucket root.
///
/// # Examples
///
/// ```
/// use bucketview_listing::parent_prefix;
///
/// assert_eq!(parent_prefix("a/b/").as_deref(), Some("a/"));
/// assert_eq!(parent_prefix("a/"), None);
/// assert_eq!(parent_prefix(""), None);
/// ```
#[must_use]
pub fn parent_prefix(prefix: &str) -> Option<String> {
    let trimmed = prefix.strip_suffix('/').unwrap_or(prefix);
    let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

    match segments.split_last() {
        Some((_, rest)) if !rest.is_empty() => Some(format!("{}/", rest.join("/"))),
        _ => None,
    }
}

/// Collator for the root locale with default options.
///
/// Punctuation is non-ignorable and lowercase sorts before uppercase, as in
/// `String.prototype.localeCompare` without a locale argument.
fn root_collator() -> CollatorBorrowed<'static> {
    Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
        .expect("root collation data should be compiled in")
}

/// Locale-aware name ordering.
///
/// Names the collator considers equal fall back to a code point comparison,
/// so the order is total over distinct strings and reversing the comparison
/// exactly reverses a sorted listing.
fn locale_compare(collator: &CollatorBorrowed<'_>, a: &str, b: &str) -> Ordering {
    collator.compare(a, b).then_with(|| a.cmp(b))
}
