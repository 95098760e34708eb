//! Per-request listing types.

use std::fmt;

/// Listing order by entry name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending (the default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Interpret a `sort` query value. Anything but an explicit `desc` is ascending.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// Query-string form of this order.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// The opposite order, used by the sort toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A browse request after query parsing and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    /// Folder being listed, without leading slash. Empty for the bucket root.
    pub prefix: String,
    /// One-based page index.
    pub page: usize,
    /// Sort order.
    pub sort: SortOrder,
    /// Entries per page.
    pub limit: usize,
}

impl ListingRequest {
    /// Page shown when none is requested.
    pub const DEFAULT_PAGE: usize = 1;
    /// Page size used when none is requested.
    pub const DEFAULT_LIMIT: usize = 25;

    /// Build a request, stripping leading slashes from `prefix`.
    ///
    /// A zero `page` or `limit` falls back to the default.
    #[must_use]
    pub fn new(prefix: &str, page: usize, sort: SortOrder, limit: usize) -> Self {
        Self {
            prefix: prefix.trim_start_matches('/').to_owned(),
            page: if page == 0 { Self::DEFAULT_PAGE } else { page },
            sort,
            limit: if limit == 0 { Self::DEFAULT_LIMIT } else { limit },
        }
    }
}

impl Default for ListingRequest {
    fn default() -> Self {
        Self::new("", Self::DEFAULT_PAGE, SortOrder::Asc, Self::DEFAULT_LIMIT)
    }
}

/// Whether a listing entry is a virtual folder or a stored object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A common prefix.
    Folder,
    /// An object key.
    File,
}

impl EntryKind {
    /// Icon shown next to the entry name.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Folder => "📁",
            Self::File => "📄",
        }
    }
}

/// One row of a listing: a full key or prefix as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Full key or prefix path.
    pub name: String,
    /// Folder or file.
    pub kind: EntryKind,
}

impl ListingEntry {
    /// A folder entry.
    #[must_use]
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Folder,
        }
    }

    /// A file entry.
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }
}
