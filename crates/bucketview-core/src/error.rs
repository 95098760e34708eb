//! Error types for the browse pipeline.

/// Failure of a browse request.
///
/// Every variant is terminal for the current request and is rendered to the
/// caller as an HTML error body with status `502 Bad Gateway`.
#[derive(Debug, thiserror::Error)]
pub enum BrowseError {
    /// The object store could not be reached or the transfer failed.
    #[error("{0}")]
    Network(String),

    /// The store answered with something that is not a bucket listing.
    #[error("Unexpected XML format")]
    Parse,
}

/// Convenience result type for browse operations.
pub type BrowseResult<T> = Result<T, BrowseError>;
