//! Errors raised outside the browse pipeline.

/// Failure to accept an edge invocation at all.
///
/// Browse failures are not represented here: they become `502` responses.
#[derive(Debug, thiserror::Error)]
pub enum EdgeError {
    /// The viewer-request event carried no request record.
    #[error("invalid viewer-request event: {0}")]
    InvalidEvent(String),

    /// The outbound HTTP client could not be constructed.
    #[error("failed to build object store client: {0}")]
    Client(#[from] reqwest::Error),
}
