//! Edge request and response records.
//!
//! The serde representation follows the CloudFront request/response shape:
//! headers are keyed by lowercase name and hold a list of `{ key, value }`
//! pairs, and the status code travels as a string.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One header value with its original-case name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeHeader {
    /// Header name as it should appear on the wire.
    pub key: String,
    /// Header value.
    pub value: String,
}

/// Headers keyed by lowercase name.
pub type EdgeHeaders = BTreeMap<String, Vec<EdgeHeader>>;

/// Minimal inbound request descriptor.
///
/// Fields not interpreted by the handler (client IP, origin configuration, ...)
/// are kept in `extra` so a pass-through returns the request unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRequest {
    /// Request path, e.g. `/browser`.
    pub uri: String,
    /// Raw query string without the leading `?`.
    #[serde(default)]
    pub querystring: String,
    /// HTTP method, when the host provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Request headers.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: EdgeHeaders,
    /// Uninterpreted fields, carried verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EdgeRequest {
    /// Request for `uri` with the given raw query string.
    #[must_use]
    pub fn new(uri: impl Into<String>, querystring: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            querystring: querystring.into(),
            method: None,
            headers: EdgeHeaders::new(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Response produced once per handled request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeResponse {
    /// HTTP status code.
    #[serde(with = "status_string")]
    pub status: u16,
    /// Reason phrase, e.g. `Redirect` or `Bad Gateway`.
    pub status_description: String,
    /// Response headers, one value each.
    #[serde(default)]
    pub headers: EdgeHeaders,
    /// Response body; empty for redirects.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
}

impl EdgeResponse {
    /// Response with no headers and an empty body.
    #[must_use]
    pub fn new(status: u16, status_description: impl Into<String>) -> Self {
        Self {
            status,
            status_description: status_description.into(),
            headers: EdgeHeaders::new(),
            body: String::new(),
        }
    }

    /// Set `name` to a single `value`, replacing any previous values.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(
            name.to_ascii_lowercase(),
            vec![EdgeHeader {
                key: name.to_owned(),
                value: value.into(),
            }],
        );
        self
    }

    /// Replace the body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// First value of header `name`, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(|h| h.value.as_str())
    }

    /// Flatten the header map to one `(name, value)` pair per header,
    /// taking the first value of each.
    #[must_use]
    pub fn single_value_headers(&self) -> Vec<(&str, &str)> {
        self.headers
            .values()
            .filter_map(|values| values.first())
            .map(|h| (h.key.as_str(), h.value.as_str()))
            .collect()
    }
}

/// Result of handling one request.
///
/// Serializes untagged, so a pass-through is the request record itself, which
/// the hosting platform reads as "continue normal handling".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EdgeOutcome {
    /// A response generated at the edge.
    Respond(EdgeResponse),
    /// Defer to the platform's default behaviour for this request.
    PassThrough(EdgeRequest),
}

impl EdgeOutcome {
    /// The generated response, if any.
    #[must_use]
    pub fn response(&self) -> Option<&EdgeResponse> {
        match self {
            Self::Respond(response) => Some(response),
            Self::PassThrough(_) => None,
        }
    }
}

mod status_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(status: &u16, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&status.to_string())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
