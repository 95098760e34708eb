//! The hyper service adapting plain HTTP to the edge handler.
//!
//! [`BrowserHttpService`] handles, in order:
//!
//! 1. Health check interception (`GET /_health`)
//! 2. Raw event invocation (`POST /_edge/invoke`, a viewer-request event as JSON)
//! 3. Everything else: path and query become an [`EdgeRequest`] for the handler
//!
//! A pass-through outcome is answered with `404 Not Found`, since no origin
//! sits behind the development server.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use bucketview_edge::{
    EdgeHandler, EdgeHeader, EdgeOutcome, EdgeRequest, EdgeResponse, ObjectStore,
    ViewerRequestEvent,
};
use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Incoming;
use hyper::ext::ReasonPhrase;
use hyper::service::Service;
use tracing::{debug, error, info};

use crate::body::BrowserBody;

/// Path answering liveness probes.
pub const HEALTH_PATH: &str = "/_health";

/// Path accepting a JSON viewer-request event and answering with the JSON outcome.
pub const INVOKE_PATH: &str = "/_edge/invoke";

/// Hyper service wrapping an [`EdgeHandler`].
#[derive(Debug)]
pub struct BrowserHttpService<S: ObjectStore> {
    handler: EdgeHandler<S>,
}

impl<S: ObjectStore> BrowserHttpService<S> {
    /// Create a service around `handler`.
    #[must_use]
    pub fn new(handler: EdgeHandler<S>) -> Self {
        Self { handler }
    }
}

impl<S: ObjectStore> Clone for BrowserHttpService<S> {
    fn clone(&self) -> Self {
        Self {
            handler: self.handler.clone(),
        }
    }
}

impl<S: ObjectStore> Service<http::Request<Incoming>> for BrowserHttpService<S> {
    type Response = http::Response<BrowserBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let handler = self.handler.clone();

        Box::pin(async move {
            let method = req.method().clone();
            let uri = req.uri().clone();
            debug!(%method, %uri, "processing request");

            let response = match process_request(req, &handler).await {
                Ok(response) => response,
                Err(err) => {
                    error!(%method, %uri, error = %err, "local handler error");
                    plain_response(
                        http::StatusCode::INTERNAL_SERVER_ERROR,
                        &format!("Local handler error:\n{err:#}"),
                    )
                }
            };

            info!(%method, %uri, status = response.status().as_u16(), "handled request");
            Ok(response)
        })
    }
}

/// Run one request through the handler.
async fn process_request<S: ObjectStore>(
    req: http::Request<Incoming>,
    handler: &EdgeHandler<S>,
) -> anyhow::Result<http::Response<BrowserBody>> {
    let is_health_check = req.method() == http::Method::GET && req.uri().path() == HEALTH_PATH;
    let is_invoke = req.method() == http::Method::POST && req.uri().path() == INVOKE_PATH;

    if is_health_check {
        return Ok(health_check_response());
    }

    if is_invoke {
        let body = req.into_body().collect().await?.to_bytes();
        return invoke_event(handler, &body).await;
    }

    let request = edge_request_from(&req);
    match handler.handle(request).await {
        EdgeOutcome::Respond(response) => to_http_response(&response),
        EdgeOutcome::PassThrough(request) => {
            debug!(uri = %request.uri, "no origin for pass-through request");
            Ok(plain_response(http::StatusCode::NOT_FOUND, "Not Found"))
        }
    }
}

/// Handle a raw viewer-request event and answer with the serialized outcome.
async fn invoke_event<S: ObjectStore>(
    handler: &EdgeHandler<S>,
    body: &Bytes,
) -> anyhow::Result<http::Response<BrowserBody>> {
    let event: ViewerRequestEvent = serde_json::from_slice(body)?;
    let outcome = handler.handle_event(event).await?;
    let json = serde_json::to_string(&outcome)?;

    Ok(http::Response::builder()
        .status(http::StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(BrowserBody::from_string(json))?)
}

/// Build the edge request descriptor for a plain HTTP request.
///
/// The path is passed on still percent-encoded, as a CDN would.
fn edge_request_from<B>(req: &http::Request<B>) -> EdgeRequest {
    let mut request = EdgeRequest::new(req.uri().path(), req.uri().query().unwrap_or(""));
    request.method = Some(req.method().as_str().to_owned());

    for (name, value) in req.headers() {
        let Ok(value) = value.to_str() else {
            continue;
        };
        request
            .headers
            .entry(name.as_str().to_owned())
            .or_default()
            .push(EdgeHeader {
                key: name.as_str().to_owned(),
                value: value.to_owned(),
            });
    }

    request
}

/// Write an edge response back verbatim: status, reason phrase, first value of
/// each header, and body.
fn to_http_response(response: &EdgeResponse) -> anyhow::Result<http::Response<BrowserBody>> {
    let mut builder =
        http::Response::builder().status(http::StatusCode::from_u16(response.status)?);
    for (name, value) in response.single_value_headers() {
        builder = builder.header(name, value);
    }

    let mut http_response = builder.body(BrowserBody::from_string(response.body.clone()))?;
    if let Ok(reason) = ReasonPhrase::try_from(response.status_description.clone()) {
        http_response.extensions_mut().insert(reason);
    }

    Ok(http_response)
}

/// Produce a health check response.
fn health_check_response() -> http::Response<BrowserBody> {
    http::Response::builder()
        .status(http::StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(BrowserBody::from_string(
            r#"{"status":"running","service":"bucketview"}"#,
        ))
        .expect("static health response should be valid")
}

/// Produce a plain-text response.
fn plain_response(status: http::StatusCode, text: &str) -> http::Response<BrowserBody> {
    let mut response = http::Response::new(BrowserBody::from_string(text.to_owned()));
    *response.status_mut() = status;
    response.headers_mut().insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static("text/plain"),
    );
    response
}
