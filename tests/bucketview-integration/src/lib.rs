//! End-to-end tests for the Bucketview development server.
//!
//! Each test starts an in-process mock bucket and a development server on
//! ephemeral loopback ports, then talks to the server over HTTP. No external
//! services are needed:
//!
//! ```text
//! cargo test -p bucketview-integration
//! ```

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Once};

use bucketview_core::BrowserConfig;
use bucketview_edge::{EdgeHandler, HttpObjectStore};
use bucketview_server::{BrowserHttpService, serve};
use bytes::Bytes;
use http_body_util::Full;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as HttpConnBuilder;
use tokio::net::TcpListener;

mod test_browse;
mod test_errors;
mod test_redirects;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Keys stored in the mock bucket used by most tests.
pub const SAMPLE_KEYS: &[&str] = &[
    "README.md",
    "camera/",
    "camera/index.html",
    "camera/images/2024/a.jpg",
    "camera/images/2024/b.jpg",
    "gnss/rinex/site1.rnx",
    "gnss/rinex/site2.rnx",
    "gnss/sites.csv",
];

/// Render a delimiter listing of `keys` under `prefix`, shaped like the
/// store's `ListBucketResult`.
#[must_use]
pub fn delimiter_listing(keys: &[String], prefix: &str) -> String {
    let mut contents = String::new();
    let mut common: Vec<String> = Vec::new();

    for key in keys {
        let Some(rest) = key.strip_prefix(prefix) else {
            continue;
        };
        match rest.find('/') {
            Some(pos) => {
                let folder = format!("{prefix}{}", &rest[..=pos]);
                if !common.contains(&folder) {
                    common.push(folder);
                }
            }
            None => contents.push_str(&format!(
                "<Contents><Key>{key}</Key><Size>1</Size></Contents>"
            )),
        }
    }

    let prefixes: String = common
        .iter()
        .map(|p| format!("<CommonPrefixes><Prefix>{p}</Prefix></CommonPrefixes>"))
        .collect();

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <ListBucketResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
         <Name>mock</Name><Prefix>{prefix}</Prefix><Marker></Marker><MaxKeys>1000</MaxKeys>\
         <Delimiter>/</Delimiter><IsTruncated>false</IsTruncated>\
         {contents}{prefixes}</ListBucketResult>"
    )
}

/// Start a mock bucket answering every GET with `respond(prefix)`.
///
/// Returns its base URL.
pub async fn spawn_mock_store<F>(respond: F) -> String
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    let respond = Arc::new(respond);
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock store");
    let addr = listener.local_addr().expect("mock store address");

    tokio::spawn(async move {
        let http = HttpConnBuilder::new(TokioExecutor::new());
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                continue;
            };
            let respond = Arc::clone(&respond);
            let svc = service_fn(move |req: http::Request<hyper::body::Incoming>| {
                let prefix = form_urlencoded::parse(req.uri().query().unwrap_or("").as_bytes())
                    .find(|(name, _)| name == "prefix")
                    .map(|(_, value)| value.into_owned())
                    .unwrap_or_default();
                let body = (*respond)(&prefix);
                async move {
                    Ok::<_, Infallible>(
                        http::Response::builder()
                            .header("Content-Type", "application/xml")
                            .body(Full::new(Bytes::from(body)))
                            .expect("valid mock response"),
                    )
                }
            });
            let conn = http.serve_connection(TokioIo::new(stream), svc).into_owned();
            tokio::spawn(async move {
                let _ = conn.await;
            });
        }
    });

    format!("http://{addr}")
}

/// Start a mock bucket holding `keys`.
pub async fn spawn_bucket(keys: &[&str]) -> String {
    let keys: Vec<String> = keys.iter().map(|k| (*k).to_owned()).collect();
    spawn_mock_store(move |prefix| delimiter_listing(&keys, prefix)).await
}

/// A base URL on loopback where nothing is listening.
#[must_use]
pub fn closed_store_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let port = listener.local_addr().expect("probe address").port();
    format!("http://127.0.0.1:{port}")
}

/// Start a development server browsing the bucket at `store_base_url`.
///
/// Returns the server address.
pub async fn spawn_server(store_base_url: &str) -> SocketAddr {
    init_tracing();

    let config = BrowserConfig::builder()
        .store_base_url(store_base_url.to_owned())
        .build();
    let store = HttpObjectStore::new(&config).expect("object store client");
    let service = BrowserHttpService::new(EdgeHandler::new(store, config));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind server");
    let addr = listener.local_addr().expect("server address");

    tokio::spawn(async move {
        let _ = serve(listener, service, std::future::pending()).await;
    });

    addr
}

/// HTTP client that reports redirects instead of following them.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("http client")
}
