//! HTTP client that forwards gateway requests to a backend service and
//! relays the response.

use crate::config::Route;
use crate::error::ConfigError;
use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Request, Response};
use reqwest::Url;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ForwardError {
    #[error("reading request body: {0}")]
    RequestBody(#[source] axum::Error),
    #[error("backend request failed: {0}")]
    Send(#[source] reqwest::Error),
    #[error("reading backend response: {0}")]
    ResponseBody(#[source] reqwest::Error),
    #[error("building response: {0}")]
    Build(#[source] axum::http::Error),
}

const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Headers that describe the connection rather than the message, plus
/// Host and Content-Length, which the outgoing side recomputes.
fn is_connection_header(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(name) || *name == header::HOST || *name == header::CONTENT_LENGTH
}

fn end_to_end(headers: &HeaderMap) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
    headers.iter().filter(|(name, _)| !is_connection_header(name))
}

/// Pooled forwarding client; connections to each backend are reused.
#[derive(Clone)]
pub struct ServiceClient {
    client: reqwest::Client,
    max_body_bytes: usize,
}

impl ServiceClient {
    pub fn new(timeout_secs: u64, max_body_bytes: usize) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .tcp_keepalive(Duration::from_secs(30))
            .pool_idle_timeout(Duration::from_secs(90))
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(Self { client, max_body_bytes })
    }

    /// Forwards `request` to `target` on `route`'s backend with its method,
    /// headers and body, and returns the backend's status, headers and body.
    pub async fn forward_request(
        &self,
        route: &Route,
        target: Url,
        request: Request<Body>,
        client_addr: Option<SocketAddr>,
    ) -> Result<Response<Body>, ForwardError> {
        let (parts, body) = request.into_parts();
        let body_bytes = axum::body::to_bytes(body, self.max_body_bytes)
            .await
            .map_err(ForwardError::RequestBody)?;

        let mut outbound = HeaderMap::new();
        for (name, value) in end_to_end(&parts.headers) {
            outbound.append(name.clone(), value.clone());
        }
        if let Some(addr) = client_addr {
            append_forwarded_for(&mut outbound, addr);
        }

        tracing::debug!(service = route.service, method = %parts.method, target = %target, "forwarding");
        let upstream = self
            .client
            .request(parts.method, target)
            .headers(outbound)
            .body(body_bytes)
            .send()
            .await
            .map_err(ForwardError::Send)?;

        let mut response = Response::builder().status(upstream.status());
        for (name, value) in end_to_end(upstream.headers()) {
            response = response.header(name, value);
        }
        let bytes = upstream.bytes().await.map_err(ForwardError::ResponseBody)?;
        response.body(Body::from(bytes)).map_err(ForwardError::Build)
    }
}

/// Appends the caller to any `X-Forwarded-For` chain it already sent.
fn append_forwarded_for(headers: &mut HeaderMap, addr: SocketAddr) {
    let ip = addr.ip().to_string();
    let chain = match headers.get(&X_FORWARDED_FOR).and_then(|v| v.to_str().ok()) {
        Some(prior) if !prior.is_empty() => format!("{}, {}", prior, ip),
        _ => ip,
    };
    if let Ok(value) = HeaderValue::from_str(&chain) {
        headers.insert(X_FORWARDED_FOR, value);
    }
}
