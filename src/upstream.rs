use async_trait::async_trait;
use hyper::body::Bytes;
use hyper::http::header::{HeaderMap, HeaderName};
use hyper::http::{Request, Response};
use thiserror::Error;

/// Sends one request to the upstream service and returns its full response.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn send(&self, request: Request<Bytes>) -> Result<Response<Bytes>, UpstreamError>;
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid upstream response: {0}")]
    Response(#[from] hyper::http::Error),
}

/// Connection-scoped headers, lowercase as `HeaderName::as_str` yields them.
const HOP_BY_HOP: &[&str] = &[
    "host",
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
];

pub fn should_forward_header(name: &HeaderName) -> bool {
    !HOP_BY_HOP.contains(&name.as_str())
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    let names: Vec<HeaderName> = headers
        .keys()
        .filter(|name| !should_forward_header(name))
        .cloned()
        .collect();
    for name in names {
        headers.remove(name);
    }
}

/// [`Upstream`] backed by a shared `reqwest` client.
///
/// Transport errors are stripped of their URL, which carries the API key.
#[derive(Clone, Debug)]
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn send(&self, request: Request<Bytes>) -> Result<Response<Bytes>, UpstreamError> {
        let (mut parts, body) = request.into_parts();
        strip_hop_by_hop(&mut parts.headers);

        let mut outbound = self
            .client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers);
        if !body.is_empty() {
            outbound = outbound.body(body);
        }

        let response = outbound.send().await.map_err(reqwest::Error::without_url)?;
        let status = response.status();
        let mut headers = response.headers().clone();
        strip_hop_by_hop(&mut headers);
        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)?;

        let mut builder = Response::builder().status(status);
        if let Some(map) = builder.headers_mut() {
            *map = headers;
        }
        Ok(builder.body(body)?)
    }
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod upstream_test;
