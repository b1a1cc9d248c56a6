use crate::constants::{content, header};
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::Headers;
use crate::options::{ApiKey, ProxyOptions, ValidationError};
use crate::result::ProxyError;
use crate::routing::UpstreamHosts;
use crate::upstream::Upstream;
use hyper::body::Bytes;
use hyper::http::header::{HeaderMap, HeaderName, HeaderValue};
use hyper::http::{Request, Response, StatusCode, Uri};
use tracing::{debug, warn};

/// Forwards inbound requests to the upstream service.
///
/// Holds no per-request state; one instance serves every request and is
/// shared behind an `Arc`.
pub struct Proxy<U> {
    cors: Cors,
    api_key: ApiKey,
    hosts: UpstreamHosts,
    upstream: U,
}

impl<U: Upstream> Proxy<U> {
    pub fn new(options: ProxyOptions, upstream: U) -> Result<Self, ValidationError> {
        options.validate()?;
        let ProxyOptions {
            cors,
            api_key,
            upstream: hosts,
        } = options;

        Ok(Self {
            cors: Cors::new(cors)?,
            api_key,
            hosts,
            upstream,
        })
    }

    pub fn hosts(&self) -> &UpstreamHosts {
        &self.hosts
    }

    /// Handles one request.
    ///
    /// Preflights are answered locally with status 200, refused origins get a
    /// 403 without touching the upstream, requests carrying an `Upgrade`
    /// header go to the stream host untouched, and everything else is
    /// rewritten, forwarded and decorated with the CORS headers.
    #[tracing::instrument(
        name = "proxy",
        skip_all,
        fields(method = %request.method(), path = %request.uri().path())
    )]
    pub async fn handle(&self, request: Request<Bytes>) -> Result<Response<Bytes>, ProxyError> {
        let origin = header_str(request.headers(), header::ORIGIN);
        let context = RequestContext::new(request.method().as_str(), origin);
        let cors = self.cors.check(&context);

        if Cors::is_preflight(&context) {
            debug!(origin_allowed = cors.origin_allowed(), "answering preflight");
            return preflight_response(&cors.headers);
        }

        if !cors.origin_allowed() {
            warn!(origin = origin.unwrap_or_default(), "origin not allowed");
            return forbidden_response();
        }

        // An empty Upgrade value still counts as present.
        if request.headers().contains_key(header::UPGRADE) {
            return self.forward_upgrade(request).await;
        }

        self.forward(request, &cors.headers).await
    }

    async fn forward_upgrade(
        &self,
        request: Request<Bytes>,
    ) -> Result<Response<Bytes>, ProxyError> {
        debug!(upstream = self.hosts.stream(), "forwarding upgrade request");

        let (mut parts, body) = request.into_parts();
        parts.uri = parse_uri(&self.hosts.stream_url(&self.api_key))?;

        Ok(self.upstream.send(Request::from_parts(parts, body)).await?)
    }

    async fn forward(
        &self,
        request: Request<Bytes>,
        cors_headers: &Headers,
    ) -> Result<Response<Bytes>, ProxyError> {
        let path = request.uri().path();
        let base = self.hosts.base_for_path(path);
        let url = self
            .hosts
            .proxy_url(&self.api_key, path, request.uri().query());
        debug!(upstream = base, "forwarding request");

        let mut builder = Request::builder()
            .method(request.method().clone())
            .uri(parse_uri(&url)?)
            .header(header::CONTENT_TYPE, content::JSON)
            .header(header::PROXY_MARKER, content::PROXY_MARKER_VALUE);
        if let Some(map) = builder.headers_mut() {
            apply_headers(map, cors_headers);
        }
        let outbound = builder.body(request.into_body())?;

        let mut response = self.upstream.send(outbound).await?;
        debug!(status = response.status().as_u16(), "upstream responded");
        apply_headers(response.headers_mut(), cors_headers);

        Ok(response)
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn parse_uri(url: &str) -> Result<Uri, ProxyError> {
    url.parse::<Uri>()
        .map_err(|err| ProxyError::Request(err.into()))
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

fn preflight_response(headers: &Headers) -> Result<Response<Bytes>, ProxyError> {
    let mut builder = Response::builder().status(StatusCode::OK);
    if let Some(map) = builder.headers_mut() {
        apply_headers(map, headers);
    }
    Ok(builder.body(Bytes::new())?)
}

fn forbidden_response() -> Result<Response<Bytes>, ProxyError> {
    Ok(Response::builder()
        .status(StatusCode::FORBIDDEN)
        .header(header::CONTENT_TYPE, content::PLAIN_TEXT)
        .body(Bytes::from_static(content::FORBIDDEN_BODY.as_bytes()))?)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;
