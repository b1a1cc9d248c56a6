use crate::constants::upstream;
use crate::options::{ApiKey, ValidationError};
use hyper::http::Uri;

/// Base URLs of the upstream service, without trailing slashes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpstreamHosts {
    rpc: String,
    api: String,
    stream: String,
}

impl Default for UpstreamHosts {
    fn default() -> Self {
        Self::new(upstream::RPC_URL, upstream::API_URL, upstream::STREAM_URL)
    }
}

impl UpstreamHosts {
    pub fn new<R, A, S>(rpc: R, api: A, stream: S) -> Self
    where
        R: Into<String>,
        A: Into<String>,
        S: Into<String>,
    {
        Self {
            rpc: trim_base(rpc.into()),
            api: trim_base(api.into()),
            stream: trim_base(stream.into()),
        }
    }

    pub fn rpc(&self) -> &str {
        &self.rpc
    }

    pub fn api(&self) -> &str {
        &self.api
    }

    pub fn stream(&self) -> &str {
        &self.stream
    }

    /// The root path goes to the RPC host, everything else to the API host.
    pub fn base_for_path(&self, path: &str) -> &str {
        if path == "/" { &self.rpc } else { &self.api }
    }

    /// Builds `<base><path>?api-key=<key>[&<query>]` for the standard proxy path.
    pub fn proxy_url(&self, api_key: &ApiKey, path: &str, query: Option<&str>) -> String {
        build_upstream_url(self.base_for_path(path), api_key, path, query)
    }

    /// Builds `<stream>/?api-key=<key>`; the inbound path and query are not carried over.
    pub fn stream_url(&self, api_key: &ApiKey) -> String {
        build_upstream_url(&self.stream, api_key, "/", None)
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        validate_base("rpc", &self.rpc)?;
        validate_base("api", &self.api)?;
        validate_base("stream", &self.stream)
    }
}

pub fn build_upstream_url(base: &str, api_key: &ApiKey, path: &str, query: Option<&str>) -> String {
    let mut url = String::with_capacity(base.len() + path.len() + 64);
    url.push_str(base);
    url.push_str(path);
    url.push('?');
    url.push_str(upstream::API_KEY_PARAM);
    url.push('=');
    url.push_str(api_key.expose());
    if let Some(query) = query
        && !query.is_empty()
    {
        url.push('&');
        url.push_str(query);
    }
    url
}

fn trim_base(mut value: String) -> String {
    let trimmed_len = value.trim_end_matches('/').len();
    value.truncate(trimmed_len);
    value
}

fn validate_base(name: &'static str, value: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::InvalidUpstreamUrl {
        name,
        value: value.to_string(),
    };

    let uri: Uri = value.parse().map_err(|_| invalid())?;
    let scheme_ok = matches!(uri.scheme_str(), Some("http") | Some("https"));
    if !scheme_ok || uri.authority().is_none() || uri.query().is_some() {
        return Err(invalid());
    }

    Ok(())
}

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;
