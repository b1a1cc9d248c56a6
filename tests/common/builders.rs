#![allow(dead_code)]

use helius_rpc_proxy::{AllowedOrigins, Proxy, ProxyOptions, UpstreamHosts};
use hyper::body::Bytes;
use hyper::http::{Request, Response};

use super::upstream::MockUpstream;

pub const API_KEY: &str = "3f2c1a9e-7d4b-4c1e-9a2f-0b6d8e5c4a71";

#[derive(Default)]
pub struct ProxyBuilder {
    allow_origin: Option<String>,
    hosts: Option<UpstreamHosts>,
}

impl ProxyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_origin(mut self, value: impl Into<String>) -> Self {
        self.allow_origin = Some(value.into());
        self
    }

    pub fn hosts(mut self, hosts: UpstreamHosts) -> Self {
        self.hosts = Some(hosts);
        self
    }

    pub fn build(self, upstream: MockUpstream) -> Proxy<MockUpstream> {
        let mut options = ProxyOptions::new(API_KEY)
            .origin(AllowedOrigins::from_config(self.allow_origin.as_deref()));
        if let Some(hosts) = self.hosts {
            options = options.upstream(hosts);
        }
        Proxy::new(options, upstream).expect("valid proxy configuration")
    }
}

pub struct InboundRequestBuilder {
    method: String,
    uri: String,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl InboundRequestBuilder {
    pub fn new(method: &str, uri: &str) -> Self {
        Self {
            method: method.to_string(),
            uri: uri.to_string(),
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    pub fn origin(self, origin: &str) -> Self {
        self.header("Origin", origin)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body(mut self, body: &'static [u8]) -> Self {
        self.body = Bytes::from_static(body);
        self
    }

    pub fn build(self) -> Request<Bytes> {
        let mut builder = Request::builder()
            .method(self.method.as_str())
            .uri(self.uri.as_str());
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder.body(self.body).expect("valid inbound request")
    }

    pub async fn send(self, proxy: &Proxy<MockUpstream>) -> Response<Bytes> {
        proxy
            .handle(self.build())
            .await
            .expect("proxy should produce a response")
    }
}

pub fn proxy() -> ProxyBuilder {
    ProxyBuilder::new()
}

pub fn request(method: &str, uri: &str) -> InboundRequestBuilder {
    InboundRequestBuilder::new(method, uri)
}
