#![allow(dead_code)]

use async_trait::async_trait;
use helius_rpc_proxy::{Upstream, UpstreamError};
use hyper::body::Bytes;
use hyper::http::{Request, Response, StatusCode};
use std::sync::{Arc, Mutex};

/// Records every outbound request and answers with a canned response.
#[derive(Clone)]
pub struct MockUpstream {
    calls: Arc<Mutex<Vec<Request<Bytes>>>>,
    status: StatusCode,
    headers: Vec<(&'static str, &'static str)>,
    body: Bytes,
}

impl Default for MockUpstream {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            status: StatusCode::OK,
            headers: vec![("content-type", "application/json")],
            body: Bytes::from_static(br#"{"jsonrpc":"2.0","id":1,"result":"ok"}"#),
        }
    }
}

impl MockUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }

    pub fn body(mut self, body: &'static [u8]) -> Self {
        self.body = Bytes::from_static(body);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn take_calls(&self) -> Vec<Request<Bytes>> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    pub fn last_uri(&self) -> Option<String> {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|request| request.uri().to_string())
    }
}

#[async_trait]
impl Upstream for MockUpstream {
    async fn send(&self, request: Request<Bytes>) -> Result<Response<Bytes>, UpstreamError> {
        self.calls.lock().unwrap().push(request);

        let mut builder = Response::builder().status(self.status);
        for (name, value) in &self.headers {
            builder = builder.header(*name, *value);
        }
        Ok(builder.body(self.body.clone())?)
    }
}
