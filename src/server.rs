use std::convert::Infallible;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::Arc;

use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::http::header::{CONTENT_TYPE, HeaderValue};
use hyper::http::StatusCode;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{debug, error, warn};

use crate::constants::content;
use crate::proxy::Proxy;
use crate::upstream::Upstream;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type ProxyBody = Full<Bytes>;

/// Hyper service that buffers the inbound body and hands the request to a [`Proxy`].
pub struct ProxyService<U> {
    proxy: Arc<Proxy<U>>,
}

impl<U> ProxyService<U> {
    pub fn new(proxy: Arc<Proxy<U>>) -> Self {
        Self { proxy }
    }
}

impl<U> Clone for ProxyService<U> {
    fn clone(&self) -> Self {
        Self {
            proxy: Arc::clone(&self.proxy),
        }
    }
}

impl<U> Service<Request<Incoming>> for ProxyService<U>
where
    U: Upstream + 'static,
{
    type Response = Response<ProxyBody>;
    type Error = Infallible;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let proxy = Arc::clone(&self.proxy);

        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let body = match body.collect().await {
                Ok(collected) => collected.to_bytes(),
                Err(err) => {
                    warn!(error = %err, "failed to read request body");
                    return Ok(plain_response(StatusCode::BAD_REQUEST, "Bad Request"));
                }
            };

            let response = match proxy.handle(Request::from_parts(parts, body)).await {
                Ok(response) => response.map(Full::new),
                Err(err) => {
                    error!(error = %err, "proxy request failed");
                    plain_response(StatusCode::BAD_GATEWAY, "Bad Gateway")
                }
            };

            Ok(response)
        })
    }
}

fn plain_response(status: StatusCode, message: &'static str) -> Response<ProxyBody> {
    let mut response = Response::new(Full::new(Bytes::from_static(message.as_bytes())));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content::PLAIN_TEXT));
    response
}

/// Accepts connections until the listener fails, serving each on its own task.
pub async fn serve<U>(listener: TcpListener, proxy: Arc<Proxy<U>>) -> io::Result<()>
where
    U: Upstream + 'static,
{
    loop {
        let (stream, remote) = listener.accept().await?;
        let service = ProxyService::new(Arc::clone(&proxy));
        let io = TokioIo::new(stream);

        tokio::spawn(async move {
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                debug!(%remote, error = %err, "connection closed with error");
            }
        });
    }
}
