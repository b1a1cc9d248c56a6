use crate::headers::Headers;
use crate::origin::OriginDecision;
use crate::upstream::UpstreamError;
use thiserror::Error;

/// Headers and origin outcome computed for one request.
#[derive(Debug, Clone)]
pub struct CorsResult {
    pub headers: Headers,
    pub decision: OriginDecision,
}

impl CorsResult {
    pub fn origin_allowed(&self) -> bool {
        self.decision.is_allowed()
    }
}

/// Errors that end a proxied request without a response from the handler.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] UpstreamError),
    #[error("failed to build outbound request: {0}")]
    Request(#[from] hyper::http::Error),
}
