mod allowed_headers;
mod allowed_methods;
mod config;
pub mod constants;
mod context;
mod cors;
mod header_builder;
mod headers;
mod options;
mod origin;
mod proxy;
mod result;
mod routing;
mod server;
mod upstream;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, ProxyConfig};
pub use context::RequestContext;
pub use cors::Cors;
pub use headers::Headers;
pub use options::{ApiKey, CorsOptions, ProxyOptions, ValidationError};
pub use origin::{AllowedOrigins, OriginDecision, OriginPattern, PatternError};
pub use proxy::Proxy;
pub use result::{CorsResult, ProxyError};
pub use routing::{UpstreamHosts, build_upstream_url};
pub use server::{ProxyBody, ProxyService, serve};
pub use upstream::{HttpUpstream, Upstream, UpstreamError, should_forward_header};
