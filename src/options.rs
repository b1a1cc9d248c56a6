use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::origin::AllowedOrigins;
use crate::routing::UpstreamHosts;
use crate::util::is_query_safe;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// CORS settings applied to every proxied response.
#[derive(Clone, Debug, Default)]
pub struct CorsOptions {
    pub origin: AllowedOrigins,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: AllowedOrigins) -> Self {
        self.origin = origin;
        self
    }

    pub fn methods(mut self, methods: AllowedMethods) -> Self {
        self.methods = methods;
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allowed_headers = headers;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.methods.is_empty() {
            return Err(ValidationError::MethodsListEmpty);
        }

        if let AllowedHeaders::List(values) = &self.allowed_headers
            && values.iter().any(|value| value == "*")
        {
            return Err(ValidationError::AllowedHeadersListCannotContainWildcard);
        }

        Ok(())
    }
}

/// The upstream credential.
///
/// `Debug` and `Display` never print the value.
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Everything the proxy needs to serve requests.
#[derive(Clone, Debug)]
pub struct ProxyOptions {
    pub cors: CorsOptions,
    pub api_key: ApiKey,
    pub upstream: UpstreamHosts,
}

impl ProxyOptions {
    pub fn new<K: Into<ApiKey>>(api_key: K) -> Self {
        Self {
            cors: CorsOptions::default(),
            api_key: api_key.into(),
            upstream: UpstreamHosts::default(),
        }
    }

    pub fn cors(mut self, cors: CorsOptions) -> Self {
        self.cors = cors;
        self
    }

    pub fn origin(mut self, origin: AllowedOrigins) -> Self {
        self.cors.origin = origin;
        self
    }

    pub fn upstream(mut self, upstream: UpstreamHosts) -> Self {
        self.upstream = upstream;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.cors.validate()?;

        let key = self.api_key.expose();
        if key.trim().is_empty() {
            return Err(ValidationError::MissingApiKey);
        }
        if !is_query_safe(key) {
            return Err(ValidationError::ApiKeyNotQuerySafe);
        }

        self.upstream.validate()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allowed methods list must contain at least one method")]
    MethodsListEmpty,
    #[error(
        "allowed headers list cannot contain '*'; use AllowedHeaders::any() for wildcard support"
    )]
    AllowedHeadersListCannotContainWildcard,
    #[error("upstream API key is missing")]
    MissingApiKey,
    #[error("upstream API key contains characters that cannot appear in a query string")]
    ApiKeyNotQuerySafe,
    #[error("upstream {name} URL '{value}' must be an absolute http or https URL without a query")]
    InvalidUpstreamUrl { name: &'static str, value: String },
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
