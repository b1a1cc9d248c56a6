use crate::constants::method;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::result::CorsResult;

/// CORS policy engine that evaluates requests using [`CorsOptions`].
#[derive(Debug, Clone)]
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Computes the CORS header set for `request` and whether its origin may
    /// proceed. The header set is produced even when the origin is refused.
    pub fn check(&self, request: &RequestContext<'_>) -> CorsResult {
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();

        headers.extend(builder.build_methods_header());
        headers.extend(builder.build_allowed_headers());

        let (origin_headers, decision) = builder.build_origin_headers(request);
        headers.extend(origin_headers);

        CorsResult {
            headers: headers.into_headers(),
            decision,
        }
    }

    pub fn is_preflight(request: &RequestContext<'_>) -> bool {
        request.method.eq_ignore_ascii_case(method::OPTIONS)
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
