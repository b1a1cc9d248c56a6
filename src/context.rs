/// The parts of an inbound request the CORS policy looks at.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    /// The `Origin` header; empty when the request carried none.
    pub origin: &'a str,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self {
            method,
            origin: origin.unwrap_or_default(),
        }
    }

    pub fn origin(&self) -> Option<&'a str> {
        if self.origin.is_empty() {
            None
        } else {
            Some(self.origin)
        }
    }
}
