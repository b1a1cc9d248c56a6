use crate::constants::method;

/// Configuration for the `Access-Control-Allow-Methods` response header.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods(Vec<String>);

impl AllowedMethods {
    /// Construct an explicit list of allowed methods, dropping case-insensitive duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !deduped
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&value))
            {
                deduped.push(value);
            }
        }
        Self(deduped)
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|value| value.trim().is_empty())
    }

    /// Return the header value representation, if any.
    pub fn header_value(&self) -> Option<String> {
        let entries = self
            .0
            .iter()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .collect::<Vec<_>>();

        if entries.is_empty() {
            None
        } else {
            Some(entries.join(", "))
        }
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::HEAD,
            method::POST,
            method::PUT,
            method::OPTIONS,
        ])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
