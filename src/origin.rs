use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use tracing::warn;

const MAX_PATTERN_LENGTH: usize = 50_000;
const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Outcome of matching a request origin against [`AllowedOrigins`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Wildcard policy: every caller is allowed and `*` is emitted.
    Any,
    /// The request origin matched a pattern and is echoed back verbatim.
    Mirror(String),
    /// Restricted policy and the origin did not match, or was absent.
    Disallow,
}

impl OriginDecision {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, OriginDecision::Disallow)
    }
}

#[derive(Debug)]
pub enum PatternError {
    Build(Box<BuildError>),
    TooLong { length: usize, max: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Build(_) => write!(f, "failed to compile origin pattern"),
            PatternError::TooLong { length, max } => write!(
                f,
                "origin pattern length {} exceeds maximum allowed {}",
                length, max
            ),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Build(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

/// A compiled origin glob.
///
/// `*` matches any run of characters (including none); every other character
/// matches itself exactly, case included. The whole origin has to match, so
/// `https://app.example` does not accept `https://app.example.evil`.
#[derive(Clone, Debug)]
pub struct OriginPattern {
    source: String,
    regex: Regex,
}

impl OriginPattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let regex = Regex::new(&glob_to_regex(pattern))
            .map_err(|err| PatternError::Build(Box::new(err)))?;

        Ok(Self {
            source: pattern.to_owned(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, origin: &str) -> bool {
        self.regex.is_match(origin.as_bytes())
    }
}

fn glob_to_regex(pattern: &str) -> String {
    let body = pattern
        .split('*')
        .map(regex_syntax::escape)
        .collect::<Vec<_>>()
        .join(".*");
    format!("(?s:^{body}$)")
}

/// Which origins may call through the proxy.
#[derive(Clone, Debug, Default)]
pub enum AllowedOrigins {
    #[default]
    Any,
    List(Vec<OriginPattern>),
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    /// Compiles every pattern, failing on the first one that does not compile.
    pub fn list<I, S>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        patterns
            .into_iter()
            .map(|pattern| OriginPattern::compile(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::List)
    }

    /// Parses the comma-separated `CORS_ALLOW_ORIGIN` form.
    ///
    /// Entries are trimmed and blank entries dropped. `None`, an empty string,
    /// or a value made only of separators yields [`AllowedOrigins::Any`].
    /// A pattern that fails to compile is logged and skipped, so it never
    /// matches anything.
    pub fn from_config(raw: Option<&str>) -> Self {
        let entries = raw
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        if entries.is_empty() {
            return Self::Any;
        }

        let patterns = entries
            .into_iter()
            .filter_map(|entry| match OriginPattern::compile(entry) {
                Ok(pattern) => Some(pattern),
                Err(err) => {
                    warn!(error = %err, "skipping origin pattern that does not compile");
                    None
                }
            })
            .collect();

        Self::List(patterns)
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        match self {
            AllowedOrigins::Any => OriginDecision::Any,
            AllowedOrigins::List(patterns) => match request_origin {
                Some(origin)
                    if origin.len() <= MAX_ORIGIN_LENGTH
                        && patterns.iter().any(|pattern| pattern.matches(origin)) =>
                {
                    OriginDecision::Mirror(origin.to_owned())
                }
                _ => OriginDecision::Disallow,
            },
        }
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, AllowedOrigins::List(_))
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
