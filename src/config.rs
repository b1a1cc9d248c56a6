use crate::options::{ApiKey, ProxyOptions, ValidationError};
use crate::origin::AllowedOrigins;
use crate::routing::UpstreamHosts;
use serde::Deserialize;
use std::net::SocketAddr;
use thiserror::Error;

/// Environment configuration, read once at start-up.
#[derive(Deserialize, Debug, Clone)]
pub struct ProxyConfig {
    /// Comma-separated origin globs; unset or empty allows every origin.
    #[serde(default)]
    pub cors_allow_origin: Option<String>,
    #[serde(default)]
    pub helius_api_key: ApiKey,
    #[serde(default)]
    pub helius_rpc_url: Option<String>,
    #[serde(default)]
    pub helius_api_url: Option<String>,
    #[serde(default)]
    pub helius_stream_url: Option<String>,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8787))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read environment: {0}")]
    Env(#[from] envy::Error),
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}

impl ProxyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(envy::from_env::<Self>()?)
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Self>(vars)?)
    }

    /// Builds validated [`ProxyOptions`]. Blank URL overrides fall back to the defaults.
    pub fn into_options(self) -> Result<ProxyOptions, ConfigError> {
        let defaults = UpstreamHosts::default();
        let hosts = UpstreamHosts::new(
            non_blank(self.helius_rpc_url).unwrap_or_else(|| defaults.rpc().to_string()),
            non_blank(self.helius_api_url).unwrap_or_else(|| defaults.api().to_string()),
            non_blank(self.helius_stream_url).unwrap_or_else(|| defaults.stream().to_string()),
        );

        let options = ProxyOptions::new(self.helius_api_key)
            .origin(AllowedOrigins::from_config(self.cors_allow_origin.as_deref()))
            .upstream(hosts);
        options.validate()?;

        Ok(options)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
