//! Grafana Rust API Client
//!
//! # Creating a new api client
//!
//! - [with_config](GrafanaClient::with_config) - create client with custom configuration
//! - [with_client](GrafanaClient::with_client) - create client with a custom reqwest client
//!

use std::time::Duration;

use crate::{
    Result,
    config::{GRAFANA_URL_ENV, HTTP_TIMEOUT_SECS},
    error::{ConfigSnafu, HttpSnafu},
    http::HttpClient,
};
use snafu::prelude::*;

/// Configuration for the Grafana client: endpoint url, auth token, timeout.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base url of the grafana server (e.g. "https://grafana.example.com").
    /// The client owns api paths below it, so this should be the server root,
    /// not the `/api/` prefix. A trailing slash is trimmed.
    pub base_url: String,

    /// API token sent as a bearer `Authorization` header on every request.
    pub token: String,

    /// Per-request timeout. The timeout bounds one HTTP call; it is not an
    /// overall deadline for a multi-request operation.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a config with the default timeout.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            token: token.into(),
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
        }
    }

    /// Creates a config from the `GRAFANA_URL` environment variable.
    pub fn from_env(token: impl Into<String>) -> Result<Self> {
        let base_url = std::env::var(GRAFANA_URL_ENV).map_err(|_| {
            ConfigSnafu {
                message: format!("environment variable {GRAFANA_URL_ENV} is not set"),
            }
            .build()
        })?;
        Ok(Self::new(base_url, token))
    }

    pub fn timeout(self, timeout: Duration) -> Self {
        ClientConfig { timeout, ..self }
    }
}

/// Client for the Grafana dashboard HTTP API.
#[derive(Debug)]
pub struct GrafanaClient {
    pub(crate) http: HttpClient,
}

impl GrafanaClient {
    /// Creates a client from the given configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context(HttpSnafu {
                method: "client-init",
                url: "",
            })?;
        Ok(Self::with_client(config, client))
    }

    /// Creates a client with a caller-provided reqwest client
    /// (for custom tls or proxy settings). The configured timeout
    /// of the provided client applies.
    pub fn with_client(config: ClientConfig, client: reqwest::Client) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        GrafanaClient {
            http: HttpClient::new(client, base_url, config.token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClientConfig;

    #[test]
    fn config_default_timeout() {
        let config = ClientConfig::new("http://localhost:3000", "token");
        assert_eq!(config.timeout.as_secs(), crate::config::HTTP_TIMEOUT_SECS);
    }
}
