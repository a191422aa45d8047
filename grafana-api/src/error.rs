//! Errors returned by `GrafanaClient`
//!
use snafu::prelude::*;

/// Errors returned by the grafana-api crate
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum GrafanaError {
    /// Http connection or timeout error
    #[snafu(display("HTTP error {method} url:{url}"))]
    Http {
        method: String,
        url: String,
        source: reqwest::Error,
    },

    /// Grafana responded with a non-success status.
    /// This usually means the request was invalid, the token lacks permission,
    /// or there was an internal server error.
    #[snafu(display("Api Server reported error ({code}) {method} {url}: {message}"))]
    Api {
        code: u16,
        method: String,
        url: String,
        message: String,
    },

    /// Deserialization error. A server response did not decode to the expected shape.
    #[snafu(display("Deserialization: {source}"))]
    Deserialization { source: serde_json::Error },

    /// Serialization error. Unlikely to occur; if you see this, please report it as a bug.
    #[snafu(display("Serialization: {source}"))]
    Serialization { source: serde_json::Error },

    /// Client configuration error
    #[snafu(display("Configuration: {message}"))]
    Config { message: String },
}

#[cfg(test)]
mod tests {
    use super::GrafanaError;

    #[test]
    fn api_error_display_has_context() {
        let err = GrafanaError::Api {
            code: 502,
            method: "GET".to_string(),
            url: "/api/search".to_string(),
            message: "bad gateway".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("502"));
        assert!(text.contains("/api/search"));
        assert!(text.contains("bad gateway"));
    }
}
