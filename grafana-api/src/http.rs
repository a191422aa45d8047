//! HTTP transport used by `GrafanaClient`
//!
//! Responsible for
//!  - request construction (auth header, query parameters)
//!  - logging/tracing
//!  - mapping response status codes to `GrafanaError`
//!  - json deserialization of response bodies

use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use snafu::prelude::*;
use tracing::{error, trace};

use crate::{
    Result,
    error::{GrafanaError, HttpSnafu, SerializationSnafu},
};

#[derive(Debug)]
pub(crate) struct HttpClient {
    client: reqwest::Client,

    /// Base URL for API requests (e.g., "https://grafana.example.com")
    base_url: String,

    token: String,
}

impl HttpClient {
    pub(crate) fn new(client: reqwest::Client, base_url: String, token: String) -> Self {
        HttpClient {
            client,
            base_url,
            token,
        }
    }

    /// Makes an authenticated GET request and decodes the json response.
    pub(crate) async fn get_request<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        self.send(Method::GET, path, query, None).await
    }

    /// Makes an authenticated POST request with a json body.
    pub(crate) async fn post_request<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_vec(body).context(SerializationSnafu)?;
        self.send(Method::POST, path, &[], Some(body)).await
    }

    /// Handles a single api request: no retries, one attempt per call,
    /// bounded by the client timeout.
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let full_url = format!("{}{}", self.base_url, path);
        let mut builder = self
            .client
            .request(method.clone(), &full_url)
            .query(query)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(bytes) = body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(bytes);
        }
        log_request(&method, &full_url, query);

        let response = builder.send().await.context(HttpSnafu {
            method: method.to_string(),
            url: full_url.clone(),
        })?;

        let code = response.status();
        if !code.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(%code, url = %full_url, body = %message, "http");
            return Err(GrafanaError::Api {
                code: code.as_u16(),
                method: method.to_string(),
                url: full_url,
                message,
            });
        }

        let data = response.bytes().await.context(HttpSnafu {
            method: method.to_string(),
            url: full_url.clone(),
        })?;
        log_response(path, &data);
        deserialize_json(&data)
    }
}

// dump request method, url, and query, for debugging
// requires RUST_LOG=grafana_api::http=trace
// headers are not logged so we don't leak the api token
fn log_request(method: &Method, url: &str, query: &[(String, String)]) {
    trace!(target: "grafana_api::http", "{method} url={url} query={query:?}");
}

// dump json response, for debugging
fn log_response(path: &str, body: &[u8]) {
    if tracing::enabled!(target: "grafana_api::http", tracing::Level::TRACE) {
        trace!(target: "grafana_api::http", "Response path={path} body={}",
            String::from_utf8_lossy(body)
        );
    }
}

// deserialize, reporting errors with 'serde_path_to_error', which provides
// the json path to the failing element
fn deserialize_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    match serde_path_to_error::deserialize(&mut deserializer) {
        Ok(value) => Ok(value),
        Err(err) => {
            error!("Deserialization failed at {}: {}", err.path(), err);
            Err(GrafanaError::Deserialization {
                source: err.into_inner(),
            })
        }
    }
}
