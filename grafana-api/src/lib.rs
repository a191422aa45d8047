//! # Grafana Rust API Client
//!
//! A small Grafana HTTP API client covering the dashboard endpoints needed by
//! backup and restore tooling.
//!
//! ## Features
//!
//! - dashboard search, fetch-by-uid, and create-or-update
//! - bearer token authentication
//! - per-request timeout
//! - detailed deserialization errors (with json path)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use grafana_api::prelude::*;
//! # async fn example() -> Result<(), GrafanaError> {
//! let config = ClientConfig::new("https://grafana.example.com", "my-api-token");
//! let client = GrafanaClient::with_config(config)?;
//!
//! for entry in client.search_dashboards(None).await? {
//!     if !entry.is_folder() {
//!         let body = client.get_dashboard(&entry.uid).await?;
//!         println!("{}: {} keys", entry.title, body.as_object().map_or(0, |o| o.len()));
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Dashboard bodies are owned by the server and have no fixed schema, so this
//! crate hands them out as opaque [`serde_json::Value`] documents. Key order
//! is preserved on round trips.
//!
#![allow(clippy::missing_errors_doc)] // pedantic
#![allow(clippy::must_use_candidate)] // pedantic
#![warn(clippy::default_trait_access)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::implicit_clone)]
#![warn(clippy::match_same_arms)]
#![warn(clippy::redundant_clone)]
#![warn(clippy::redundant_closure)]
#![warn(clippy::uninlined_format_args)]
#![warn(clippy::unnecessary_wraps)]
#![warn(clippy::unused_async)]

pub mod client;
pub mod dashboards;
pub mod error;
mod http;

/// Result type alias using `GrafanaError` as the default error.
pub type Result<T, E = crate::error::GrafanaError> = std::result::Result<T, E>;

/// Prelude module - import the commonly used types with `use grafana_api::prelude::*;`
pub mod prelude {
    pub use crate::error::*;
    pub use crate::{
        client::{ClientConfig, GrafanaClient},
        dashboards::{CreateDashboardRequest, DashboardListing},
    };
}

pub(crate) mod config {
    /// Environment variable for the server base url
    pub const GRAFANA_URL_ENV: &str = "GRAFANA_URL";

    /// Pagination limit sent with dashboard search requests
    pub const SEARCH_LIMIT: u32 = 5000;

    /// Default per-request timeout, seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 10;

    /// Listing `type` value identifying a folder container
    pub const DASH_FOLDER_TYPE: &str = "dash-folder";
}
