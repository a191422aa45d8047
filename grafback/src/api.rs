//! The api seam between the sync engines and the Grafana server.

use grafana_api::prelude::*;
use serde_json::Value;

/// The two server operations the engines perform. The third operation the
/// tool uses, dashboard search, happens before an engine runs: the CLI fetches
/// the listing and hands it to [`run_backup`](crate::run_backup).
///
/// Implemented by [`GrafanaClient`]; tests substitute an in-memory mock.
pub trait DashboardApi {
    /// Fetch one dashboard by uid, returned opaquely (`meta` + `dashboard` sections).
    fn get_dashboard(&self, uid: &str) -> impl Future<Output = Result<Value, GrafanaError>>;

    /// Create or update one dashboard on the server.
    fn create_or_update(
        &self,
        request: &CreateDashboardRequest,
    ) -> impl Future<Output = Result<(), GrafanaError>>;
}

impl DashboardApi for GrafanaClient {
    async fn get_dashboard(&self, uid: &str) -> Result<Value, GrafanaError> {
        GrafanaClient::get_dashboard(self, uid).await
    }

    async fn create_or_update(&self, request: &CreateDashboardRequest) -> Result<(), GrafanaError> {
        GrafanaClient::create_or_update(self, request).await
    }
}
