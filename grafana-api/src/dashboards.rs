//! Dashboard endpoints: search, fetch by uid, create-or-update
//!
//! # Api methods
//!
//! - [search_dashboards](GrafanaClient::search_dashboards) - list dashboards and folders
//! - [get_dashboard](GrafanaClient::get_dashboard) - fetch one dashboard body by uid
//! - [create_or_update](GrafanaClient::create_or_update) - push one dashboard to the server
//!

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    Result,
    client::GrafanaClient,
    config::{DASH_FOLDER_TYPE, SEARCH_LIMIT},
};

/// One entry of the dashboard search response.
///
/// The listing mixes two kinds of entries: folder containers
/// (`type == "dash-folder"`) and dashboards. Every dashboard entry carries a
/// non-empty `uid`, the stable identifier used to fetch its body.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardListing {
    /// Server-assigned numeric identifier
    #[serde(default)]
    pub id: i64,
    /// Stable string identifier, distinct from `id`
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub slug: String,
    /// Entry kind: `"dash-folder"` for a folder container, anything else for a dashboard
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub tags: Vec<Value>,
    #[serde(default)]
    pub is_starred: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_uid: Option<String>,
    /// Title of the containing folder; `None`/empty means the default folder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_url: Option<String>,
}

impl DashboardListing {
    /// Returns true if this entry is a folder container rather than a dashboard.
    pub fn is_folder(&self) -> bool {
        self.kind == DASH_FOLDER_TYPE
    }
}

/// Request body for the create-or-update endpoint.
///
/// `dashboard` is the opaque body with server-assigned `id`/`uid` removed;
/// `folder_id` is whatever the stored `meta.folderId` held (null when absent),
/// so the server re-resolves folder placement on import.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDashboardRequest {
    pub dashboard: Value,
    pub overwrite: bool,
    pub folder_id: Value,
}

impl GrafanaClient {
    /// Lists all dashboards and folders known to the server.
    ///
    /// `uid_filter` is an optional comma-separated uid allow-list, restricting
    /// the result to the named dashboards.
    pub async fn search_dashboards(
        &self,
        uid_filter: Option<&str>,
    ) -> Result<Vec<DashboardListing>> {
        let mut query = vec![("limit".to_string(), SEARCH_LIMIT.to_string())];
        if let Some(uids) = uid_filter {
            query.push(("dashboardUIDs".to_string(), uids.to_string()));
        }
        self.http.get_request("/api/search", &query).await
    }

    /// Fetches one dashboard by uid. The response is returned opaquely: a
    /// `meta` section describing folder placement, and the `dashboard` body.
    pub async fn get_dashboard(&self, uid: &str) -> Result<Value> {
        self.http
            .get_request(&format!("/api/dashboards/uid/{uid}"), &[])
            .await
    }

    /// Creates or updates one dashboard. The server resolves the target by
    /// folder and title, assigning fresh identifiers as needed.
    pub async fn create_or_update(&self, request: &CreateDashboardRequest) -> Result<()> {
        // response body (status/slug/version) is not interesting to callers
        let _response: Value = self.http.post_request("/api/dashboards/db", request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CreateDashboardRequest, DashboardListing};
    use serde_json::{Value, json};

    const SEARCH_RESPONSE: &str = r#"[
      {
        "id": 7,
        "uid": "fold1",
        "title": "Ops",
        "uri": "db/ops",
        "url": "/dashboards/f/fold1/ops",
        "slug": "",
        "type": "dash-folder",
        "tags": [],
        "isStarred": false
      },
      {
        "id": 42,
        "uid": "abc",
        "title": "Node Exporter",
        "uri": "db/node-exporter",
        "url": "/d/abc/node-exporter",
        "slug": "",
        "type": "dash-db",
        "tags": ["prometheus"],
        "isStarred": true,
        "folderId": 7,
        "folderUid": "fold1",
        "folderTitle": "Ops",
        "folderUrl": "/dashboards/f/fold1/ops"
      }
    ]"#;

    #[test]
    fn decode_search_response() {
        let listing: Vec<DashboardListing> =
            serde_json::from_str(SEARCH_RESPONSE).expect("decode search response");
        assert_eq!(listing.len(), 2);
        assert!(listing[0].is_folder());
        assert!(!listing[1].is_folder());
        assert_eq!(listing[1].uid, "abc");
        assert_eq!(listing[1].folder_title.as_deref(), Some("Ops"));
        assert_eq!(listing[1].folder_id, Some(7));
    }

    #[test]
    fn decode_entry_with_missing_folder_fields() {
        let entry: DashboardListing =
            serde_json::from_str(r#"{"id":1,"uid":"x","title":"X","type":"dash-db"}"#)
                .expect("decode minimal entry");
        assert!(entry.folder_title.is_none());
        assert!(!entry.is_folder());
    }

    #[test]
    fn create_request_wire_keys() {
        let request = CreateDashboardRequest {
            dashboard: json!({"title": "X", "panels": []}),
            overwrite: true,
            folder_id: json!(7),
        };
        let value = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(value["overwrite"], Value::Bool(true));
        assert_eq!(value["folderId"], json!(7));
        assert_eq!(value["dashboard"]["title"], json!("X"));
    }
}
