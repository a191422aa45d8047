//! Restore engine: walk a backup tree and push every stored dashboard back
//! to the server.

use std::{fs, path::Path, pin::Pin};

use anyhow::{Context, Result, bail};
use grafana_api::prelude::*;
use serde_json::Value;
use tracing::{info, warn};

use crate::api::DashboardApi;

/// macOS directory-listing artifact, skipped during traversal
const MACOS_METADATA_FILE: &str = ".DS_Store";

/// Restores every stored dashboard under `root`, depth-first.
///
/// Each file must hold a `meta` section and a `dashboard` section. The
/// server-assigned `id` and `uid` are stripped from the body before upload so
/// the server assigns fresh identifiers and resolves `overwrite` by folder
/// and title. Upload failures are logged per item and the walk continues;
/// an unreadable directory or a malformed stored file aborts the whole run.
pub async fn run_restore(api: &impl DashboardApi, root: &Path) -> Result<()> {
    restore_dir(api, root).await
}

// recursion in an async fn needs a boxed future
fn restore_dir<'a, A: DashboardApi>(
    api: &'a A,
    path: &'a Path,
) -> Pin<Box<dyn Future<Output = Result<()>> + 'a>> {
    Box::pin(async move {
        let entries =
            fs::read_dir(path).with_context(|| format!("cannot read directory {path:?}"))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("cannot read directory {path:?}"))?;
            let entry_path = entry.path();
            if entry_path.is_dir() {
                restore_dir(api, &entry_path).await?;
            } else if entry.file_name() == MACOS_METADATA_FILE {
                continue;
            } else {
                restore_file(api, &entry_path).await?;
            }
        }
        Ok(())
    })
}

async fn restore_file(api: &impl DashboardApi, path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path).with_context(|| format!("cannot read file {path:?}"))?;
    let mut stored: Value =
        serde_json::from_str(&raw).with_context(|| format!("cannot parse file {path:?}"))?;

    // folderId comes from the backup-time metadata; absent means null,
    // which the server treats as the default folder
    let folder_id = match stored.get("meta") {
        Some(meta) => meta.get("folderId").cloned().unwrap_or(Value::Null),
        None => bail!("meta field is not found in {path:?}"),
    };

    let Some(dashboard) = stored.get_mut("dashboard").map(Value::take) else {
        bail!("dashboard field is not found in {path:?}");
    };
    let Value::Object(mut body) = dashboard else {
        bail!("dashboard field is not an object in {path:?}");
    };
    // stale identifiers from the original export must not be replayed
    body.remove("id");
    body.remove("uid");
    let title = body
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or("(untitled)")
        .to_string();

    let request = CreateDashboardRequest {
        dashboard: Value::Object(body),
        overwrite: true,
        folder_id,
    };
    match api.create_or_update(&request).await {
        Ok(()) => info!("Dashboard uploaded {title}"),
        Err(err) => warn!("Failed to upload {title}: {err}"),
    }
    Ok(())
}
