//! Backup engine: replicate the server's folder structure on disk and write
//! one json file per dashboard.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use grafana_api::prelude::*;
use tracing::{info, warn};

use crate::{api::DashboardApi, report::RunReport};

/// Folder name for dashboards with no folder title
const DEFAULT_FOLDER: &str = "General";

/// Backs up every dashboard in `listing` under `backup_dir`.
///
/// Any existing backup at `backup_dir` is deleted first: a backup is a full
/// replace, not a merge. Entries are processed in listing order (the server
/// does not guarantee a stable order). Folder containers only ensure the root
/// directory exists; per-dashboard folders are created lazily as dashboards
/// are written. Fetch, serialize, and write failures are counted and skipped;
/// a directory that cannot be created aborts the run, since nothing further
/// can be written safely.
pub async fn run_backup(
    api: &impl DashboardApi,
    listing: &[DashboardListing],
    backup_dir: &Path,
) -> Result<RunReport> {
    if backup_dir.exists() {
        fs::remove_dir_all(backup_dir)
            .with_context(|| format!("cannot remove old backup directory {backup_dir:?}"))?;
    }

    let mut report = RunReport::default();
    info!("Syncing Dashboards...");
    for entry in listing {
        if entry.is_folder() {
            if !backup_dir.exists() {
                fs::create_dir_all(backup_dir)
                    .with_context(|| format!("cannot create backup directory {backup_dir:?}"))?;
            }
            continue;
        }

        report.total += 1;
        // fetch the dashboard json (meta + body) from the grafana api
        let body = match api.get_dashboard(&entry.uid).await {
            Ok(body) => body,
            Err(err) => {
                warn!("Failed to fetch dashboard: {}: {err}", entry.title);
                report.failed += 1;
                continue;
            }
        };

        // dashboards without a folder title go to the General/ folder
        let folder_title = match entry.folder_title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => DEFAULT_FOLDER,
        };
        let folder = backup_dir.join(folder_title);
        if !folder.exists() {
            fs::create_dir_all(&folder)
                .with_context(|| format!("cannot create sub directory {folder:?}"))?;
        }

        let pretty = match serde_json::to_string_pretty(&body) {
            Ok(pretty) => pretty,
            Err(err) => {
                warn!("Failed to serialize dashboard: {}: {err}", entry.title);
                report.failed += 1;
                continue;
            }
        };
        let file = folder.join(format!("{}.json", sanitize_uid(&entry.uid)));
        if let Err(err) = fs::write(&file, pretty) {
            warn!("Failed to save dashboard: {}: {err}", entry.title);
            report.failed += 1;
            continue;
        }
        info!("{} downloaded.", entry.title);
    }
    Ok(report)
}

/// Replaces path separators in a uid so each dashboard lands as a single
/// file directly under its folder, never a nested path.
fn sanitize_uid(uid: &str) -> String {
    uid.replace(['/', '\\'], "-")
}

#[cfg(test)]
mod tests {
    use super::sanitize_uid;

    #[test]
    fn sanitize_replaces_separators() {
        assert_eq!(sanitize_uid("team/abc"), "team-abc");
        assert_eq!(sanitize_uid("a\\b/c"), "a-b-c");
        assert_eq!(sanitize_uid("plain"), "plain");
    }
}
