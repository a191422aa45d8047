//! Backup and restore engines for Grafana dashboards.
//!
//! `backup` pulls every dashboard from the server into a directory tree that
//! mirrors the server-side folder layout; `restore` walks such a tree and
//! pushes every file back, overwriting server state. Both engines tolerate
//! per-item failures and keep going; only structural problems (unreadable
//! directories, malformed stored files) abort a run.
//!
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

pub mod api;
pub mod archive;
pub mod backup;
pub mod report;
pub mod restore;

pub use api::DashboardApi;
pub use backup::run_backup;
pub use report::RunReport;
pub use restore::run_restore;

/// Default backup directory, used when `BACKUP_DIR` / `--dir` is not given.
pub const DEFAULT_BACKUP_DIR: &str = "dashboards";
