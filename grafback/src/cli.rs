//! Command line parsing and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use grafana_api::prelude::*;

use grafback::{DEFAULT_BACKUP_DIR, archive::archive_backup, run_backup, run_restore};

#[derive(Parser, Debug)]
#[command(name = "grafback")]
#[command(author, version, about = "Grafana dashboard backup and restore tool", long_about = None)]
pub struct Cli {
    /// Grafana server base URL, e.g. <https://grafana.example.com>
    #[arg(short = 'u', long, env = "GRAFANA_URL", global = true)]
    pub url: Option<String>,

    /// Grafana API token
    #[arg(long, env = "GRAFANA_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Backup directory
    #[arg(short = 'd', long, env = "BACKUP_DIR", global = true, default_value = DEFAULT_BACKUP_DIR)]
    pub dir: PathBuf,

    /// Verbose mode (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download all dashboards into the backup directory, replacing any
    /// previous backup
    Backup(BackupArgs),

    /// Upload every dashboard found under the backup directory,
    /// overwriting server state
    Restore,
}

#[derive(Args, Debug)]
pub struct BackupArgs {
    /// Comma-separated dashboard uid allow-list; only these dashboards are
    /// backed up
    #[arg(long, env = "GRAFANA_UIDS")]
    pub uids: Option<String>,

    /// After the backup completes, pack the backup directory into a
    /// timestamped zip archive
    #[arg(long)]
    pub archive: bool,
}

pub async fn run(cli: Cli) -> Result<()> {
    let url = cli
        .url
        .context("Grafana URL is required: set --url or GRAFANA_URL")?;
    let token = cli
        .token
        .context("Grafana token is required: set --token or GRAFANA_TOKEN")?;
    let client = GrafanaClient::with_config(ClientConfig::new(url, token))?;

    match cli.command {
        Commands::Backup(args) => {
            let listing = client
                .search_dashboards(args.uids.as_deref())
                .await
                .context("cannot list the dashboards")?;
            let report = run_backup(&client, &listing, &cli.dir)
                .await
                .context("cannot backup the dashboards")?;
            println!("{report}");
            if args.archive {
                let archive = archive_backup(&cli.dir)?;
                println!("Archive written to {}", archive.display());
            }
        }
        Commands::Restore => {
            run_restore(&client, &cli.dir)
                .await
                .context("error happened during restoring")?;
            println!("Restored all dashboards successfully");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands};

    #[test]
    fn parses_backup_with_filter() {
        let cli = Cli::parse_from([
            "grafback", "backup", "--url", "http://g", "--token", "t", "--uids", "a,b",
        ]);
        assert_eq!(cli.url.as_deref(), Some("http://g"));
        match cli.command {
            Commands::Backup(args) => assert_eq!(args.uids.as_deref(), Some("a,b")),
            Commands::Restore => panic!("expected backup subcommand"),
        }
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["grafback", "sync"]).is_err());
    }
}
