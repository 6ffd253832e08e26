use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Overrides;

#[derive(Debug, Parser)]
#[command(name = "zonesync", about = "Keep a Cloudflare zone in sync with a records file")]
pub struct Cli {
    /// Config file (defaults to $CONFIG_FILE, then ~/.zonesync.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List records from Cloudflare or from the local records file
    List(ListArgs),
    /// Format the records file, or only validate it with --check
    Fmt(FmtArgs),
    /// Sync the records file with Cloudflare
    Sync(SyncArgs),
    /// Export Cloudflare records to a records file
    Export(ExportArgs),
    /// Write a sample config and records file
    Init(InitArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// List the local records file instead of Cloudflare
    #[arg(long, short = 'l')]
    pub local: bool,

    /// Comma separated record types, e.g. A,CNAME
    #[arg(long = "type", short = 't', value_delimiter = ',')]
    pub types: Vec<String>,

    /// Records file
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Domain name
    #[arg(long)]
    pub domain: Option<String>,
}

#[derive(Debug, Args)]
pub struct FmtArgs {
    /// Only check the records for errors
    #[arg(long, short = 'c')]
    pub check: bool,

    /// Remove restricted subdomains without asking
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Records file
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Restricted subdomains file
    #[arg(long, short = 'r')]
    pub restricted: Option<PathBuf>,

    /// Domain name
    #[arg(long)]
    pub domain: Option<String>,
}

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Show what would change without calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Set every record proxied
    #[arg(long, short = 'p')]
    pub proxied: bool,

    /// Records file
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Restricted subdomains file
    #[arg(long, short = 'r')]
    pub restricted: Option<PathBuf>,

    /// Domain name
    #[arg(long)]
    pub domain: Option<String>,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Export file (defaults to dns_records_<date>_<n>.json)
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Domain name
    #[arg(long)]
    pub domain: Option<String>,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

impl Commands {
    /// Settings given as flags for this subcommand.
    pub fn overrides(&self) -> Overrides {
        match self {
            Commands::List(args) => Overrides {
                domain: args.domain.clone(),
                record_file: args.file.clone(),
                restricted_file: None,
            },
            Commands::Fmt(args) => Overrides {
                domain: args.domain.clone(),
                record_file: args.file.clone(),
                restricted_file: args.restricted.clone(),
            },
            Commands::Sync(args) => Overrides {
                domain: args.domain.clone(),
                record_file: args.file.clone(),
                restricted_file: args.restricted.clone(),
            },
            // The export file is an output, not the records file to read.
            Commands::Export(args) => Overrides {
                domain: args.domain.clone(),
                ..Default::default()
            },
            Commands::Init(_) | Commands::Version => Overrides::default(),
        }
    }
}
