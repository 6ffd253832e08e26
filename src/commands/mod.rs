pub mod export;
pub mod fmt;
pub mod init;
pub mod list;
pub mod sync;
pub mod version;

use anyhow::{bail, Result};
use rand::seq::IndexedRandom;

use crate::cli::Commands;
use crate::config::Settings;

const TIPS: [&str; 7] = [
    "Use `zonesync sync --dry-run` to see what will be synced",
    "Use `zonesync sync` to sync your records",
    "Use `zonesync sync --domain [domain]` to specify the root domain",
    "Use `zonesync sync -f [record_file]` to specify the file to sync",
    "Use `zonesync fmt --check` to check the records file",
    "Use `zonesync fmt` to format the records file",
    "Use `zonesync init` to generate a config file",
];

pub fn random_tip() -> &'static str {
    TIPS.choose(&mut rand::rng()).copied().unwrap_or(TIPS[0])
}

/// Runs a subcommand that needs resolved settings.
pub async fn dispatch(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::List(args) => list::handle_list(&args, settings).await,
        Commands::Fmt(args) => fmt::handle_fmt(&args, settings),
        Commands::Sync(args) => sync::handle_sync(&args, settings).await,
        Commands::Export(args) => export::handle_export(&args, settings).await,
        Commands::Init(_) | Commands::Version => {
            bail!("init and version run without loaded settings")
        }
    }
}
