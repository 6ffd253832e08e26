mod api;
mod cli;
mod commands;
mod config;
mod error;
mod export;
mod formatter;
mod prompt;
mod records;
mod restricted;
mod sync;

#[cfg(test)]
mod tests;

use anyhow::{bail, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging, INFO unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("tip: {}", commands::random_tip());
        return Ok(());
    };

    let loader = ConfigLoader::from_process_env();
    match command {
        Commands::Version => {
            commands::version::handle_version();
            Ok(())
        }
        Commands::Init(args) => {
            let Some((path, _)) = loader.config_path(cli.config.as_deref()) else {
                bail!("Cannot locate a config path, pass --config or set CONFIG_FILE");
            };
            commands::init::handle_init(&path, args.force)
        }
        command => {
            let settings = loader.load(cli.config.as_deref(), &command.overrides())?;
            commands::dispatch(command, &settings).await
        }
    }
}
