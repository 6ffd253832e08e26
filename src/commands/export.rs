use anyhow::{Context, Result};
use log::info;

use crate::api::CloudflareClient;
use crate::cli::ExportArgs;
use crate::config::Settings;
use crate::export;

pub async fn handle_export(args: &ExportArgs, settings: &Settings) -> Result<()> {
    let client = CloudflareClient::new(&settings.credentials()?);
    let path = args
        .file
        .clone()
        .unwrap_or_else(export::default_export_path);

    info!("Export started...");
    let count = export::export(&client, &settings.record_types, &path)
        .await
        .with_context(|| format!("Failed to export records to {}", path.display()))?;
    println!("Exported {} record(s) to {}", count, path.display());
    Ok(())
}
