use anyhow::{Context, Result};
use log::info;

use crate::api::CloudflareClient;
use crate::cli::SyncArgs;
use crate::config::Settings;
use crate::records::Record;
use crate::sync::{self, SyncOptions};

pub async fn handle_sync(args: &SyncArgs, settings: &Settings) -> Result<()> {
    let options = SyncOptions {
        dry_run: args.dry_run,
        force_proxied: args.proxied,
    };
    let client = CloudflareClient::new(&settings.credentials()?);

    info!("Sync started{}...", if options.dry_run { " (dry run)" } else { "" });
    let report = sync::run(&client, settings, options)
        .await
        .context("Sync failed")?;

    if report.restricted > 0 {
        info!("Skipped {} restricted local record(s)", report.restricted);
    }
    for record in report
        .created
        .iter()
        .chain(&report.updated)
        .chain(&report.deleted)
    {
        println!("{}", record_line(record));
    }
    println!(
        "STATUS - {} record(s) created, {} record(s) updated, {} record(s) deleted{}",
        report.created.len(),
        report.updated.len(),
        report.deleted.len(),
        if report.dry_run { " (dry run)" } else { "" }
    );
    info!("Sync completed");
    Ok(())
}

/// `<id> <TYPE>: <name> <content>`, one line per applied record.
pub fn record_line(record: &Record) -> String {
    format!(
        "{} {}: {} {}",
        record.id, record.r#type, record.name, record.content
    )
}
