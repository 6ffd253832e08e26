use anyhow::{Context, Result};
use log::info;

use crate::api::{CloudflareClient, DnsApiClient};
use crate::cli::ListArgs;
use crate::config::Settings;
use crate::records::{self, models::ALL_TYPES, Record};

pub async fn handle_list(args: &ListArgs, settings: &Settings) -> Result<()> {
    if args.local {
        let types = if args.types.is_empty() {
            settings.record_types.clone()
        } else {
            args.types.clone()
        };

        info!("Gathering DNS records from {}...", settings.record_file.display());
        let local = records::load_records(&settings.record_file, &types)
            .context("Failed to parse local DNS records")?;
        print_records(&local, &settings.domain);
        info!("Got {} local DNS records", local.len());
        return Ok(());
    }

    let types = if args.types.is_empty() {
        ALL_TYPES.iter().map(|t| t.to_string()).collect()
    } else {
        args.types.clone()
    };

    let client = CloudflareClient::new(&settings.credentials()?);
    info!("Gathering DNS records from Cloudflare...");
    let remote = client
        .list_records(&types)
        .await
        .context("Failed to fetch records")?;
    print_records(&remote, &settings.domain);
    info!("Got {} registered DNS records on Cloudflare", remote.len());
    Ok(())
}

fn print_records(records: &[Record], domain: &str) {
    for record in records {
        println!(
            "{}: {} -> {}\t{}",
            record.r#type,
            record.display_name(domain),
            record.content,
            record.ttl
        );
    }
}
