use std::path::{Path, PathBuf};

use chrono::Local;
use log::info;
use rand::Rng;

use crate::api::DnsApiClient;
use crate::error::Result;
use crate::records::{self, RecordEntry};

/// `dns_records_<date>_<n>.json` in the working directory.
pub fn default_export_path() -> PathBuf {
    let date = Local::now().format("%Y-%m-%d");
    let n: u32 = rand::rng().random_range(0..999);
    PathBuf::from(format!("dns_records_{}_{}.json", date, n))
}

/// Fetches every remote record of `record_types` and writes them as a records file.
/// Returns the number of records written.
pub async fn export<C>(client: &C, record_types: &[String], path: &Path) -> Result<usize>
where
    C: DnsApiClient + ?Sized,
{
    let remote = client.list_records(record_types).await?;
    info!("Exporting {} records to {}...", remote.len(), path.display());

    let entries: Vec<RecordEntry> = remote.into_iter().map(RecordEntry::from).collect();
    records::save_entries(path, &entries)?;
    Ok(entries.len())
}
