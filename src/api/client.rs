use async_trait::async_trait;

use crate::error::Result;
use crate::records::Record;

/// Operations the sync engine needs from a DNS provider, scoped to a single zone.
#[async_trait]
pub trait DnsApiClient: Send + Sync {
    /// Every record of the given types, all pages included.
    async fn list_records(&self, record_types: &[String]) -> Result<Vec<Record>>;

    async fn create_record(&self, record: &Record) -> Result<Record>;

    /// Replaces the record identified by `record.id`.
    async fn update_record(&self, record: &Record) -> Result<Record>;

    /// Returns the id the provider reports as deleted.
    async fn delete_record(&self, record_id: &str) -> Result<String>;
}
