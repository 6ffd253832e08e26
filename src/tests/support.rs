use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::DnsApiClient;
use crate::error::Result;
use crate::records::{Record, RecordEntry};

pub fn record(r#type: &str, name: &str, content: &str) -> Record {
    Record {
        r#type: r#type.to_string(),
        name: name.to_string(),
        content: content.to_string(),
        ..Default::default()
    }
}

pub fn remote(id: &str, r#type: &str, name: &str, content: &str) -> Record {
    Record {
        id: id.to_string(),
        proxiable: true,
        ttl: 1,
        ..record(r#type, name, content)
    }
}

pub fn entry(r#type: &str, name: &str, content: &str) -> RecordEntry {
    RecordEntry::from(record(r#type, name, content))
}

/// In-memory zone that records every call made against it.
#[derive(Default)]
pub struct FakeClient {
    pub remote: Vec<Record>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeClient {
    pub fn with_remote(remote: Vec<Record>) -> Self {
        Self {
            remote,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn log(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DnsApiClient for FakeClient {
    async fn list_records(&self, record_types: &[String]) -> Result<Vec<Record>> {
        self.log("list".to_string());
        Ok(self
            .remote
            .iter()
            .filter(|r| r.has_type(record_types))
            .cloned()
            .collect())
    }

    async fn create_record(&self, record: &Record) -> Result<Record> {
        self.log(format!("create {}", record.name));
        Ok(Record {
            id: format!("new-{}", record.name),
            ..record.clone()
        })
    }

    async fn update_record(&self, record: &Record) -> Result<Record> {
        self.log(format!("update {}", record.name));
        Ok(record.clone())
    }

    async fn delete_record(&self, record_id: &str) -> Result<String> {
        self.log(format!("delete {}", record_id));
        Ok(record_id.to_string())
    }
}
