use serde::{Deserialize, Serialize};

/// Record types that Cloudflare can proxy.
pub const PROXY_TYPES: [&str; 3] = ["A", "AAAA", "CNAME"];

/// Every record type the tool understands.
pub const ALL_TYPES: [&str; 6] = ["A", "AAAA", "CNAME", "TXT", "MX", "SRV"];

/// TTL value Cloudflare reads as "automatic".
pub const TTL_AUTO: u32 = 1;

// A DNS record as both the records file and the Cloudflare API describe it.
// `id` stays empty until the record exists remotely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub r#type: String,
    pub name: String,
    pub content: String,
    pub proxiable: bool,
    pub proxied: bool,
    pub ttl: u32,
}

impl Record {
    pub fn is_proxy_type(&self) -> bool {
        PROXY_TYPES.contains(&self.r#type.as_str())
    }

    pub fn has_type(&self, types: &[String]) -> bool {
        types.iter().any(|t| *t == self.r#type)
    }

    /// Name as it appears under `domain`, used for display only.
    pub fn display_name(&self, domain: &str) -> String {
        if domain.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, domain)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Owner {
    pub username: String,
    pub email: String,
}

/// One entry of the records file: a record plus who asked for it and why.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordEntry {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub repo: String,
    pub owner: Owner,
    pub record: Record,
}

impl From<Record> for RecordEntry {
    fn from(record: Record) -> Self {
        Self {
            record,
            ..Default::default()
        }
    }
}
