use serde::Deserialize;

use crate::error::{Error, Result};
use crate::records::Record;

#[derive(Debug, Deserialize)]
pub struct ApiDnsRecord {
    pub id: String,
    #[serde(default)]
    pub zone_id: String,
    #[serde(default)]
    pub zone_name: String,
    pub name: String,
    pub r#type: String,
    pub content: String,
    #[serde(default)]
    pub proxiable: bool,
    #[serde(default)]
    pub proxied: bool,
    pub ttl: u32,
    #[serde(default)]
    pub created_on: String,
    #[serde(default)]
    pub modified_on: String,
}

impl From<ApiDnsRecord> for Record {
    fn from(r: ApiDnsRecord) -> Self {
        Self {
            id: r.id,
            r#type: r.r#type,
            name: r.name,
            content: r.content,
            proxiable: r.proxiable,
            proxied: r.proxied,
            ttl: r.ttl,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeletedRecord {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultInfo {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_count: u32,
}

/// Envelope around every Cloudflare v4 response.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiError>,
    #[serde(default)]
    pub messages: Vec<serde_json::Value>,
    #[serde(default)]
    pub result_info: Option<ResultInfo>,
}

impl<T> ApiResponse<T> {
    /// Turns a non-empty `errors` list into [`Error::Api`], carrying the first message.
    pub fn check_errors(self) -> Result<Self> {
        if let Some(e) = self.errors.first() {
            return Err(Error::Api {
                code: e.code,
                message: e.message.clone(),
            });
        }
        Ok(self)
    }

    /// The `result` of a successful mutation.
    pub fn into_result(self) -> Result<T> {
        let response = self.check_errors()?;
        response.result.ok_or_else(|| Error::Api {
            code: 0,
            message: "response did not contain a result".to_string(),
        })
    }
}
