use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::{client::DnsApiClient, models::*};
use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::records::Record;

pub const API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Page size used when listing records; a shorter page is the last one.
pub const PAGE_SIZE: usize = 100;

pub struct CloudflareClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
    zone_id: String,
}

#[async_trait]
impl DnsApiClient for CloudflareClient {
    async fn list_records(&self, record_types: &[String]) -> Result<Vec<Record>> {
        let url = self.records_url();
        let per_page = PAGE_SIZE.to_string();
        let mut records = Vec::new();

        for record_type in record_types {
            let mut page = 1u32;
            loop {
                let page_param = page.to_string();
                let request = self.client.get(&url).query(&[
                    ("type", record_type.as_str()),
                    ("per_page", per_page.as_str()),
                    ("page", page_param.as_str()),
                ]);
                let response: ApiResponse<Vec<ApiDnsRecord>> =
                    self.send(request, &url).await?.check_errors()?;

                if !response.success {
                    debug!("Listing {} records stopped at page {}", record_type, page);
                    break;
                }

                if let Some(info) = &response.result_info {
                    debug!("Page {} of {} total records", info.page, info.total_count);
                }
                let batch = response.result.unwrap_or_default();
                let full_page = batch.len() == PAGE_SIZE;
                debug!(
                    "Fetched {} {} records from page {}",
                    batch.len(),
                    record_type,
                    page
                );
                records.extend(batch.into_iter().map(Record::from));

                if !full_page {
                    break;
                }
                page += 1;
            }
        }

        Ok(records)
    }

    async fn create_record(&self, record: &Record) -> Result<Record> {
        let url = self.records_url();
        let request = self.client.post(&url).json(&record_body(record));
        let response: ApiResponse<ApiDnsRecord> = self.send(request, &url).await?;

        Ok(response.into_result()?.into())
    }

    async fn update_record(&self, record: &Record) -> Result<Record> {
        let url = format!("{}/{}", self.records_url(), record.id);
        let request = self.client.put(&url).json(&record_body(record));
        let response: ApiResponse<ApiDnsRecord> = self.send(request, &url).await?;

        Ok(response.into_result()?.into())
    }

    async fn delete_record(&self, record_id: &str) -> Result<String> {
        let url = format!("{}/{}", self.records_url(), record_id);
        let request = self.client.delete(&url);
        let response: ApiResponse<DeletedRecord> = self.send(request, &url).await?;

        Ok(response
            .check_errors()?
            .result
            .map(|deleted| deleted.id)
            .unwrap_or_default())
    }
}

impl CloudflareClient {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: API_BASE_URL.to_string(),
            api_token: credentials.api_token.clone(),
            zone_id: credentials.zone_id.clone(),
        }
    }

    /// Points the client at another API root, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn records_url(&self) -> String {
        format!("{}/zones/{}/dns_records", self.base_url, self.zone_id)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<ApiResponse<T>> {
        let transport = |reason: String| Error::Transport {
            url: url.to_string(),
            reason,
        };

        let response = request
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| transport(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| {
            transport(format!(
                "failed to parse API response (status {}): {}. Response: {}",
                status, e, text
            ))
        })
    }
}

fn record_body(record: &Record) -> serde_json::Value {
    json!({
        "type": record.r#type,
        "name": record.name,
        "content": record.content,
        "ttl": record.ttl,
        "proxied": record.proxied,
    })
}
