use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Error, Result};

pub const DEFAULT_RECORD_FILE: &str = "records.json";
pub const DEFAULT_RESTRICTED_FILE: &str = "restricted.json";
pub const DEFAULT_RECORD_TYPES: [&str; 2] = ["A", "CNAME"];

/// Layout of the config file on disk.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub cf_token: String,
    pub zone_id: String,
    pub domain_name: String,
    pub record_file: String,
    pub restricted_file: String,
    pub record_type: Vec<String>,
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub domain: String,
    pub record_file: PathBuf,
    pub restricted_file: PathBuf,
    pub api_token: String,
    pub zone_id: String,
    pub record_types: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            domain: String::new(),
            record_file: PathBuf::from(DEFAULT_RECORD_FILE),
            restricted_file: PathBuf::from(DEFAULT_RESTRICTED_FILE),
            api_token: String::new(),
            zone_id: String::new(),
            record_types: DEFAULT_RECORD_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "API token cannot be empty"))]
    pub api_token: String,

    #[validate(length(min = 1, message = "Zone ID cannot be empty"))]
    pub zone_id: String,
}

impl Settings {
    /// Credentials for the Cloudflare API, failing when either part is unset.
    pub fn credentials(&self) -> Result<Credentials> {
        let credentials = Credentials {
            api_token: self.api_token.clone(),
            zone_id: self.zone_id.clone(),
        };
        credentials
            .validate()
            .map_err(|e| Error::MissingSetting(format!("{e} (set CF_TOK / CF_ZID)")))?;
        Ok(credentials)
    }

    pub fn require_domain(&self) -> Result<&str> {
        if self.domain.is_empty() {
            return Err(Error::MissingSetting(
                "domain name (set DOMAIN_NAME or --domain)".to_string(),
            ));
        }
        Ok(&self.domain)
    }
}
