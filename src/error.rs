use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure the tool can hit. All of them are fatal for the running command.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse config file {}: {reason}", .path.display())]
    ConfigParse { path: PathBuf, reason: String },

    #[error("failed to access {}: {source}", .path.display())]
    FileIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse records in {}: {source}", .path.display())]
    RecordParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The provider answered with a non-empty `errors` list.
    #[error("Cloudflare API error {code}: {message}")]
    Api { code: u32, message: String },

    /// Connection failures and bodies that are not the expected JSON envelope.
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("record #{index}: record {field} cannot be empty")]
    Validation { index: usize, field: &'static str },

    #[error("restricted subdomains found: {}", .names.join(", "))]
    RestrictedSubdomain { names: Vec<String> },

    #[error("invalid restricted pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("missing setting: {0}")]
    MissingSetting(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileIo {
            path: path.into(),
            source,
        }
    }
}
