use std::{fs, io::ErrorKind, path::Path};

use log::{debug, warn};
use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::records::Record;

#[derive(Debug, Default, Deserialize)]
struct RestrictedFile {
    #[serde(default)]
    restricted_subdomain: Vec<String>,
}

/// Subdomain patterns that must never be touched by a sync.
#[derive(Debug, Default)]
pub struct RestrictedList {
    patterns: Vec<Regex>,
}

impl RestrictedList {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).map_err(|source| Error::InvalidPattern {
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Loads `{"restricted_subdomain": [...]}`. A missing file means nothing is restricted.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "Restricted file {} not found, no subdomain is restricted",
                    path.display()
                );
                return Ok(Self::default());
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        let file: RestrictedFile =
            serde_json::from_str(&contents).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!(
            "Loaded {} restricted patterns from {}",
            file.restricted_subdomain.len(),
            path.display()
        );
        Self::new(file.restricted_subdomain)
    }

    /// True when any pattern matches somewhere in `name`.
    pub fn is_restricted(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(name))
    }

    /// Splits records into `(allowed, restricted)`, preserving order.
    pub fn partition(&self, records: Vec<Record>) -> (Vec<Record>, Vec<Record>) {
        records
            .into_iter()
            .partition(|record| !self.is_restricted(&record.name))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
