use std::{fs, path::Path};

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::models::{Record, RecordEntry};
use crate::error::{Error, Result};

/// Reads every entry of a records file.
pub fn load_entries(path: &Path) -> Result<Vec<RecordEntry>> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let entries: Vec<RecordEntry> =
        serde_json::from_str(&contents).map_err(|source| Error::RecordParse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Reads the records of a records file, keeping only the given types.
pub fn load_records(path: &Path, types: &[String]) -> Result<Vec<Record>> {
    Ok(load_entries(path)?
        .into_iter()
        .map(|entry| entry.record)
        .filter(|record| record.has_type(types))
        .collect())
}

/// Writes entries as tab-indented JSON, replacing the file.
pub fn save_entries(path: &Path, entries: &[RecordEntry]) -> Result<()> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    entries
        .serialize(&mut serializer)
        .map_err(|source| Error::RecordParse {
            path: path.to_path_buf(),
            source,
        })?;
    buf.push(b'\n');

    fs::write(path, buf).map_err(|e| Error::io(path, e))?;
    debug!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}
