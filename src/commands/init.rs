use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::info;

use crate::config::{
    loader::write_config_file,
    models::{DEFAULT_RECORD_FILE, DEFAULT_RECORD_TYPES, DEFAULT_RESTRICTED_FILE},
    FileConfig,
};
use crate::records::{self, Owner, Record, RecordEntry};

/// Writes a sample config at `config_path` and, if missing, a sample records file.
pub fn handle_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config file {} already exists, use --force to overwrite it",
            config_path.display()
        );
    }

    let record_file = sample_record_path(config_path)?;
    let config = sample_config(&record_file);
    write_config_file(config_path, &config)?;
    info!("Wrote config file {}", config_path.display());

    if !record_file.exists() {
        records::save_entries(&record_file, &[sample_entry()])?;
        info!("Wrote sample records file {}", record_file.display());
    }
    Ok(())
}

/// `records.json` in the working directory when present, otherwise next to the config.
fn sample_record_path(config_path: &Path) -> Result<PathBuf> {
    let local = Path::new(DEFAULT_RECORD_FILE);
    if local.exists() {
        let cwd = std::env::current_dir().context("Failed to read working directory")?;
        return Ok(cwd.join(local));
    }
    let dir = config_path.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(".zonesync_records.json"))
}

pub fn sample_config(record_file: &Path) -> FileConfig {
    FileConfig {
        record_file: record_file.display().to_string(),
        restricted_file: DEFAULT_RESTRICTED_FILE.to_string(),
        record_type: DEFAULT_RECORD_TYPES.iter().map(|t| t.to_string()).collect(),
        ..Default::default()
    }
}

pub fn sample_entry() -> RecordEntry {
    RecordEntry {
        description: "This is a sample record".to_string(),
        repo: String::new(),
        owner: Owner {
            username: "username".to_string(),
            email: "username@domain.com".to_string(),
        },
        record: Record {
            r#type: "A".to_string(),
            name: "*.dev".to_string(),
            content: "127.0.0.1".to_string(),
            proxiable: true,
            proxied: true,
            ttl: 1,
            ..Default::default()
        },
    }
}
