use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use super::models::{FileConfig, Settings};
use crate::error::{Error, Result};

pub const ENV_CONFIG_FILE: &str = "CONFIG_FILE";
pub const ENV_RECORD_FILE: &str = "RECORD_FILE";
pub const ENV_RESTRICTED_FILE: &str = "RESTRICTED_FILE";
pub const ENV_DOMAIN_NAME: &str = "DOMAIN_NAME";
pub const ENV_API_TOKEN: &str = "CF_TOK";
pub const ENV_ZONE_ID: &str = "CF_ZID";

const DEFAULT_CONFIG_NAME: &str = ".zonesync.json";

/// Values given on the command line. They win over everything else.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub domain: Option<String>,
    pub record_file: Option<PathBuf>,
    pub restricted_file: Option<PathBuf>,
}

/// Builds [`Settings`] from defaults, the config file, the environment and flags, in that order.
pub struct ConfigLoader<E> {
    env: E,
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

impl ConfigLoader<fn(&str) -> Option<String>> {
    pub fn from_process_env() -> Self {
        Self::new(process_env)
    }
}

impl<E> ConfigLoader<E>
where
    E: Fn(&str) -> Option<String>,
{
    pub fn new(env: E) -> Self {
        Self { env }
    }

    /// Path of the config file: `--config`, then `CONFIG_FILE`, then `~/.zonesync.json`.
    /// The second value tells whether the path was asked for explicitly.
    pub fn config_path(&self, flag: Option<&Path>) -> Option<(PathBuf, bool)> {
        if let Some(path) = flag {
            return Some((path.to_path_buf(), true));
        }
        if let Some(path) = (self.env)(ENV_CONFIG_FILE) {
            return Some((PathBuf::from(path), true));
        }
        (self.env)("HOME").map(|home| (Path::new(&home).join(DEFAULT_CONFIG_NAME), false))
    }

    pub fn load(&self, config_flag: Option<&Path>, overrides: &Overrides) -> Result<Settings> {
        let file = match self.config_path(config_flag) {
            Some((path, true)) => read_config_file(&path)?,
            Some((path, false)) if path.exists() => read_config_file(&path)?,
            _ => {
                debug!("No config file found, using defaults");
                FileConfig::default()
            }
        };

        let mut settings = Settings::default();
        settings.apply_file(file);
        self.apply_env(&mut settings);
        settings.apply_overrides(overrides);
        Ok(settings)
    }

    fn apply_env(&self, settings: &mut Settings) {
        if let Some(v) = (self.env)(ENV_RECORD_FILE) {
            settings.record_file = PathBuf::from(v);
        }
        if let Some(v) = (self.env)(ENV_RESTRICTED_FILE) {
            settings.restricted_file = PathBuf::from(v);
        }
        if let Some(v) = (self.env)(ENV_DOMAIN_NAME) {
            settings.domain = v;
        }
        if let Some(v) = (self.env)(ENV_API_TOKEN) {
            settings.api_token = v;
        }
        if let Some(v) = (self.env)(ENV_ZONE_ID) {
            settings.zone_id = v;
        }
    }
}

impl Settings {
    fn apply_file(&mut self, file: FileConfig) {
        if !file.domain_name.is_empty() {
            self.domain = file.domain_name;
        }
        if !file.record_file.is_empty() {
            self.record_file = PathBuf::from(file.record_file);
        }
        if !file.restricted_file.is_empty() {
            self.restricted_file = PathBuf::from(file.restricted_file);
        }
        if !file.record_type.is_empty() {
            self.record_types = file.record_type;
        }
        self.api_token = file.cf_token;
        self.zone_id = file.zone_id;
    }

    fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(domain) = &overrides.domain {
            self.domain = domain.clone();
        }
        if let Some(path) = &overrides.record_file {
            self.record_file = path.clone();
        }
        if let Some(path) = &overrides.restricted_file {
            self.restricted_file = path.clone();
        }
    }
}

/// Parses a config file; `.yaml`/`.yml` files go through the YAML parser, anything else is JSON.
pub fn read_config_file(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml")
    );
    let parsed = if is_yaml {
        serde_yaml::from_str(&contents).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&contents).map_err(|e| e.to_string())
    };

    parsed.map_err(|reason| Error::ConfigParse {
        path: path.to_path_buf(),
        reason,
    })
}

/// Writes a config file in the same format [`read_config_file`] expects.
pub fn write_config_file(path: &Path, config: &FileConfig) -> Result<()> {
    let data = serde_json::to_string_pretty(config).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    fs::write(path, data).map_err(|e| Error::io(path, e))
}
