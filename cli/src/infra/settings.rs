//! Infrastructure implementation of the `SettingsStore` port.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::SettingsStore;
use crate::domain::config::SETTINGS_FILE;
use crate::domain::{ProvisionError, ProvisionSettings};

/// Reads `solr-provision.yaml` from the configuration directory.
pub struct YamlSettingsStore;

impl SettingsStore for YamlSettingsStore {
    fn load(&self, conf_dir: &Path) -> Result<ProvisionSettings, ProvisionError> {
        read_settings(&conf_dir.join(SETTINGS_FILE))
            .map_err(|e| ProvisionError::config(format!("{e:#}")))
    }
}

fn read_settings(path: &Path) -> Result<ProvisionSettings> {
    if !path.exists() {
        return Ok(ProvisionSettings::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(ProvisionSettings::default());
    }
    serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
}
