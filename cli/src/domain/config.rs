//! Domain types for provisioner configuration.
//!
//! Pure functions only. Nothing here does I/O.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::collection::DEFAULT_LOG_TAG;
use crate::domain::error::ProvisionError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Settings file looked up inside the configuration directory.
pub const SETTINGS_FILE: &str = "solr-provision.yaml";

/// Environment script sourced from the configuration directory.
pub const ENV_SCRIPT: &str = "atlas-env.sh";

/// Variables imported from the environment script. Anything else it
/// exports is ignored.
pub const ENV_SCRIPT_KEYS: &[&str] = &[
    "JAVA_HOME",
    "SOLR_HOME",
    "SOLR_JAVA_MEM",
    "SOLR_INCLUDE",
    "ZK_HOST",
    "ATLAS_OPTS",
];

pub const SOLR_HOME_VAR: &str = "SOLR_HOME";
pub const PATH_VAR: &str = "PATH";

// ── Settings file schema ─────────────────────────────────────────────────────

/// Optional settings stored in `<conf>/solr-provision.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ProvisionSettings {
    /// Abort on the first `solr create` that exits non-zero.
    pub strict: bool,
    /// Log file tag.
    pub tag: String,
}

impl Default for ProvisionSettings {
    fn default() -> Self {
        Self {
            strict: false,
            tag: DEFAULT_LOG_TAG.to_string(),
        }
    }
}

/// Validates a log tag. Tags become file names inside the log directory.
///
/// # Errors
///
/// Returns a configuration error if the tag is empty or contains a path separator.
pub fn validate_tag(tag: &str) -> Result<(), ProvisionError> {
    if tag.is_empty() || tag.contains(['/', '\\']) || tag == "." || tag == ".." {
        return Err(ProvisionError::config(format!(
            "Invalid log tag '{tag}': must be a plain file name"
        )));
    }
    Ok(())
}

// ── Environment ──────────────────────────────────────────────────────────────

/// An ordered set of environment variables.
///
/// Used both for the snapshot of the process environment taken at startup
/// and for the overlay exported by the environment script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars(BTreeMap<String, String>);

impl EnvVars {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value of `key`, treating an empty string as unset.
    #[must_use]
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return a copy of `self` with every variable in `overlay` replacing ours.
    #[must_use]
    pub fn layered(&self, overlay: &EnvVars) -> EnvVars {
        let mut merged = self.clone();
        for (k, v) in overlay.iter() {
            merged.insert(k, v);
        }
        merged
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ── Resolved configuration ───────────────────────────────────────────────────

/// Explicit provisioner configuration, built once by the CLI layer.
#[derive(Debug, Clone, Default)]
pub struct ProvisionConfig {
    /// Installation home (`--home` / `ATLAS_HOME`).
    pub home: Option<PathBuf>,
    /// Configuration directory override (`--conf` / `ATLAS_CONF`).
    pub conf_dir: Option<PathBuf>,
    /// Log directory override (`--log-dir` / `ATLAS_LOG_DIR`).
    pub log_dir: Option<PathBuf>,
    /// Process environment captured at startup.
    pub env: EnvVars,
}

/// Per-run switches given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ProvisionOptions {
    /// `Some(true)` forces strict mode regardless of the settings file.
    pub strict: Option<bool>,
    /// Print the commands instead of running them.
    pub dry_run: bool,
    /// Log tag override.
    pub tag: Option<String>,
}

/// Options after merging the settings file with command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveOptions {
    pub strict: bool,
    pub dry_run: bool,
    pub tag: String,
}

impl ProvisionOptions {
    /// Merge with file settings. Command-line values win.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the resulting tag is invalid.
    pub fn resolve(&self, settings: &ProvisionSettings) -> Result<EffectiveOptions, ProvisionError> {
        let tag = self.tag.clone().unwrap_or_else(|| settings.tag.clone());
        validate_tag(&tag)?;
        Ok(EffectiveOptions {
            strict: self.strict.unwrap_or(settings.strict),
            dry_run: self.dry_run,
            tag,
        })
    }
}
