//! Filesystem implementation of the `InstallLayout` port.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::InstallLayout;
use crate::domain::config::{ENV_SCRIPT, ENV_SCRIPT_KEYS};
use crate::domain::{EnvVars, ProvisionConfig, ProvisionError};

/// Resolves directories from an explicit [`ProvisionConfig`].
///
/// `conf` and `logs` under the home directory are the defaults; the
/// config's overrides replace them.
pub struct FsLayout {
    config: ProvisionConfig,
}

impl FsLayout {
    #[must_use]
    pub fn new(config: ProvisionConfig) -> Self {
        Self { config }
    }
}

impl InstallLayout for FsLayout {
    fn metadata_dir(&self) -> Result<PathBuf, ProvisionError> {
        let home = self.config.home.clone().ok_or_else(|| {
            ProvisionError::config("ATLAS_HOME is not set. Pass --home or export ATLAS_HOME.")
        })?;
        if !home.is_dir() {
            return Err(ProvisionError::config(format!(
                "Home directory {} does not exist",
                home.display()
            )));
        }
        Ok(home)
    }

    fn conf_dir(&self, home: &Path) -> PathBuf {
        self.config
            .conf_dir
            .clone()
            .unwrap_or_else(|| home.join("conf"))
    }

    fn log_dir(&self, home: &Path) -> PathBuf {
        self.config
            .log_dir
            .clone()
            .unwrap_or_else(|| home.join("logs"))
    }

    fn dir_must_exist(&self, path: &Path) -> Result<PathBuf, ProvisionError> {
        if !path.is_dir() {
            tracing::info!(path = %path.display(), "creating directory");
        }
        std::fs::create_dir_all(path)
            .with_context(|| format!("cannot create directory {}", path.display()))
            .map_err(|e| ProvisionError::config(format!("{e:#}")))?;
        Ok(path.to_path_buf())
    }

    fn execute_env_script(&self, conf_dir: &Path) -> Result<EnvVars, ProvisionError> {
        let script = conf_dir.join(ENV_SCRIPT);
        if cfg!(windows) || !script.is_file() {
            return Ok(EnvVars::new());
        }
        tracing::debug!(script = %script.display(), "sourcing environment script");
        let exported = source_script(&script).map_err(|e| ProvisionError::EnvScript {
            path: script.clone(),
            reason: format!("{e:#}"),
        })?;
        Ok(exported
            .iter()
            .filter(|(k, _)| ENV_SCRIPT_KEYS.contains(k))
            .collect())
    }
}

/// Source `script` in bash and capture the exported environment.
///
/// The script's own stdout is sent to stderr so only `env -0` output is parsed.
fn source_script(script: &Path) -> Result<EnvVars> {
    let output = Command::new("bash")
        .arg("-c")
        .arg(r#". "$1" 1>&2 && env -0"#)
        .arg("bash")
        .arg(script)
        .stdin(Stdio::null())
        .stderr(Stdio::piped())
        .stdout(Stdio::piped())
        .output()
        .context("failed to run bash")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("bash exited with {}: {}", output.status, stderr.trim());
    }
    Ok(parse_env0(&output.stdout))
}

/// Parse NUL-separated `KEY=value` records as printed by `env -0`.
fn parse_env0(raw: &[u8]) -> EnvVars {
    raw.split(|b| *b == 0)
        .filter_map(|record| {
            let record = std::str::from_utf8(record).ok()?;
            let (key, value) = record.split_once('=')?;
            (!key.is_empty()).then_some((key, value))
        })
        .collect()
}
