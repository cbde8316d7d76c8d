//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use crate::domain::{EnvVars, ProvisionError, ProvisionSettings};

// ── Installation Layout Port ──────────────────────────────────────────────────

/// Resolves the installation layout: home, configuration, and log directories.
pub trait InstallLayout {
    /// Installation home directory. Must already exist.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the home is unset or missing.
    fn metadata_dir(&self) -> Result<PathBuf, ProvisionError>;
    /// Configuration directory for the given home.
    fn conf_dir(&self, home: &Path) -> PathBuf;
    /// Log directory for the given home.
    fn log_dir(&self, home: &Path) -> PathBuf;
    /// Create `path` if it is missing and return it.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the directory cannot be created.
    fn dir_must_exist(&self, path: &Path) -> Result<PathBuf, ProvisionError>;
    /// Source the environment script in `conf_dir`, returning the variables
    /// it exports. A missing script yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns an error if the script exists but cannot be sourced.
    fn execute_env_script(&self, conf_dir: &Path) -> Result<EnvVars, ProvisionError>;
}

// ── Settings Port ─────────────────────────────────────────────────────────────

/// Loads the optional settings file from the configuration directory.
pub trait SettingsStore {
    /// Load settings, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file exists but is malformed.
    fn load(&self, conf_dir: &Path) -> Result<ProvisionSettings, ProvisionError>;
}

// ── Executable Lookup Port ────────────────────────────────────────────────────

/// Finds the Solr control script.
pub trait ExecutableLocator {
    /// Resolve `name`, honoring `SOLR_HOME` and `PATH` from the process
    /// environment layered with `overlay`.
    ///
    /// # Errors
    ///
    /// Returns `ProvisionError::ExecutableNotFound` if nothing resolves.
    fn locate(&self, name: &str, overlay: &EnvVars) -> Result<PathBuf, ProvisionError>;
}

// ── Process Ports ─────────────────────────────────────────────────────────────

/// A spawned child process.
#[allow(async_fn_in_trait)]
pub trait ProcessHandle {
    /// Block until the process exits.
    async fn wait(&mut self) -> Result<ExitStatus, ProvisionError>;
}

/// Spawns processes with their output redirected into the log directory.
pub trait ProcessLauncher {
    type Handle: ProcessHandle;

    /// Spawn `argv[0]` with the remaining elements as arguments.
    ///
    /// Stdout and stderr go to `<log_dir>/<tag>.out` and `<log_dir>/<tag>.err`.
    /// `env` is added on top of the inherited environment.
    ///
    /// # Errors
    ///
    /// Returns `ProvisionError::Spawn` if the log files cannot be opened or
    /// the process cannot be started.
    fn run_process(
        &self,
        argv: &[String],
        env: &EnvVars,
        log_dir: &Path,
        tag: &str,
    ) -> Result<Self::Handle, ProvisionError>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait: no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
