//! `PATH`/`SOLR_HOME` implementation of the `ExecutableLocator` port.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::application::ports::ExecutableLocator;
use crate::domain::config::{PATH_VAR, SOLR_HOME_VAR};
use crate::domain::{EnvVars, ProvisionError};

/// Looks up executables against a snapshot of the process environment.
pub struct SearchPathLocator {
    env: EnvVars,
}

impl SearchPathLocator {
    #[must_use]
    pub fn new(env: EnvVars) -> Self {
        Self { env }
    }
}

impl ExecutableLocator for SearchPathLocator {
    fn locate(&self, name: &str, overlay: &EnvVars) -> Result<PathBuf, ProvisionError> {
        resolve(name, &self.env.layered(overlay))
    }
}

/// Resolve `name` to `$SOLR_HOME/bin/<name>`, or the first match on `PATH`.
///
/// A set-but-empty `SOLR_HOME` counts as unset. The `SOLR_HOME` path is not
/// checked for existence.
///
/// # Errors
///
/// Returns `ProvisionError::ExecutableNotFound` when neither source resolves.
pub fn resolve(name: &str, env: &EnvVars) -> Result<PathBuf, ProvisionError> {
    if let Some(home) = env.non_empty(SOLR_HOME_VAR) {
        return Ok(Path::new(home).join("bin").join(name));
    }
    env.get(PATH_VAR)
        .and_then(|path| search_path(name, OsStr::new(path)))
        .ok_or_else(|| ProvisionError::ExecutableNotFound {
            solr_home: env.get(SOLR_HOME_VAR).map(PathBuf::from),
        })
}

/// Search each directory of a `PATH`-style list for an executable `name`.
#[must_use]
pub fn search_path(name: &str, path: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidate_names(name).into_iter().map(move |c| dir.join(c)))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn candidate_names(name: &str) -> Vec<String> {
    vec![format!("{name}.cmd"), format!("{name}.exe"), name.to_string()]
}

#[cfg(not(windows))]
fn candidate_names(name: &str) -> Vec<String> {
    vec![name.to_string()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
