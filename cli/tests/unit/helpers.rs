//! Shared test helpers: temporary installs and executable stand-ins.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use solr_provision::domain::ProvisionConfig;
use tempfile::TempDir;

/// Write `body` to `path` as an executable `/bin/sh` script.
#[cfg(unix)]
pub fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create script dir");
    }
    std::fs::write(path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
}

/// Write a file that exists but is not executable.
pub fn write_plain(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create dir");
    }
    std::fs::write(path, b"not a program").expect("write file");
}

/// Config whose home is the temp dir itself.
pub fn config_for(home: &TempDir) -> ProvisionConfig {
    ProvisionConfig {
        home: Some(home.path().to_path_buf()),
        ..ProvisionConfig::default()
    }
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_default()
}

pub fn join_paths(dirs: &[PathBuf]) -> String {
    std::env::join_paths(dirs)
        .expect("join paths")
        .into_string()
        .expect("utf-8 path list")
}
