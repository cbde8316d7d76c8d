//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! Everything converts to `anyhow::Error` via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while provisioning Solr collections.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("{0}")]
    Configuration(String),

    #[error(
        "The solr binary could not be found in your path or SOLR_HOME : {}",
        display_solr_home(solr_home.as_ref())
    )]
    ExecutableNotFound { solr_home: Option<PathBuf> },

    #[error("cannot source {}: {reason}", path.display())]
    EnvScript { path: PathBuf, reason: String },

    #[error("failed to spawn {program}: {reason}")]
    Spawn { program: String, reason: String },

    #[error("solr create for collection '{collection}' exited with {}", describe_exit(*code))]
    CollectionFailed {
        collection: String,
        code: Option<i32>,
    },
}

impl ProvisionError {
    /// Shorthand for a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

fn display_solr_home(solr_home: Option<&PathBuf>) -> String {
    solr_home.map_or_else(|| "(unset)".to_string(), |p| p.display().to_string())
}

fn describe_exit(code: Option<i32>) -> String {
    code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}"))
}
