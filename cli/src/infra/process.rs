//! Infrastructure implementation of the `ProcessLauncher` port.
//!
//! `TokioProcessLauncher` spawns through `tokio::process` with stdout and
//! stderr appended to per-tag log files. There is no timeout: a create
//! command runs for as long as Solr takes.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use anyhow::{Context, Result};

use crate::application::ports::{ProcessHandle, ProcessLauncher};
use crate::domain::{EnvVars, ProvisionError};

/// Production `ProcessLauncher`.
pub struct TokioProcessLauncher;

/// A running child whose output is redirected into the log directory.
pub struct LoggedChild {
    child: tokio::process::Child,
    program: String,
}

impl ProcessHandle for LoggedChild {
    async fn wait(&mut self) -> Result<ExitStatus, ProvisionError> {
        self.child
            .wait()
            .await
            .map_err(|e| ProvisionError::Spawn {
                program: self.program.clone(),
                reason: format!("waiting for process: {e}"),
            })
    }
}

impl ProcessLauncher for TokioProcessLauncher {
    type Handle = LoggedChild;

    fn run_process(
        &self,
        argv: &[String],
        env: &EnvVars,
        log_dir: &Path,
        tag: &str,
    ) -> Result<LoggedChild, ProvisionError> {
        let Some((program, args)) = argv.split_first() else {
            return Err(ProvisionError::Spawn {
                program: String::new(),
                reason: "empty command line".to_string(),
            });
        };

        spawn_logged(program, args, env, log_dir, tag)
            .map(|child| LoggedChild {
                child,
                program: program.clone(),
            })
            .map_err(|e| ProvisionError::Spawn {
                program: program.clone(),
                reason: format!("{e:#}"),
            })
    }
}

fn spawn_logged(
    program: &str,
    args: &[String],
    env: &EnvVars,
    log_dir: &Path,
    tag: &str,
) -> Result<tokio::process::Child> {
    let stdout = open_log(&log_dir.join(format!("{tag}.out")))?;
    let stderr = open_log(&log_dir.join(format!("{tag}.err")))?;
    tracing::debug!(program, ?args, log_dir = %log_dir.display(), "spawning");

    tokio::process::Command::new(program)
        .args(args)
        .envs(env.iter())
        .stdin(Stdio::null())
        .stdout(stdout)
        .stderr(stderr)
        .spawn()
        .context("spawn failed")
}

fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))
}
