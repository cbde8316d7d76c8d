//! Tests for `TokioProcessLauncher`: exit status, log redirection, environment.

use std::path::Path;

use solr_provision::application::ports::{ProcessHandle, ProcessLauncher};
use solr_provision::domain::{EnvVars, ProvisionError};
use solr_provision::infra::process::TokioProcessLauncher;
use tempfile::TempDir;

use crate::helpers::read;

fn sh(script: &str) -> Vec<String> {
    vec!["/bin/sh".to_string(), "-c".to_string(), script.to_string()]
}

#[cfg(unix)]
#[tokio::test]
async fn exit_code_is_returned_from_wait() {
    let dir = TempDir::new().expect("tempdir");
    let mut child = TokioProcessLauncher
        .run_process(&sh("exit 3"), &EnvVars::new(), dir.path(), "solr")
        .expect("spawn");
    let status = child.wait().await.expect("wait");
    assert_eq!(status.code(), Some(3));
}

#[cfg(unix)]
#[tokio::test]
async fn output_is_appended_to_tagged_log_files() {
    let dir = TempDir::new().expect("tempdir");
    for n in 1..=2 {
        let mut child = TokioProcessLauncher
            .run_process(
                &sh(&format!("echo out-{n}; echo err-{n} >&2")),
                &EnvVars::new(),
                dir.path(),
                "solr",
            )
            .expect("spawn");
        child.wait().await.expect("wait");
    }

    assert_eq!(read(&dir.path().join("solr.out")), "out-1\nout-2\n");
    assert_eq!(read(&dir.path().join("solr.err")), "err-1\nerr-2\n");
}

#[cfg(unix)]
#[tokio::test]
async fn env_overlay_reaches_the_child() {
    let dir = TempDir::new().expect("tempdir");
    let env: EnvVars = [("SOLR_JAVA_MEM", "-Xms512m")].into_iter().collect();
    let mut child = TokioProcessLauncher
        .run_process(&sh("echo \"$SOLR_JAVA_MEM\""), &env, dir.path(), "env")
        .expect("spawn");
    child.wait().await.expect("wait");
    assert_eq!(read(&dir.path().join("env.out")), "-Xms512m\n");
}

#[tokio::test]
async fn empty_command_line_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let err = TokioProcessLauncher
        .run_process(&[], &EnvVars::new(), dir.path(), "solr")
        .err()
        .expect("empty argv");
    assert!(matches!(err, ProvisionError::Spawn { .. }));
}

#[tokio::test]
async fn missing_program_is_a_spawn_error() {
    let dir = TempDir::new().expect("tempdir");
    let argv = vec!["/nonexistent/bin/solr".to_string(), "create -c".to_string()];
    let err = TokioProcessLauncher
        .run_process(&argv, &EnvVars::new(), dir.path(), "solr")
        .err()
        .expect("missing program");
    assert!(err.to_string().contains("/nonexistent/bin/solr"));
}

#[tokio::test]
async fn unwritable_log_dir_is_a_spawn_error() {
    let argv = vec!["/bin/sh".to_string()];
    let err = TokioProcessLauncher
        .run_process(
            &argv,
            &EnvVars::new(),
            Path::new("/nonexistent/logs"),
            "solr",
        )
        .err()
        .expect("no log dir");
    assert!(err.to_string().contains("cannot open log file"));
}
