//! Application service: Solr collection provisioning use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::PathBuf;
use std::process::ExitStatus;

use crate::application::ports::{
    ExecutableLocator, InstallLayout, ProcessHandle, ProcessLauncher, ProgressReporter,
    SettingsStore,
};
use crate::domain::collection::{self, CollectionCommand, SOLR_BINARY};
use crate::domain::{ProvisionError, ProvisionOptions};

/// Result of running a single `solr create`.
#[derive(Debug)]
pub struct CollectionOutcome {
    pub command: CollectionCommand,
    /// `None` when the command was only planned (dry run).
    pub status: Option<ExitStatus>,
}

impl CollectionOutcome {
    /// `true` when the command ran and exited non-zero.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.status.is_some_and(|s| !s.success())
    }
}

/// Outcome of the `provision_collections` use-case.
#[derive(Debug)]
pub struct ProvisionReport {
    pub executable: PathBuf,
    pub log_dir: PathBuf,
    pub dry_run: bool,
    pub outcomes: Vec<CollectionOutcome>,
}

impl ProvisionReport {
    /// Commands that ran and exited non-zero.
    pub fn failures(&self) -> impl Iterator<Item = &CollectionOutcome> {
        self.outcomes.iter().filter(|o| o.failed())
    }
}

/// Create every Solr collection, one `solr create` at a time.
///
/// The steps are: resolve home, ensure the configuration directory, source
/// its environment script, ensure the log directory, locate `solr`, then run
/// each create command and wait for it before starting the next.
///
/// Non-zero exits are reported and logged but do not fail the run unless
/// strict mode is on, in which case the first failure stops it.
///
/// # Errors
///
/// Returns a [`ProvisionError`] if the layout cannot be resolved, `solr`
/// cannot be found, a process cannot be spawned, or (strict mode) a create
/// command exits non-zero.
pub async fn provision_collections(
    layout: &impl InstallLayout,
    settings: &impl SettingsStore,
    locator: &impl ExecutableLocator,
    launcher: &impl ProcessLauncher,
    reporter: &impl ProgressReporter,
    options: &ProvisionOptions,
) -> Result<ProvisionReport, ProvisionError> {
    // 1. Installation layout
    let home = layout.metadata_dir()?;
    let conf_dir = layout.dir_must_exist(&layout.conf_dir(&home))?;
    let overlay = layout.execute_env_script(&conf_dir)?;
    let log_dir = layout.dir_must_exist(&layout.log_dir(&home))?;
    tracing::debug!(
        home = %home.display(),
        conf_dir = %conf_dir.display(),
        log_dir = %log_dir.display(),
        exported = overlay.len(),
        "installation layout resolved"
    );

    // 2. Settings and command-line overrides
    let effective = options.resolve(&settings.load(&conf_dir)?)?;

    // 3. Solr control script
    let executable = locator.locate(SOLR_BINARY, &overlay)?;
    tracing::info!(executable = %executable.display(), "using solr");

    let commands = collection::plan(&executable);
    if effective.dry_run {
        return Ok(ProvisionReport {
            executable,
            log_dir,
            dry_run: true,
            outcomes: commands
                .into_iter()
                .map(|command| CollectionOutcome {
                    command,
                    status: None,
                })
                .collect(),
        });
    }

    // 4. One create per collection, strictly in order
    let mut outcomes = Vec::with_capacity(commands.len());
    for command in commands {
        let name = command.collection.name();
        reporter.step(&format!("Creating collection {name}..."));
        let mut child = launcher.run_process(&command.argv(), &overlay, &log_dir, &effective.tag)?;
        let status = child.wait().await?;

        if status.success() {
            reporter.success(&format!("Collection {name} created"));
        } else {
            tracing::warn!(collection = name, code = ?status.code(), "solr create exited non-zero");
            if effective.strict {
                return Err(ProvisionError::CollectionFailed {
                    collection: name.to_string(),
                    code: status.code(),
                });
            }
            reporter.warn(&format!(
                "solr create for {name} exited with {status}; see {}",
                log_dir.join(format!("{}.err", effective.tag)).display()
            ));
        }
        outcomes.push(CollectionOutcome {
            command,
            status: Some(status),
        });
    }

    Ok(ProvisionReport {
        executable,
        log_dir,
        dry_run: false,
        outcomes,
    })
}
