//! Application context: the production collaborators for one run.
//!
//! `AppContext` is built once in `Cli::run()` from the resolved
//! configuration and handed to the command handler.

use crate::domain::{EnvVars, ProvisionConfig};
use crate::infra::layout::FsLayout;
use crate::infra::locate::SearchPathLocator;
use crate::infra::process::TokioProcessLauncher;
use crate::infra::settings::YamlSettingsStore;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Production wiring of every port the provisioner needs.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Home, conf, and log directory resolution.
    pub layout: FsLayout,
    /// `SOLR_HOME` / `PATH` lookup.
    pub locator: SearchPathLocator,
    /// Spawns `solr` with log redirection.
    pub launcher: TokioProcessLauncher,
    /// Settings file reader.
    pub settings: YamlSettingsStore,
}

impl AppContext {
    #[must_use]
    pub fn new(flags: &OutputFlags, config: ProvisionConfig) -> Self {
        let locator = SearchPathLocator::new(config.env.clone());
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            layout: FsLayout::new(config),
            locator,
            launcher: TokioProcessLauncher,
            settings: YamlSettingsStore,
        }
    }

    /// Progress reporter writing through this context's output.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}

/// Snapshot the process environment. Variables that are not valid UTF-8 are skipped.
#[must_use]
pub fn capture_env() -> EnvVars {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
