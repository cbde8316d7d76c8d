//! CLI argument parsing with clap derive

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};

use crate::app::{AppContext, OutputFlags, capture_env};
use crate::commands;
use crate::domain::{ProvisionConfig, ProvisionOptions};

/// Create the Solr collections used by the metadata graph store
#[derive(Parser)]
#[command(name = "solr-provision", version)]
pub struct Cli {
    /// Installation home directory
    #[arg(long, env = "ATLAS_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Configuration directory [default: <home>/conf]
    #[arg(long, env = "ATLAS_CONF", value_name = "DIR")]
    pub conf: Option<PathBuf>,

    /// Log directory [default: <home>/logs]
    #[arg(long, env = "ATLAS_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Fail as soon as a `solr create` exits non-zero
    #[arg(long)]
    pub strict: bool,

    /// Print the solr commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Log file tag (<log-dir>/<tag>.out and <tag>.err)
    #[arg(long, value_name = "TAG")]
    pub log_tag: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,
}

impl Cli {
    /// Resolved directory configuration, with a snapshot of the environment.
    #[must_use]
    pub fn config(&self) -> ProvisionConfig {
        ProvisionConfig {
            home: self.home.clone(),
            conf_dir: self.conf.clone(),
            log_dir: self.log_dir.clone(),
            env: capture_env(),
        }
    }

    /// Per-run switches.
    #[must_use]
    pub fn options(&self) -> ProvisionOptions {
        ProvisionOptions {
            strict: self.strict.then_some(true),
            dry_run: self.dry_run,
            tag: self.log_tag.clone(),
        }
    }

    /// Execute the provisioner and return the process exit code.
    pub async fn run(self) -> i32 {
        crate::logging::init(self.verbose);
        let flags = OutputFlags {
            no_color: self.no_color,
            quiet: self.quiet,
        };
        let options = self.options();
        let app = AppContext::new(&flags, self.config());
        commands::provision::run(&app, &options).await
    }
}
