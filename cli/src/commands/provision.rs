//! `solr-provision`: create the Solr collections and report the outcome.
//!
//! This is the single place where errors become an exit code.

use crate::app::AppContext;
use crate::application::services::provision::{self as service, ProvisionReport};
use crate::domain::{ProvisionError, ProvisionOptions};

/// Printed on stdout when every create command has run.
pub const SUCCESS_MESSAGE: &str = "Solr collection creation succeeded !!!";

/// Exit code for any error caught at the top level.
pub const FAILURE_EXIT_CODE: i32 = -1;

/// Run the provisioner and map the outcome to an exit code.
///
/// On success the success line is printed and `0` returned, whatever the
/// `solr` processes exited with (unless strict mode turned that into an
/// error). On error `Exception: <message>` is printed and `-1` returned.
pub async fn run(app: &AppContext, options: &ProvisionOptions) -> i32 {
    match execute(app, options).await {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "provisioning failed");
            println!("Exception: {e}");
            FAILURE_EXIT_CODE
        }
    }
}

async fn execute(app: &AppContext, options: &ProvisionOptions) -> Result<(), ProvisionError> {
    let reporter = app.terminal_reporter();
    let report = service::provision_collections(
        &app.layout,
        &app.settings,
        &app.locator,
        &app.launcher,
        &reporter,
        options,
    )
    .await?;

    if report.dry_run {
        print_plan(&report);
        return Ok(());
    }

    app.output.kv("Solr", &report.executable.display().to_string());
    app.output.kv("Logs", &report.log_dir.display().to_string());
    println!("{SUCCESS_MESSAGE}");
    Ok(())
}

fn print_plan(report: &ProvisionReport) {
    for outcome in &report.outcomes {
        println!("{}", outcome.command.display_line());
    }
}
