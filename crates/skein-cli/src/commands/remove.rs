//! Implementation of the `skein remove` command.

use tracing::{info, instrument};

use skein_core::application::RemoveOutcome;

use crate::{
    cli::{RemoveArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `skein remove` command.
///
/// Without `--force` the core service asks for confirmation; a decline is a
/// successful no-op, not an error.
#[instrument(skip_all)]
pub fn execute(
    args: RemoveArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let manifest = super::manifest_path(&global, &config);
    let service = super::dependency_service();

    let outcome = service
        .remove(
            &manifest,
            args.service.as_deref(),
            args.dependency.as_deref(),
            args.force,
        )
        .map_err(CliError::Core)?;

    match outcome {
        RemoveOutcome::Removed { source, target } => {
            info!(source = %source, target = %target, "dependency removed");
            output.success(&format!(
                "Dependency removed: '{source}' no longer depends on '{target}'"
            ))?;
        }
        RemoveOutcome::Cancelled => {
            output.info("Dependency removal cancelled")?;
        }
    }

    Ok(())
}
