//! Implementation of the `skein add` command.

use tracing::{info, instrument};

use crate::{
    cli::{AddArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `skein add` command.
///
/// Missing positional arguments are resolved interactively by the core
/// service through the console port.
#[instrument(skip_all)]
pub fn execute(
    args: AddArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let manifest = super::manifest_path(&global, &config);
    let service = super::dependency_service();

    let outcome = service
        .add(
            &manifest,
            args.service.as_deref(),
            args.dependency.as_deref(),
            args.force,
        )
        .map_err(CliError::Core)?;

    info!(source = %outcome.source, target = %outcome.target, "dependency created");

    output.success(&format!(
        "Dependency created: '{}' now depends on '{}'",
        outcome.source, outcome.target
    ))?;

    // Creating a cycle is allowed; surfacing it is not optional.
    for cycle in &outcome.cycles {
        output.warning(cycle)?;
    }

    Ok(())
}
