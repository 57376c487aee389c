//! Implementation of the `skein check` command.
//!
//! Validation findings are warnings by design: the command always exits 0
//! so that downstream tooling (synthesis, provisioning) can decide for
//! itself whether to proceed.

use tracing::instrument;

use crate::{
    cli::{CheckArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(
    args: CheckArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let manifest = super::manifest_path(&global, &config);
    let provider = args
        .provider
        .unwrap_or_else(|| config.defaults.provider.clone());

    let service = super::dependency_service();
    let report = service
        .check(&manifest, &provider)
        .map_err(CliError::Core)?;

    output.header("Dependency check")?;
    output.print(&format!("  Manifest:     {}", manifest.display()))?;
    output.print(&format!("  Provider:     {provider}"))?;
    output.print(&format!("  Dependencies: {}", report.dependency_count))?;
    output.print("")?;

    for issue in &report.issues {
        output.warning(issue)?;
    }
    for cycle in &report.cycles {
        output.warning(cycle)?;
    }

    if report.is_clean() {
        output.success("No dependency issues found")?;
    } else {
        let total = report.issues.len() + report.cycles.len();
        output.warning(&format!(
            "{total} finding(s) — provisioning may still proceed"
        ))?;
    }

    Ok(())
}
