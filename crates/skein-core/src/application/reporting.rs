//! Dependency reporting: operational logging of the graph state.

use tracing::{info, warn};

use crate::domain::{ProjectConfig, build_dependency_graph, detect_cyclic_dependencies};

/// Log a summary of the project's dependency declarations.
///
/// Reports the total edge count, each service's dependency list, and any
/// detected cycles (as warnings). A project without dependencies logs
/// nothing.
pub fn log_dependency_summary(project: &ProjectConfig) {
    let dependency_count = project.dependency_count();
    if dependency_count == 0 {
        return;
    }

    info!(count = dependency_count, "found service dependencies in manifest");

    for (service, dependencies) in build_dependency_graph(project) {
        if !dependencies.is_empty() {
            info!(
                service = %service,
                depends_on = %dependencies.join(", "),
                "service dependencies"
            );
        }
    }

    let cycles = detect_cyclic_dependencies(project);
    if !cycles.is_empty() {
        warn!("cyclic dependencies detected in service configuration:");
        for cycle in &cycles {
            warn!("  - {cycle}");
        }
    }
}
