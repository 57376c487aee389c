//! Dependency validation: referential integrity and cycle detection.
//!
//! Both checks are read-only and never fail — findings come back as
//! human-readable strings, an empty list meaning the project is clean.
//! Callers decide what to do with them; nothing here aborts an operation.

use std::collections::HashSet;

use crate::domain::entities::ProjectConfig;

/// Check that every declared dependency names an existing service.
///
/// Returns one issue string per dangling reference, in service order.
pub fn validate_service_dependencies(project: &ProjectConfig) -> Vec<String> {
    let mut issues = Vec::new();

    if project.services.is_empty() {
        return issues; // No services to validate
    }

    for (service_name, service) in &project.services {
        for dependency in service.dependencies() {
            if !project.has_service(dependency) {
                issues.push(format!(
                    "Service '{service_name}' depends on '{dependency}', \
                     but this service doesn't exist in the project."
                ));
            }
        }
    }

    issues
}

/// Detect cycles in the dependency graph.
///
/// Depth-first search started once from every unvisited service, so the
/// whole forest is covered regardless of entry point. The visited set and
/// the current path are threaded through the recursion as explicit
/// parameters.
///
/// At most one cycle is reported per DFS root: once a traversal hits a
/// cycle it stops, and a service already visited by an earlier traversal is
/// never explored again. The result is a bounded report, not an exhaustive
/// enumeration of every cycle in the graph.
pub fn detect_cyclic_dependencies(project: &ProjectConfig) -> Vec<String> {
    let mut cycles = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();

    for root in project.services.keys() {
        if !visited.contains(root.as_str()) {
            let mut path = Vec::new();
            visit(project, root, &mut visited, &mut path, &mut cycles);
        }
    }

    cycles
}

/// Recursive step: explore `current`, reporting the first cycle found.
///
/// Returns `true` when a cycle was recorded, which unwinds the whole
/// traversal for this root.
fn visit(
    project: &ProjectConfig,
    current: &str,
    visited: &mut HashSet<String>,
    path: &mut Vec<String>,
    cycles: &mut Vec<String>,
) -> bool {
    visited.insert(current.to_owned());
    path.push(current.to_owned());

    if let Some(service) = project.services.get(current) {
        for dependency in service.dependencies() {
            if !visited.contains(dependency.as_str()) {
                if visit(project, dependency, visited, path, cycles) {
                    return true;
                }
            } else if let Some(start) = path.iter().position(|name| name == dependency) {
                // The dependency sits on the current path: close the loop
                // from its first occurrence through the current service.
                let mut cycle: Vec<&str> = path[start..].iter().map(String::as_str).collect();
                cycle.push(dependency);
                cycles.push(format!(
                    "Cyclic dependency detected: {}",
                    cycle.join(" -> ")
                ));
                return true;
            }
            // Visited but not on the path: already verified acyclic.
        }
    }

    path.pop();
    false
}
