//! Dependency graph queries: forward adjacency and the derived
//! "required by" view.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{entities::ProjectConfig, error::DomainError};

/// Build the forward adjacency map of the project.
///
/// Every declared service appears as a key; services without dependencies
/// map to an explicit empty list, never a missing entry. Pure read — the
/// project is not modified.
pub fn build_dependency_graph(project: &ProjectConfig) -> BTreeMap<String, Vec<String>> {
    project
        .services
        .iter()
        .map(|(name, service)| (name.clone(), service.dependencies().to_vec()))
        .collect()
}

/// Bidirectional dependency view of one service, for display.
///
/// `required_by` is derived from the forward edges on demand; it is never
/// persisted. Both lists are lexicographically sorted and default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDependencyView {
    /// Service name.
    pub service: String,
    /// Services this one depends on (sorted).
    pub depends_on: Vec<String>,
    /// Services that depend on this one (sorted).
    pub required_by: Vec<String>,
}

/// Compute the dependency view of every service, sorted by name.
pub fn dependency_views(project: &ProjectConfig) -> Vec<ServiceDependencyView> {
    let mut views: BTreeMap<&str, ServiceDependencyView> = project
        .services
        .keys()
        .map(|name| {
            (
                name.as_str(),
                ServiceDependencyView {
                    service: name.clone(),
                    depends_on: Vec::new(),
                    required_by: Vec::new(),
                },
            )
        })
        .collect();

    for (name, service) in &project.services {
        for dependency in service.dependencies() {
            views
                .get_mut(name.as_str())
                .expect("every service has a view")
                .depends_on
                .push(dependency.clone());

            // Dangling references have no view to attach to; the existence
            // validator reports them separately.
            if let Some(view) = views.get_mut(dependency.as_str()) {
                view.required_by.push(name.clone());
            }
        }
    }

    let mut result: Vec<ServiceDependencyView> = views.into_values().collect();
    for view in &mut result {
        view.depends_on.sort();
        view.required_by.sort();
    }
    result
}

/// Look up the dependency view of a single named service.
///
/// A name absent from the project is an error, not an empty view.
pub fn dependency_view(
    project: &ProjectConfig,
    name: &str,
) -> Result<ServiceDependencyView, DomainError> {
    if !project.has_service(name) {
        return Err(DomainError::ServiceNotFound {
            name: name.to_owned(),
        });
    }

    Ok(dependency_views(project)
        .into_iter()
        .find(|v| v.service == name)
        .expect("existence checked above"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ServiceConfig;

    fn service(deps: &[&str]) -> ServiceConfig {
        ServiceConfig {
            depends_on: if deps.is_empty() {
                None
            } else {
                Some(deps.iter().map(ToString::to_string).collect())
            },
            ..Default::default()
        }
    }

    #[test]
    fn graph_includes_dependency_free_services() {
        let project = ProjectConfig::new("p")
            .with_service("a", service(&[]))
            .with_service("b", service(&["a"]));

        let graph = build_dependency_graph(&project);
        assert_eq!(graph["a"], Vec::<String>::new());
        assert_eq!(graph["b"], vec!["a".to_string()]);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn graph_on_empty_project_is_empty() {
        assert!(build_dependency_graph(&ProjectConfig::new("p")).is_empty());
    }

    #[test]
    fn views_derive_required_by() {
        let project = ProjectConfig::new("p")
            .with_service("api", service(&["database"]))
            .with_service("database", service(&[]))
            .with_service("web", service(&["api", "database"]));

        let views = dependency_views(&project);
        assert_eq!(views.len(), 3);
        // Sorted by service name.
        assert_eq!(views[0].service, "api");
        assert_eq!(views[0].depends_on, ["database"]);
        assert_eq!(views[0].required_by, ["web"]);
        assert_eq!(views[1].service, "database");
        assert!(views[1].depends_on.is_empty());
        assert_eq!(views[1].required_by, ["api", "web"]);
        assert_eq!(views[2].service, "web");
        assert_eq!(views[2].depends_on, ["api", "database"]);
        assert!(views[2].required_by.is_empty());
    }

    #[test]
    fn view_lists_are_sorted() {
        let project = ProjectConfig::new("p")
            .with_service("a", service(&[]))
            .with_service("b", service(&[]))
            .with_service("z", service(&["b", "a"]));

        let views = dependency_views(&project);
        let z = views.iter().find(|v| v.service == "z").unwrap();
        assert_eq!(z.depends_on, ["a", "b"]);
    }

    #[test]
    fn single_view_lookup() {
        let project = ProjectConfig::new("p")
            .with_service("api", service(&["database"]))
            .with_service("database", service(&[]));

        let view = dependency_view(&project, "database").unwrap();
        assert_eq!(view.service, "database");
        assert_eq!(view.required_by, ["api"]);
    }

    #[test]
    fn unknown_service_lookup_is_an_error() {
        let project = ProjectConfig::new("p").with_service("api", service(&[]));
        let err = dependency_view(&project, "ghost").unwrap_err();
        assert!(matches!(err, DomainError::ServiceNotFound { name } if name == "ghost"));
    }

    #[test]
    fn dangling_reference_does_not_break_views() {
        let project = ProjectConfig::new("p").with_service("api", service(&["ghost"]));
        let views = dependency_views(&project);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].depends_on, ["ghost"]);
    }

    #[test]
    fn view_serializes_in_camel_case() {
        let view = ServiceDependencyView {
            service: "api".into(),
            depends_on: vec!["db".into()],
            required_by: vec![],
        };
        let json = serde_json::to_string(&view).unwrap();
        assert!(json.contains("\"dependsOn\""));
        assert!(json.contains("\"requiredBy\""));
    }
}
