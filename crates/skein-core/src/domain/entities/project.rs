//! The `ProjectConfig` aggregate root.
//!
//! A `ProjectConfig` is the in-memory form of the project manifest: a name
//! plus a map from service name to [`ServiceConfig`]. The map is a
//! `BTreeMap` so iteration (and therefore every derived listing) is
//! alphabetical and deterministic.
//!
//! The dependency mutations on this type are pure: they validate their
//! preconditions, edit the in-memory state, and leave persistence to the
//! application layer. Creating a cycle through `add_dependency` is possible
//! and is only surfaced by the separate validation pass — mutation and
//! validation are deliberately decoupled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{entities::service::ServiceConfig, error::DomainError};

/// The project manifest: a named collection of services.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name.
    pub name: String,

    /// Services keyed by unique name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub services: BTreeMap<String, ServiceConfig>,
}

impl ProjectConfig {
    /// Create an empty project with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            services: BTreeMap::new(),
        }
    }

    /// Builder-style helper: add a service entry.
    pub fn with_service(mut self, name: impl Into<String>, config: ServiceConfig) -> Self {
        self.services.insert(name.into(), config);
        self
    }

    /// `true` when `name` is a declared service.
    pub fn has_service(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    /// All service names, in alphabetical order.
    pub fn service_names(&self) -> Vec<String> {
        self.services.keys().cloned().collect()
    }

    /// Total number of declared dependency edges.
    pub fn dependency_count(&self) -> usize {
        self.services.values().map(|s| s.dependencies().len()).sum()
    }

    /// Record that `source` depends on `target`.
    ///
    /// Both endpoints must already be declared services. An existing edge is
    /// a conflict unless `force` is set, in which case the call is a no-op
    /// success — force never appends a duplicate.
    pub fn add_dependency(
        &mut self,
        source: &str,
        target: &str,
        force: bool,
    ) -> Result<(), DomainError> {
        if !self.has_service(source) {
            return Err(DomainError::ServiceNotFound {
                name: source.to_owned(),
            });
        }
        if !self.has_service(target) {
            return Err(DomainError::ServiceNotFound {
                name: target.to_owned(),
            });
        }

        let service = self
            .services
            .get_mut(source)
            .expect("source existence checked above");

        if service.depends_on(target) {
            if force {
                return Ok(());
            }
            return Err(DomainError::DependencyExists {
                src: source.to_owned(),
                target: target.to_owned(),
            });
        }

        service
            .depends_on
            .get_or_insert_with(Vec::new)
            .push(target.to_owned());

        Ok(())
    }

    /// Delete the edge from `source` to `target`.
    ///
    /// Removes the first exact-name match only; a list emptied by the
    /// removal is reset to the canonical absent shape.
    pub fn remove_dependency(&mut self, source: &str, target: &str) -> Result<(), DomainError> {
        let service = self
            .services
            .get_mut(source)
            .ok_or_else(|| DomainError::ServiceNotFound {
                name: source.to_owned(),
            })?;

        if !service.has_dependencies() {
            return Err(DomainError::NoDependencies {
                service: source.to_owned(),
            });
        }

        let deps = service
            .depends_on
            .as_mut()
            .expect("has_dependencies checked above");

        let index =
            deps.iter()
                .position(|d| d == target)
                .ok_or_else(|| DomainError::DependencyNotFound {
                    src: source.to_owned(),
                    target: target.to_owned(),
                })?;

        deps.remove(index);
        service.canonicalize();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectConfig {
        ProjectConfig::new("sample")
            .with_service("api", ServiceConfig::default())
            .with_service("database", ServiceConfig::default())
            .with_service("web", ServiceConfig::default())
    }

    // ── add_dependency ────────────────────────────────────────────────────

    #[test]
    fn add_creates_edge() {
        let mut project = sample();
        project.add_dependency("api", "database", false).unwrap();
        assert_eq!(
            project.services["api"].dependencies(),
            ["database".to_string()]
        );
    }

    #[test]
    fn add_unknown_source_fails() {
        let mut project = sample();
        let err = project.add_dependency("ghost", "api", false).unwrap_err();
        assert!(matches!(err, DomainError::ServiceNotFound { name } if name == "ghost"));
    }

    #[test]
    fn add_unknown_target_fails() {
        let mut project = sample();
        let err = project.add_dependency("api", "ghost", false).unwrap_err();
        assert!(matches!(err, DomainError::ServiceNotFound { name } if name == "ghost"));
    }

    #[test]
    fn add_duplicate_without_force_is_conflict() {
        let mut project = sample();
        project.add_dependency("api", "database", false).unwrap();
        let err = project
            .add_dependency("api", "database", false)
            .unwrap_err();
        assert!(matches!(err, DomainError::DependencyExists { .. }));
    }

    #[test]
    fn add_duplicate_with_force_is_noop() {
        let mut project = sample();
        project.add_dependency("api", "database", false).unwrap();
        project.add_dependency("api", "database", true).unwrap();
        // force does not re-append
        assert_eq!(
            project.services["api"].dependencies(),
            ["database".to_string()]
        );
    }

    #[test]
    fn add_initializes_absent_list() {
        let mut project = sample();
        assert_eq!(project.services["web"].depends_on, None);
        project.add_dependency("web", "api", false).unwrap();
        assert_eq!(
            project.services["web"].depends_on,
            Some(vec!["api".to_string()])
        );
    }

    #[test]
    fn add_self_edge_is_permitted() {
        // Cycles (including 1-node cycles) are a validation concern, not a
        // mutation-time failure.
        let mut project = sample();
        project.add_dependency("api", "api", false).unwrap();
        assert!(project.services["api"].depends_on("api"));
    }

    // ── remove_dependency ─────────────────────────────────────────────────

    #[test]
    fn remove_deletes_edge() {
        let mut project = sample();
        project.add_dependency("api", "database", false).unwrap();
        project.add_dependency("api", "web", false).unwrap();
        project.remove_dependency("api", "database").unwrap();
        assert_eq!(project.services["api"].dependencies(), ["web".to_string()]);
    }

    #[test]
    fn remove_unknown_source_fails() {
        let mut project = sample();
        let err = project.remove_dependency("ghost", "api").unwrap_err();
        assert!(matches!(err, DomainError::ServiceNotFound { .. }));
    }

    #[test]
    fn remove_from_service_without_dependencies_fails() {
        let mut project = sample();
        let err = project.remove_dependency("api", "database").unwrap_err();
        assert!(matches!(err, DomainError::NoDependencies { .. }));
    }

    #[test]
    fn remove_missing_edge_fails() {
        let mut project = sample();
        project.add_dependency("api", "database", false).unwrap();
        let err = project.remove_dependency("api", "web").unwrap_err();
        assert!(matches!(err, DomainError::DependencyNotFound { .. }));
    }

    #[test]
    fn remove_last_edge_restores_canonical_shape() {
        let mut project = sample();
        project.add_dependency("api", "database", false).unwrap();
        project.remove_dependency("api", "database").unwrap();
        assert_eq!(project.services["api"].depends_on, None);
    }

    #[test]
    fn remove_deletes_first_match_only() {
        // Duplicates can exist on a loaded manifest; removal takes one.
        let mut project = sample();
        project.services.get_mut("api").unwrap().depends_on =
            Some(vec!["database".into(), "database".into()]);
        project.remove_dependency("api", "database").unwrap();
        assert_eq!(
            project.services["api"].dependencies(),
            ["database".to_string()]
        );
    }

    // ── queries ───────────────────────────────────────────────────────────

    #[test]
    fn service_names_are_sorted() {
        let project = ProjectConfig::new("p")
            .with_service("web", ServiceConfig::default())
            .with_service("api", ServiceConfig::default());
        assert_eq!(project.service_names(), ["api", "web"]);
    }

    #[test]
    fn dependency_count_sums_all_edges() {
        let mut project = sample();
        project.add_dependency("api", "database", false).unwrap();
        project.add_dependency("web", "api", false).unwrap();
        project.add_dependency("web", "database", false).unwrap();
        assert_eq!(project.dependency_count(), 3);
    }
}
