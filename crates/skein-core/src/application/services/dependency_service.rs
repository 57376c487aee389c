//! Dependency Service - main application orchestrator.
//!
//! This service coordinates the dependency use cases:
//! 1. Load the manifest through the store port
//! 2. Resolve missing arguments interactively through the console port
//! 3. Apply the domain operation
//! 4. Persist the full project state back
//!
//! It implements the driving port (incoming) and uses driven ports
//! (outgoing).

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Console, ManifestStore},
        providers, reporting,
    },
    domain::{
        DomainError, ProjectConfig, ServiceDependencyView, dependency_view, dependency_views,
        detect_cyclic_dependencies, validate_service_dependencies,
    },
    error::SkeinResult,
};

/// Result of a successful add operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub source: String,
    pub target: String,
    /// Cycles present after the edge was persisted. Non-empty means the
    /// add closed a loop; the operation still succeeded — cycles are a
    /// structural finding, never a mutation failure.
    pub cycles: Vec<String>,
}

/// Result of a remove operation that did not error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The edge was deleted and the manifest saved.
    Removed { source: String, target: String },
    /// The user declined the confirmation prompt; nothing was changed.
    Cancelled,
}

/// Aggregated validation findings for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Total number of declared dependency edges.
    pub dependency_count: usize,
    /// Dangling references (one line per violation).
    pub issues: Vec<String>,
    /// Cycle reports (at most one per DFS root).
    pub cycles: Vec<String>,
}

impl CheckReport {
    /// `true` when neither issues nor cycles were found.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.cycles.is_empty()
    }
}

/// Main dependency management service.
///
/// Orchestrates manifest load, interactive resolution, domain mutation and
/// persistence.
pub struct DependencyService {
    store: Box<dyn ManifestStore>,
    console: Box<dyn Console>,
}

impl DependencyService {
    /// Create a new dependency service with the given adapters.
    pub fn new(store: Box<dyn ManifestStore>, console: Box<dyn Console>) -> Self {
        Self { store, console }
    }

    /// List dependency views — all services, or a single named one.
    ///
    /// Naming a service absent from the project is an error, not an empty
    /// result.
    pub fn list(
        &self,
        manifest: &Path,
        filter: Option<&str>,
    ) -> SkeinResult<Vec<ServiceDependencyView>> {
        let project = self.store.load(manifest)?;

        if project.services.is_empty() {
            return Err(ApplicationError::NoServices.into());
        }

        match filter {
            Some(name) => Ok(vec![dependency_view(&project, name)?]),
            None => Ok(dependency_views(&project)),
        }
    }

    /// Record that `source` depends on `target`, prompting for any missing
    /// argument, and persist the manifest.
    ///
    /// Adding an edge never fails because it would close a cycle; instead
    /// the resulting cycles (if any) are returned on the outcome and logged
    /// as warnings.
    #[instrument(skip_all, fields(manifest = %manifest.display()))]
    pub fn add(
        &self,
        manifest: &Path,
        source: Option<&str>,
        target: Option<&str>,
        force: bool,
    ) -> SkeinResult<AddOutcome> {
        let mut project = self.store.load(manifest)?;

        if project.services.is_empty() {
            return Err(ApplicationError::NoServices.into());
        }

        let names = project.service_names();

        let source = match source {
            Some(name) => name.to_owned(),
            None => self.select_from("Select a service", &names)?,
        };

        if !project.has_service(&source) {
            return Err(DomainError::ServiceNotFound { name: source }.into());
        }

        let target = match target {
            Some(name) => name.to_owned(),
            None => {
                let candidates: Vec<String> =
                    names.iter().filter(|n| **n != source).cloned().collect();
                if candidates.is_empty() {
                    return Err(ApplicationError::NoCandidateServices.into());
                }
                self.select_from(
                    &format!("Select a service that {source} depends on"),
                    &candidates,
                )?
            }
        };

        project.add_dependency(&source, &target, force)?;
        self.store.save(&project, manifest)?;

        info!(source = %source, target = %target, "dependency created");

        let cycles = detect_cyclic_dependencies(&project);
        for cycle in &cycles {
            warn!(%cycle, "dependency added to manifest closes a cycle");
        }

        Ok(AddOutcome {
            source,
            target,
            cycles,
        })
    }

    /// Delete the edge from `source` to `target`, prompting for missing
    /// arguments and (unless forced) for confirmation.
    ///
    /// Declining the confirmation is a successful no-op, reported as
    /// [`RemoveOutcome::Cancelled`].
    #[instrument(skip_all, fields(manifest = %manifest.display()))]
    pub fn remove(
        &self,
        manifest: &Path,
        source: Option<&str>,
        target: Option<&str>,
        force: bool,
    ) -> SkeinResult<RemoveOutcome> {
        let mut project = self.store.load(manifest)?;

        if project.services.is_empty() {
            return Err(ApplicationError::NoServices.into());
        }

        let names = project.service_names();

        let source = match source {
            Some(name) => name.to_owned(),
            None => self.select_from("Select a service to remove dependencies from", &names)?,
        };

        let service = project
            .services
            .get(&source)
            .ok_or_else(|| DomainError::ServiceNotFound {
                name: source.clone(),
            })?;

        let dependencies = service.dependencies().to_vec();
        if dependencies.is_empty() {
            return Err(DomainError::NoDependencies { service: source }.into());
        }

        let target = match target {
            Some(name) => name.to_owned(),
            None => self.select_from(
                &format!("Select a dependency to remove from {source}"),
                &dependencies,
            )?,
        };

        if !dependencies.iter().any(|d| *d == target) {
            return Err(DomainError::DependencyNotFound { src: source, target }.into());
        }

        if !force {
            let confirmed = self.console.confirm(
                &format!(
                    "Are you sure you want to remove the dependency from '{source}' to '{target}'?"
                ),
                false,
            )?;
            if !confirmed {
                info!(source = %source, target = %target, "dependency removal cancelled");
                return Ok(RemoveOutcome::Cancelled);
            }
        }

        project.remove_dependency(&source, &target)?;
        self.store.save(&project, manifest)?;

        info!(source = %source, target = %target, "dependency removed");

        Ok(RemoveOutcome::Removed { source, target })
    }

    /// Validate the project's dependency declarations.
    ///
    /// Findings are warnings by design — this never fails on a dangling
    /// reference or a cycle. Also logs the dependency summary and runs the
    /// selected provider's diagnostic expression pass.
    #[instrument(skip_all, fields(manifest = %manifest.display(), provider = %provider_key))]
    pub fn check(&self, manifest: &Path, provider_key: &str) -> SkeinResult<CheckReport> {
        let project = self.store.load(manifest)?;

        let issues = validate_service_dependencies(&project);
        let cycles = detect_cyclic_dependencies(&project);

        reporting::log_dependency_summary(&project);
        providers::handler_for_provider(provider_key).process_dependencies(&project);

        Ok(CheckReport {
            dependency_count: project.dependency_count(),
            issues,
            cycles,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Prompt for one of `options`, guarding against out-of-range answers.
    fn select_from(&self, prompt: &str, options: &[String]) -> SkeinResult<String> {
        let index = self.console.select_one(prompt, options)?;
        options
            .get(index)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::Prompt {
                    reason: format!("selection index {index} out of range"),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceConfig;
    use crate::error::SkeinError;
    use mockall::mock;

    mock! {
        Store {}
        impl ManifestStore for Store {
            fn load(&self, path: &Path) -> SkeinResult<ProjectConfig>;
            fn save(&self, project: &ProjectConfig, path: &Path) -> SkeinResult<()>;
        }
    }

    mock! {
        Prompter {}
        impl Console for Prompter {
            fn select_one(&self, prompt: &str, options: &[String]) -> SkeinResult<usize>;
            fn confirm(&self, prompt: &str, default: bool) -> SkeinResult<bool>;
        }
    }

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

    fn sample_project() -> ProjectConfig {
        ProjectConfig::new("sample")
            .with_service("api", service(&[]))
            .with_service("database", service(&[]))
            .with_service("web", service(&["api"]))
    }

    fn manifest() -> &'static Path {
        Path::new("skein.yaml")
    }

    // ── add ───────────────────────────────────────────────────────────────

    #[test]
    fn add_with_explicit_arguments_persists_edge() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(sample_project()));
        store
            .expect_save()
            .withf(|project, _| project.services["api"].depends_on("database"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = DependencyService::new(Box::new(store), Box::new(MockPrompter::new()));
        let outcome = service
            .add(manifest(), Some("api"), Some("database"), false)
            .unwrap();

        assert_eq!(outcome.source, "api");
        assert_eq!(outcome.target, "database");
        assert!(outcome.cycles.is_empty());
    }

    #[test]
    fn add_duplicate_without_force_does_not_save() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(sample_project()));
        store.expect_save().times(0);

        let service = DependencyService::new(Box::new(store), Box::new(MockPrompter::new()));
        let err = service
            .add(manifest(), Some("web"), Some("api"), false)
            .unwrap_err();

        assert!(matches!(
            err,
            SkeinError::Domain(DomainError::DependencyExists { .. })
        ));
    }

    #[test]
    fn add_duplicate_with_force_is_noop_success() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(sample_project()));
        store
            .expect_save()
            .withf(|project, _| {
                project.services["web"]
                    .dependencies()
                    .iter()
                    .filter(|d| *d == "api")
                    .count()
                    == 1
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = DependencyService::new(Box::new(store), Box::new(MockPrompter::new()));
        service
            .add(manifest(), Some("web"), Some("api"), true)
            .unwrap();
    }

    #[test]
    fn add_reports_cycle_on_outcome() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(sample_project()));
        store.expect_save().returning(|_, _| Ok(()));

        let service = DependencyService::new(Box::new(store), Box::new(MockPrompter::new()));
        // web already depends on api; api -> web closes the loop.
        let outcome = service
            .add(manifest(), Some("api"), Some("web"), false)
            .unwrap();

        assert_eq!(outcome.cycles.len(), 1);
        assert!(outcome.cycles[0].contains("api"));
        assert!(outcome.cycles[0].contains("web"));
    }

    #[test]
    fn add_on_empty_project_fails() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(ProjectConfig::new("empty")));

        let service = DependencyService::new(Box::new(store), Box::new(MockPrompter::new()));
        let err = service
            .add(manifest(), Some("api"), Some("database"), false)
            .unwrap_err();

        assert!(matches!(
            err,
            SkeinError::Application(ApplicationError::NoServices)
        ));
    }

    #[test]
    fn add_unknown_target_fails_naming_it() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(sample_project()));

        let service = DependencyService::new(Box::new(store), Box::new(MockPrompter::new()));
        let err = service
            .add(manifest(), Some("api"), Some("ghost"), false)
            .unwrap_err();

        assert!(
            matches!(err, SkeinError::Domain(DomainError::ServiceNotFound { name }) if name == "ghost")
        );
    }

    #[test]
    fn add_prompts_for_missing_arguments() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(sample_project()));
        store
            .expect_save()
            .withf(|project, _| project.services["database"].depends_on("api"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut console = MockPrompter::new();
        // First prompt: full sorted list [api, database, web] — pick "database".
        console
            .expect_select_one()
            .withf(|prompt, options| {
                prompt == "Select a service" && options == ["api", "database", "web"]
            })
            .times(1)
            .returning(|_, _| Ok(1));
        // Second prompt: source excluded — [api, web] — pick "api".
        console
            .expect_select_one()
            .withf(|prompt, options| {
                prompt == "Select a service that database depends on"
                    && options == ["api", "web"]
            })
            .times(1)
            .returning(|_, _| Ok(0));

        let service = DependencyService::new(Box::new(store), Box::new(console));
        let outcome = service.add(manifest(), None, None, false).unwrap();

        assert_eq!(outcome.source, "database");
        assert_eq!(outcome.target, "api");
    }

    // ── remove ────────────────────────────────────────────────────────────

    #[test]
    fn remove_forced_skips_confirmation() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(sample_project()));
        store
            .expect_save()
            .withf(|project, _| project.services["web"].depends_on.is_none())
            .times(1)
            .returning(|_, _| Ok(()));

        let mut console = MockPrompter::new();
        console.expect_confirm().times(0);

        let service = DependencyService::new(Box::new(store), Box::new(console));
        let outcome = service
            .remove(manifest(), Some("web"), Some("api"), true)
            .unwrap();

        assert_eq!(
            outcome,
            RemoveOutcome::Removed {
                source: "web".into(),
                target: "api".into()
            }
        );
    }

    #[test]
    fn remove_declined_confirmation_is_cancelled() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(sample_project()));
        store.expect_save().times(0);

        let mut console = MockPrompter::new();
        console
            .expect_confirm()
            .withf(|prompt, default| {
                prompt.contains("'web'") && prompt.contains("'api'") && !*default
            })
            .times(1)
            .returning(|_, _| Ok(false));

        let service = DependencyService::new(Box::new(store), Box::new(console));
        let outcome = service
            .remove(manifest(), Some("web"), Some("api"), false)
            .unwrap();

        assert_eq!(outcome, RemoveOutcome::Cancelled);
    }

    #[test]
    fn remove_from_service_without_dependencies_fails() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(sample_project()));

        let service = DependencyService::new(Box::new(store), Box::new(MockPrompter::new()));
        let err = service
            .remove(manifest(), Some("api"), Some("database"), true)
            .unwrap_err();

        assert!(matches!(
            err,
            SkeinError::Domain(DomainError::NoDependencies { .. })
        ));
    }

    #[test]
    fn remove_missing_edge_fails() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(sample_project()));

        let service = DependencyService::new(Box::new(store), Box::new(MockPrompter::new()));
        let err = service
            .remove(manifest(), Some("web"), Some("database"), true)
            .unwrap_err();

        assert!(matches!(
            err,
            SkeinError::Domain(DomainError::DependencyNotFound { .. })
        ));
    }

    #[test]
    fn remove_prompts_with_current_dependencies() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(sample_project()));
        store.expect_save().returning(|_, _| Ok(()));

        let mut console = MockPrompter::new();
        console
            .expect_select_one()
            .withf(|prompt, options| {
                prompt == "Select a dependency to remove from web" && options == ["api"]
            })
            .times(1)
            .returning(|_, _| Ok(0));

        let service = DependencyService::new(Box::new(store), Box::new(console));
        let outcome = service.remove(manifest(), Some("web"), None, true).unwrap();

        assert_eq!(
            outcome,
            RemoveOutcome::Removed {
                source: "web".into(),
                target: "api".into()
            }
        );
    }

    // ── list ──────────────────────────────────────────────────────────────

    #[test]
    fn list_returns_sorted_views() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(sample_project()));

        let service = DependencyService::new(Box::new(store), Box::new(MockPrompter::new()));
        let views = service.list(manifest(), None).unwrap();

        assert_eq!(views.len(), 3);
        assert_eq!(views[0].service, "api");
        assert_eq!(views[0].required_by, ["web"]);
    }

    #[test]
    fn list_filter_on_unknown_service_fails() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(sample_project()));

        let service = DependencyService::new(Box::new(store), Box::new(MockPrompter::new()));
        let err = service.list(manifest(), Some("ghost")).unwrap_err();

        assert!(matches!(
            err,
            SkeinError::Domain(DomainError::ServiceNotFound { .. })
        ));
    }

    #[test]
    fn list_on_empty_project_fails() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(ProjectConfig::new("empty")));

        let service = DependencyService::new(Box::new(store), Box::new(MockPrompter::new()));
        assert!(service.list(manifest(), None).is_err());
    }

    // ── check ─────────────────────────────────────────────────────────────

    #[test]
    fn check_collects_issues_and_cycles() {
        let mut store = MockStore::new();
        store.expect_load().returning(|_| {
            Ok(ProjectConfig::new("p")
                .with_service("a", service(&["b", "ghost"]))
                .with_service("b", service(&["a"])))
        });

        let svc = DependencyService::new(Box::new(store), Box::new(MockPrompter::new()));
        let report = svc.check(manifest(), "bicep").unwrap();

        assert_eq!(report.dependency_count, 3);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.cycles.len(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn check_on_clean_project_is_clean() {
        let mut store = MockStore::new();
        store
            .expect_load()
            .returning(|_| Ok(sample_project()));

        let svc = DependencyService::new(Box::new(store), Box::new(MockPrompter::new()));
        let report = svc.check(manifest(), "terraform").unwrap();

        assert!(report.is_clean());
        assert_eq!(report.dependency_count, 1);
    }
}
