//! Provider-specific dependency expression formatting.
//!
//! Each infrastructure provider has its own syntax for "this resource
//! depends on those": Bicep uses `dependsOn: [...]` arrays of resource-id
//! references, Terraform uses `depends_on = [...]` lists of module
//! references. The set of providers is closed, so selection is a tagged
//! enum dispatched through the [`DependencyHandler`] trait rather than a
//! string-keyed lookup.

use std::fmt;

use tracing::{debug, info, warn};

use crate::domain::ProjectConfig;

/// Supported infrastructure providers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Bicep, the default provider.
    #[default]
    Bicep,
    /// HashiCorp Terraform.
    Terraform,
}

impl Provider {
    /// Resolve a provider from its configuration key, case-insensitively.
    ///
    /// An empty key means "use the default". An unrecognized key logs a
    /// warning and falls back to the default rather than failing.
    pub fn from_key(key: &str) -> Self {
        match key.to_ascii_lowercase().as_str() {
            "terraform" => Self::Terraform,
            "bicep" | "" => Self::Bicep,
            other => {
                warn!(provider = other, "unknown infrastructure provider, using bicep handler");
                Self::Bicep
            }
        }
    }

    /// The dependency handler for this provider.
    pub fn handler(self) -> &'static dyn DependencyHandler {
        match self {
            Self::Bicep => &BicepDependencies,
            Self::Terraform => &TerraformDependencies,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bicep => write!(f, "bicep"),
            Self::Terraform => write!(f, "terraform"),
        }
    }
}

/// Convenience: resolve a handler straight from a provider key.
pub fn handler_for_provider(key: &str) -> &'static dyn DependencyHandler {
    Provider::from_key(key).handler()
}

/// Strategy for rendering dependency lists in a provider's native syntax.
pub trait DependencyHandler: Send + Sync {
    /// The provider this handler renders for.
    fn provider(&self) -> Provider;

    /// Render the dependsOn expression for `service`.
    ///
    /// An empty dependency list yields an empty string — no expression is
    /// emitted at all.
    fn format_depends_on(&self, service: &str, dependencies: &[String]) -> String;

    /// Render the dependsOn expression with a caller-supplied namespace
    /// prefix, for emission into generated per-provider module trees.
    ///
    /// This is a distinct formatting mode from [`Self::format_depends_on`],
    /// not a wrapper around it.
    fn format_depends_on_prefixed(&self, dependencies: &[String], prefix: &str) -> String;

    /// Log the formatted expression for every service with dependencies.
    ///
    /// Diagnostic only — no files are synthesized here; external code
    /// generation is expected to replace this with real emission. A project
    /// without dependencies is a no-op.
    fn process_dependencies(&self, project: &ProjectConfig) {
        if project.dependency_count() == 0 {
            return;
        }

        info!(
            provider = %self.provider(),
            count = project.dependency_count(),
            "processing service dependencies"
        );

        for (name, service) in &project.services {
            if service.has_dependencies() {
                let expr = self.format_depends_on(name, service.dependencies());
                debug!(service = %name, expression = %expr, "dependency expression");
            }
        }
    }
}

/// Bicep: `dependsOn: [resource_<dep>.id, ...]`.
pub struct BicepDependencies;

impl DependencyHandler for BicepDependencies {
    fn provider(&self) -> Provider {
        Provider::Bicep
    }

    fn format_depends_on(&self, _service: &str, dependencies: &[String]) -> String {
        if dependencies.is_empty() {
            return String::new();
        }

        let items: Vec<String> = dependencies
            .iter()
            .map(|dep| format!("resource_{dep}.id"))
            .collect();

        format!("dependsOn: [{}]", items.join(", "))
    }

    fn format_depends_on_prefixed(&self, dependencies: &[String], prefix: &str) -> String {
        if dependencies.is_empty() {
            return String::new();
        }

        let items: Vec<String> = dependencies
            .iter()
            .map(|dep| format!("{prefix}_{dep}.id"))
            .collect();

        format!("dependsOn: [{}]", items.join(", "))
    }
}

/// Terraform: `depends_on = [module.<dep>, ...]`.
pub struct TerraformDependencies;

impl DependencyHandler for TerraformDependencies {
    fn provider(&self) -> Provider {
        Provider::Terraform
    }

    fn format_depends_on(&self, _service: &str, dependencies: &[String]) -> String {
        if dependencies.is_empty() {
            return String::new();
        }

        let items: Vec<String> = dependencies
            .iter()
            .map(|dep| format!("module.{dep}"))
            .collect();

        format!("depends_on = [{}]", items.join(", "))
    }

    fn format_depends_on_prefixed(&self, dependencies: &[String], prefix: &str) -> String {
        if dependencies.is_empty() {
            return String::new();
        }

        let items: Vec<String> = dependencies
            .iter()
            .map(|dep| format!("module.{prefix}_{dep}"))
            .collect();

        format!("depends_on = [{}]", items.join(", "))
    }
}
