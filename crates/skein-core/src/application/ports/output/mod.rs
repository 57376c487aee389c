//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `skein-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ProjectConfig;
use crate::error::SkeinResult;

/// Port for manifest persistence.
///
/// Implemented by:
/// - `skein_adapters::manifest::YamlManifestStore` (production)
/// - `skein_adapters::manifest::InMemoryManifestStore` (testing)
///
/// ## Design Notes
///
/// - `save` always writes the full project state — there are no partial
///   writes, and no lock or optimistic-concurrency check; one invocation
///   owns one loaded, mutated, saved copy.
/// - A service whose dependency list is empty is persisted without a
///   `dependsOn` key (the canonical shape).
pub trait ManifestStore: Send + Sync {
    /// Load the project manifest from `path`.
    fn load(&self, path: &Path) -> SkeinResult<ProjectConfig>;

    /// Persist the full project state to `path`.
    fn save(&self, project: &ProjectConfig, path: &Path) -> SkeinResult<()>;
}

/// Port for interactive prompting.
///
/// Implemented by:
/// - `skein_adapters::console::TermConsole` (production)
/// - `skein_adapters::console::ScriptedConsole` (testing)
pub trait Console: Send + Sync {
    /// Ask the user to pick one of `options`; returns the chosen index.
    fn select_one(&self, prompt: &str, options: &[String]) -> SkeinResult<usize>;

    /// Ask a yes/no question with the given default answer.
    fn confirm(&self, prompt: &str, default: bool) -> SkeinResult<bool>;
}
