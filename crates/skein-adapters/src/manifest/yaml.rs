//! YAML manifest store using std::fs + serde_yaml.

use std::path::Path;

use tracing::debug;

use skein_core::{
    application::{ApplicationError, ports::ManifestStore},
    domain::ProjectConfig,
    error::{SkeinError, SkeinResult},
};

/// Production manifest store reading and writing `skein.yaml`.
#[derive(Debug, Clone, Copy)]
pub struct YamlManifestStore;

impl YamlManifestStore {
    /// Create a new YAML manifest store.
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlManifestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestStore for YamlManifestStore {
    fn load(&self, path: &Path) -> SkeinResult<ProjectConfig> {
        let raw = std::fs::read_to_string(path).map_err(|e| map_error(path, "load", e))?;

        let project: ProjectConfig =
            serde_yaml::from_str(&raw).map_err(|e| map_error(path, "parse", e))?;

        debug!(
            path = %path.display(),
            services = project.services.len(),
            "manifest loaded"
        );

        Ok(project)
    }

    fn save(&self, project: &ProjectConfig, path: &Path) -> SkeinResult<()> {
        // Canonical persisted shape: a service with zero dependencies is
        // written without a dependsOn key, even if the in-memory list was
        // an explicit empty sequence on load.
        let mut canonical = project.clone();
        for service in canonical.services.values_mut() {
            service.canonicalize();
        }

        let raw = serde_yaml::to_string(&canonical).map_err(|e| map_error(path, "save", e))?;
        std::fs::write(path, raw).map_err(|e| map_error(path, "save", e))?;

        debug!(path = %path.display(), "manifest saved");

        Ok(())
    }
}

fn map_error(path: &Path, op: &'static str, e: impl std::fmt::Display) -> SkeinError {
    ApplicationError::Manifest {
        op,
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
