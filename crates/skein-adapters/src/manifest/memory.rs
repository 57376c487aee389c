//! In-memory manifest store adapter for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use skein_core::{
    application::{ApplicationError, ports::ManifestStore},
    domain::ProjectConfig,
    error::SkeinResult,
};

/// Thread-safe in-memory manifest store, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct InMemoryManifestStore {
    inner: Arc<RwLock<HashMap<PathBuf, ProjectConfig>>>,
}

impl InMemoryManifestStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one manifest.
    pub fn with_project(path: impl Into<PathBuf>, project: ProjectConfig) -> Self {
        let store = Self::new();
        store
            .inner
            .write()
            .expect("fresh lock")
            .insert(path.into(), project);
        store
    }

    /// Read back a stored manifest (testing helper).
    pub fn get(&self, path: &Path) -> Option<ProjectConfig> {
        self.inner.read().ok()?.get(path).cloned()
    }
}

impl ManifestStore for InMemoryManifestStore {
    fn load(&self, path: &Path) -> SkeinResult<ProjectConfig> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;

        inner.get(path).cloned().ok_or_else(|| {
            ApplicationError::Manifest {
                op: "load",
                path: path.to_path_buf(),
                reason: "no manifest stored at this path".into(),
            }
            .into()
        })
    }

    fn save(&self, project: &ProjectConfig, path: &Path) -> SkeinResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::StoreLock)?;

        // Same canonical shape the file-backed store persists.
        let mut canonical = project.clone();
        for service in canonical.services.values_mut() {
            service.canonicalize();
        }

        inner.insert(path.to_path_buf(), canonical);
        Ok(())
    }
}
