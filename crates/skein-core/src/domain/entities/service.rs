//! A single service entry in the project manifest.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration of one service declared in the manifest.
///
/// Only `depends_on` participates in the dependency core; `project` and
/// `host` are passthrough fields that round-trip through load/save
/// untouched.
///
/// `depends_on` distinguishes "absent" (`None`) from "present but empty"
/// (`Some(vec![])`). Both shapes are accepted on read; `None` is the
/// canonical persisted shape for a service with no dependencies, and the
/// mutation operations restore it when the last dependency is removed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfig {
    /// Source directory of the service, relative to the manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<PathBuf>,

    /// Hosting target of the service (passthrough).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Names of sibling services this service depends on, in declaration
    /// order. Duplicates already present on load are tolerated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
}

impl ServiceConfig {
    /// The dependency list, empty when `dependsOn` is absent.
    pub fn dependencies(&self) -> &[String] {
        self.depends_on.as_deref().unwrap_or_default()
    }

    /// `true` when at least one dependency is declared.
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies().is_empty()
    }

    /// `true` when `target` appears in the dependency list.
    pub fn depends_on(&self, target: &str) -> bool {
        self.dependencies().iter().any(|d| d == target)
    }

    /// Collapse `Some([])` into `None` — the canonical persisted shape.
    pub fn canonicalize(&mut self) {
        if matches!(self.depends_on.as_deref(), Some([])) {
            self.depends_on = None;
        }
    }
}
