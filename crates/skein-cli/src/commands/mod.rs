//! Command handlers.
//!
//! Each submodule implements one subcommand: translate CLI arguments, call
//! the core service, display results. No business logic lives here.

pub mod add;
pub mod check;
pub mod completions;
pub mod config;
pub mod list;
pub mod remove;

use std::path::PathBuf;

use skein_adapters::{TermConsole, YamlManifestStore};
use skein_core::application::DependencyService;

use crate::{cli::GlobalArgs, config::AppConfig};

/// Resolve the manifest path: `--manifest` wins over the configured
/// `manifest.path`.
pub(crate) fn manifest_path(global: &GlobalArgs, config: &AppConfig) -> PathBuf {
    global
        .manifest
        .clone()
        .unwrap_or_else(|| config.manifest.path.clone())
}

/// Wire the production adapters into a [`DependencyService`].
pub(crate) fn dependency_service() -> DependencyService {
    DependencyService::new(
        Box::new(YamlManifestStore::new()),
        Box::new(TermConsole::new()),
    )
}
