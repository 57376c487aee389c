//! Domain-layer errors: referential and conflict failures of the
//! dependency operations.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to surface through several layers)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Referential errors (404-level equivalent)
    // ========================================================================
    #[error("service '{name}' not found in project")]
    ServiceNotFound { name: String },

    // ========================================================================
    // Conflict errors (409-level equivalent)
    // ========================================================================
    #[error("service '{src}' already depends on '{target}'")]
    DependencyExists { src: String, target: String },

    #[error("service '{service}' has no dependencies to remove")]
    NoDependencies { service: String },

    #[error("service '{src}' does not depend on '{target}'")]
    DependencyNotFound { src: String, target: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ServiceNotFound { name } => vec![
                format!("No service named '{}' is declared in the manifest", name),
                "List declared services and their dependencies: skein list".into(),
                "Service names are case-sensitive".into(),
            ],
            Self::DependencyExists { src, target } => vec![
                format!("'{}' already depends on '{}'", src, target),
                "Use --force to treat the existing dependency as success".into(),
            ],
            Self::NoDependencies { service } => vec![
                format!("'{}' has no dependencies declared", service),
                "Inspect the current relationships: skein list".into(),
            ],
            Self::DependencyNotFound { src, target } => vec![
                format!("'{}' does not currently depend on '{}'", src, target),
                format!("See what '{}' depends on: skein list {}", src, src),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ServiceNotFound { .. } => ErrorCategory::NotFound,
            Self::DependencyExists { .. }
            | Self::NoDependencies { .. }
            | Self::DependencyNotFound { .. } => ErrorCategory::Conflict,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Conflict,
}
