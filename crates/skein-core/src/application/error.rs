//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The manifest declares no services at all.
    #[error("no services defined in project. Add services to the manifest first")]
    NoServices,

    /// Interactive add: every other service is already excluded.
    #[error("no other services available to depend on. Add more services first")]
    NoCandidateServices,

    /// Manifest I/O or parsing failed.
    #[error("failed to {op} manifest at {path}: {reason}")]
    Manifest {
        op: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// Interactive prompt failed (not declined — failed).
    #[error("prompt failed: {reason}")]
    Prompt { reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("manifest store error")]
    StoreLock,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoServices => vec![
                "The manifest has no services section".into(),
                "Declare at least one service before managing dependencies".into(),
            ],
            Self::NoCandidateServices => vec![
                "A service cannot be offered itself as a dependency".into(),
                "Declare another service in the manifest first".into(),
            ],
            Self::Manifest { op, path, .. } => vec![
                format!("Could not {} '{}'", op, path.display()),
                "Check that the file exists and is valid YAML".into(),
                "Pass --manifest to point at a different file".into(),
            ],
            Self::Prompt { .. } => vec![
                "Interactive prompts need a terminal".into(),
                "Pass the service names as arguments to run non-interactively".into(),
            ],
            Self::StoreLock => vec![
                "The manifest store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoServices | Self::NoCandidateServices => ErrorCategory::Validation,
            Self::Manifest { .. } | Self::Prompt { .. } | Self::StoreLock => {
                ErrorCategory::Internal
            }
        }
    }
}
