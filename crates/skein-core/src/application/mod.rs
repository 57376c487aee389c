//! Application layer for Skein.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DependencyService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Providers**: Infrastructure expression formatting strategies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod providers;
pub mod reporting;
pub mod services;

// Re-export main services
pub use services::{AddOutcome, CheckReport, DependencyService, RemoveOutcome};

// Re-export port traits (for adapter implementation)
pub use ports::{Console, ManifestStore};

pub use error::ApplicationError;
pub use providers::{
    BicepDependencies, DependencyHandler, Provider, TerraformDependencies, handler_for_provider,
};
