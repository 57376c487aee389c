//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add a dependency" or "check the graph".

pub mod dependency_service;

pub use dependency_service::{AddOutcome, CheckReport, DependencyService, RemoveOutcome};
