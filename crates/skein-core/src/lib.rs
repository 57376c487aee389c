//! Skein Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Skein
//! service-dependency tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            skein-cli (CLI)              │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (DependencyService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │    (Driven: ManifestStore, Console)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     skein-adapters (Infrastructure)     │
//! │  (YamlManifestStore, TermConsole, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectConfig, graph, validation)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use skein_core::{
//!     application::DependencyService,
//!     domain::{detect_cyclic_dependencies, validate_service_dependencies},
//! };
//!
//! // 1. Use the application service (with injected adapters)
//! let service = DependencyService::new(store, console);
//! service.add("skein.yaml".as_ref(), Some("api"), Some("database"), false)?;
//!
//! // 2. Or run the pure validation passes directly on a loaded project
//! let issues = validate_service_dependencies(&project);
//! let cycles = detect_cyclic_dependencies(&project);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AddOutcome, CheckReport, DependencyService, RemoveOutcome,
        ports::{Console, ManifestStore},
        providers::{DependencyHandler, Provider, handler_for_provider},
    };
    pub use crate::domain::{
        ProjectConfig, ServiceConfig, ServiceDependencyView, build_dependency_graph,
        dependency_view, dependency_views, detect_cyclic_dependencies,
        validate_service_dependencies,
    };
    pub use crate::error::{SkeinError, SkeinResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
