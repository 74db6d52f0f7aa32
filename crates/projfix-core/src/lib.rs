//! projfix Core - build-project normalization engine
//!
//! This crate provides:
//! - A lossless in-memory model of MSBuild-style project documents
//! - Framework moniker comparison and platform condition matching
//! - TargetFramework reconciliation against per-platform minimums
//! - Legacy-to-SDK-style migration and SDK identifier freshness
//! - Structured error and logging facilities shared by the other crates

pub mod config;
pub mod errors;
pub mod generator;
pub mod logging_facility;
pub mod model;
pub mod normalize;
pub mod ops;

pub use projfix_core_types::schema;

// Re-export commonly used types
pub use config::{EngineConfig, PlatformRequirement};
pub use errors::{ExError, ExErrorKind, ProjFixError, Result};
pub use generator::{GodotProjectGenerator, ProjectGenerator};
pub use model::{Element, Node, ProjectDocument};
pub use normalize::{normalize_project, NormalizeOptions, NormalizeReport};
