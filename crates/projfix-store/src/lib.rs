//! projfix Store - project document and configuration persistence
//!
//! Provides:
//! - Lossless XML parsing and writing of project documents
//! - Opening and saving documents on disk
//! - TOML loading of the engine configuration

pub mod config;
pub mod document;
pub mod errors;
mod reader;
mod writer;

// Re-export key types
pub use document::{open, save, try_open};
pub use errors::Result;
pub use reader::parse_project_str;
pub use writer::write_project_string;
