//! Error handling for projfix-store
//!
//! Wraps projfix-core ExError with store-specific helpers

use std::path::Path;

use projfix_core::errors::{ExError, ExErrorKind, ProjFixError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for a file operation
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    if err.kind() == std::io::ErrorKind::NotFound {
        return ExError::from(ProjFixError::DocumentNotFound {
            path: path.display().to_string(),
        })
        .with_op(operation);
    }
    ExError::new(ExErrorKind::Io)
        .with_op(operation)
        .with_path(path)
        .with_message(err.to_string())
}

/// Create an error for XML that could not be read as a project
pub fn malformed(reason: impl Into<String>) -> ExError {
    ExError::from(ProjFixError::MalformedDocument {
        reason: reason.into(),
    })
    .with_op("parse_project")
}

/// Create a configuration error
pub fn config_error(reason: &str) -> ExError {
    ExError::from(ProjFixError::InvalidConfig {
        reason: reason.to_string(),
    })
    .with_op("load_config")
}

/// Create a serialization error
pub fn serialization_error(operation: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation)
        .with_message(reason.to_string())
}

/// Create an error for a document that cannot be saved without a path
pub fn missing_path(operation: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(operation)
        .with_message("Document has no file path")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let err = io_error(
            "open_project",
            Path::new("Game.csproj"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.op(), Some("open_project"));
        assert_eq!(err.path(), Some("Game.csproj"));
    }

    #[test]
    fn test_other_io_failures_keep_io_kind() {
        let err = io_error(
            "save_project",
            Path::new("Game.csproj"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.code(), "ERR_IO");
    }

    #[test]
    fn test_malformed_is_invalid_document() {
        let err = malformed("unclosed element 'Project'");
        assert_eq!(err.code(), "ERR_INVALID_DOCUMENT");
        assert!(err.message().contains("unclosed element"));
    }
}
