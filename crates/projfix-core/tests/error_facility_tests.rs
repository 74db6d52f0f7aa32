use projfix_core::errors::{ExError, ExErrorKind, ProjFixError};

#[test]
fn test_not_found_verifiable_by_kind() {
    let err = ProjFixError::DocumentNotFound {
        path: "games/Game.csproj".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.path(), Some("games/Game.csproj"));
}

#[test]
fn test_unexpected_root_is_invalid_document() {
    let err = ProjFixError::UnexpectedRoot {
        found: "Solution".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidDocument);
    assert_eq!(ex_err.code(), "ERR_INVALID_DOCUMENT");
    assert!(ex_err.message().contains("Solution"));
}

#[test]
fn test_malformed_distinct_from_not_found() {
    let err = ProjFixError::MalformedDocument {
        reason: "mismatched end tag".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_ne!(ex_err.kind(), ExErrorKind::NotFound);
    assert!(ex_err.message().contains("mismatched end tag"));
    assert_eq!(ex_err.path(), None);
}

#[test]
fn test_invalid_config_structured_fields() {
    let err = ProjFixError::InvalidConfig {
        reason: "requirements must not be empty".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidConfig);
    assert_eq!(ex_err.code(), "ERR_INVALID_CONFIG");
    assert!(ex_err.message().contains("Invalid configuration"));
}

#[test]
fn test_domain_error_display() {
    let err = ProjFixError::DocumentNotFound {
        path: "Game.csproj".to_string(),
    };
    assert_eq!(err.to_string(), "Project document not found: Game.csproj");
}

#[test]
fn test_context_survives_conversion() {
    let ex_err: ExError = ProjFixError::MalformedDocument {
        reason: "bad".to_string(),
    }
    .into();
    let ex_err = ex_err.with_op("open_project").with_path("Game.csproj");

    assert_eq!(ex_err.op(), Some("open_project"));
    let rendered = ex_err.to_string();
    assert!(rendered.starts_with("[ERR_INVALID_DOCUMENT] in operation 'open_project'"));
    assert!(rendered.ends_with("(path: Game.csproj)"));
}
