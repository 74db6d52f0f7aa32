#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{group, project, tf, IOS};
use projfix_core::errors::{ExError, ExErrorKind, ProjFixError};
use projfix_core::logging_facility::test_capture::init_test_capture;
use projfix_core::ops::ensure_target_framework_is_set;
use projfix_core::{log_op_end, log_op_error, log_op_start, EngineConfig};
use projfix_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ProjFixError::DocumentNotFound {
        path: "Game.csproj".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field("err.code"), Some("ERR_NOT_FOUND"));
}

#[test]
fn test_malformed_document_logged_as_invalid_document() {
    let capture = init_test_capture();
    let op_name = "test_malformed_document_unique_4";

    let err = ProjFixError::MalformedDocument {
        reason: "unexpected end of input".to_string(),
    };
    log_op_error!(op_name, err.clone(), duration_ms = 5);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let event = capture
        .events_for_op(op_name)
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::InvalidDocument);
    assert_eq!(event.field("err.code"), Some("ERR_INVALID_DOCUMENT"));
    assert!(event
        .field("err.message")
        .is_some_and(|m| m.contains("unexpected end of input")));
}

#[test]
fn test_boundary_ownership_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_ownership_unique_5";

    log_op_start!(op_name, project_path = "Game.csproj");
    log_op_end!(op_name, duration_ms = 42);

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    let ends = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END)
    });

    assert_eq!(starts, 1, "Should have exactly one start event");
    assert_eq!(ends, 1, "Should have exactly one end event");
}

#[test]
fn test_log_macros_with_multiple_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_6";

    log_op_start!(op_name, platform = "ios", framework = "net8.0");

    let start_event = capture
        .events_for_op(op_name)
        .into_iter()
        .next()
        .expect("Should have start event");

    assert_eq!(start_event.field("platform"), Some("ios"));
    assert_eq!(start_event.field("framework"), Some("net8.0"));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();

    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_reconciliation_emits_start_and_end() {
    let capture = init_test_capture();
    let mut doc = project(vec![group(Some(IOS), vec![tf("net6.0", None)])]);

    let outcome = ensure_target_framework_is_set(&mut doc, &EngineConfig::default());

    // Other tests reconcile concurrently, so match on this run's counts
    let removed = outcome.removed.len().to_string();
    let added = outcome.added.len().to_string();
    let matching = capture.count_events(|e| {
        e.op.as_deref() == Some("ensure_target_framework_is_set")
            && e.event.as_deref() == Some(EVENT_END)
            && e.field("removed_count") == Some(removed.as_str())
            && e.field("added_count") == Some(added.as_str())
    });
    assert!(matching >= 1);
    capture.assert_event_exists("ensure_target_framework_is_set", EVENT_START);
}
