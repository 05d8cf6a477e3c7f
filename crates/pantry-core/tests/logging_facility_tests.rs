#![allow(clippy::unwrap_used, clippy::expect_used)]

use pantry_core::errors::{ExError, ExErrorKind, PantryError};
use pantry_core::logging_facility::test_capture::init_test_capture;
use pantry_core::{log_op_end, log_op_error, log_op_start};
use pantry_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_carries_extra_fields() {
    let capture = init_test_capture();
    let op_name = "logging_start_fields";

    log_op_start!(op_name, item_name = "Flour");

    let starts: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].field("item_name"), Some("Flour"));
    assert!(starts[0].component.is_some());
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "logging_end_duration";

    log_op_end!(op_name, duration_ms = 42);

    let ends: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_from_domain_error() {
    let capture = init_test_capture();
    let op_name = "logging_error_domain";

    let err = PantryError::InsufficientStock {
        item_name: "Sugar".to_string(),
        available: 1,
        requested: 4,
    };
    log_op_error!(op_name, err, duration_ms = 7);

    let errors: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field("err_code"), Some("ERR_INSUFFICIENT_STOCK"));
    assert_eq!(errors[0].field("entity_id"), Some("Sugar"));
    assert_eq!(errors[0].level, tracing::Level::ERROR);
}

#[test]
fn test_log_op_error_from_ex_error() {
    let capture = init_test_capture();
    let op_name = "logging_error_ex";

    let err = ExError::new(ExErrorKind::Persistence).with_message("disk full");
    log_op_error!(op_name, err, duration_ms = 1);

    let found = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.field("err_code") == Some("ERR_PERSISTENCE")
    });
    assert_eq!(found, 1);
}

#[test]
fn test_single_start_and_end_per_operation() {
    let capture = init_test_capture();
    let op_name = "logging_boundary_pair";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 0);

    let events = capture.events_for_op(op_name);
    let starts = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .count();
    let ends = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .count();

    assert_eq!((starts, ends), (1, 1));
}
