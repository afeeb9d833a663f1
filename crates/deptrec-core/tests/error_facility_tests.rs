use deptrec_core::errors::{ExError, ExErrorKind, MapperError};
use deptrec_core_types::RequestId;

#[test]
fn test_not_persisted_maps_to_invalid_state() {
    let ex_err: ExError = MapperError::NotPersisted { op: "update" }.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidState);
    assert_eq!(ex_err.code(), "ERR_INVALID_STATE");
    assert_eq!(ex_err.op(), Some("update"));
    assert!(ex_err.message().contains("doesn't exist in the database"));
}

#[test]
fn test_row_not_found_carries_id() {
    let ex_err: ExError = MapperError::RowNotFound { id: 9999 }.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity_id(), Some("9999"));
    assert_eq!(ex_err.op(), Some("delete"));
}

#[test]
fn test_invalid_state_distinct_from_not_found() {
    let invalid: ExError = MapperError::NotPersisted { op: "delete" }.into();
    let missing: ExError = MapperError::RowNotFound { id: 1 }.into();

    assert_ne!(invalid.kind(), missing.kind());
    assert_ne!(invalid.code(), missing.code());
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidState, "ERR_INVALID_STATE"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Config, "ERR_CONFIG"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_request_id_attached_and_displayed() {
    let request_id = RequestId::from_string("req-123".to_string());
    let err = ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message("no such table: departments")
        .with_request_id(request_id.clone());

    assert_eq!(err.request_id(), Some(&request_id));
    assert_eq!(
        err.to_string(),
        "[ERR_PERSISTENCE] in operation 'sqlite': no such table: departments (request_id: req-123)"
    );
}

#[test]
fn test_ex_error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}

    let err: ExError = MapperError::NotPersisted { op: "update" }.into();
    takes_error(&err);
}
