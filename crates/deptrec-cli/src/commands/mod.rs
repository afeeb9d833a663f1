//! Command handlers
//!
//! The handlers own lifecycle logging for the operations they drive:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The store underneath only uses `tracing::debug!()`.

pub mod dept;
pub mod table;

use std::time::Instant;

use deptrec_core::{log_op_end, log_op_error, log_op_start, ExError};

/// Run `f` between start and end/error boundary events for `op`
pub(crate) fn with_boundary<T>(
    op: &'static str,
    f: impl FnOnce() -> Result<T, ExError>,
) -> Result<T, ExError> {
    log_op_start!(op);
    let start = Instant::now();

    match f() {
        Ok(value) => {
            log_op_end!(op, duration_ms = start.elapsed().as_millis() as u64);
            Ok(value)
        }
        Err(e) => {
            log_op_error!(
                op,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deptrec_core::logging_facility::init_test_capture;
    use deptrec_core::MapperError;
    use deptrec_core_types::schema::{
        EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE,
    };

    #[test]
    fn test_with_boundary_success_emits_start_and_end() {
        let capture = init_test_capture();
        let op = "boundary_ok_unique_1";

        let value = with_boundary(op, || Ok(7)).unwrap();
        assert_eq!(value, 7);

        let events = capture.events_for(op);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
        assert_eq!(events[1].event.as_deref(), Some(EVENT_END));
        assert!(events[1].fields.contains_key(FIELD_DURATION_MS));
    }

    #[test]
    fn test_with_boundary_failure_emits_end_error_with_code() {
        let capture = init_test_capture();
        let op = "boundary_err_unique_2";

        let err = with_boundary::<()>(op, || Err(MapperError::RowNotFound { id: 3 }.into()))
            .unwrap_err();
        assert_eq!(err.code(), "ERR_NOT_FOUND");

        let events = capture.events_for(op);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
        assert_eq!(events[1].event.as_deref(), Some(EVENT_END_ERROR));
        assert_eq!(
            events[1].fields.get(FIELD_ERR_CODE),
            Some(&"ERR_NOT_FOUND".to_string())
        );
        assert!(events[1].fields.contains_key(FIELD_DURATION_MS));
    }
}
