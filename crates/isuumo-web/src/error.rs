use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use isuumo_core::IsuumoError;

#[expect(
    clippy::needless_pass_by_value,
    reason = "handlers naturally own error values from `Result` and pass them through"
)]
pub fn isuumo_error_response(err: IsuumoError, operation: &str) -> Response {
    let status = status_for_isuumo_error(&err);
    error_response(&err, operation, status)
}

/// Recommendations report an unknown chair as a malformed request, not as a
/// missing resource.
#[expect(
    clippy::needless_pass_by_value,
    reason = "handlers naturally own error values from `Result` and pass them through"
)]
pub fn recommendation_error_response(err: IsuumoError, operation: &str) -> Response {
    let status = match err {
        IsuumoError::NotFound(_) => StatusCode::BAD_REQUEST,
        _ => status_for_isuumo_error(&err),
    };
    error_response(&err, operation, status)
}

fn error_response(err: &IsuumoError, operation: &str, status: StatusCode) -> Response {
    let payload = err.to_payload(operation);
    if status.is_server_error() {
        error!(
            operation,
            code = %payload.code,
            trace_id = %payload.trace_id,
            error = %err,
            "request failed"
        );
    } else {
        debug!(operation, code = %payload.code, error = %err, "request rejected");
    }
    (status, Json(payload)).into_response()
}

fn status_for_isuumo_error(err: &IsuumoError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else if matches!(err, IsuumoError::NotFound(_)) {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
