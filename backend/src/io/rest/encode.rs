//! Outcome → wire encoding.
//!
//! This is the one place error classifications become HTTP status codes.
//! Success payloads are written as JSON with status 200; failures as
//! `{"error": "<message>"}` with the status mapped from the error key.
//! Requests the router cannot place on any pipeline (unknown path, unknown
//! method) use the same body shape with their own status.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::ErrorResponse;
use tracing::error;

use crate::domain::error::{ClassifiedError, ErrorKey, Outcome, INTERNAL_ERROR_MESSAGE};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

const FALLBACK_ERROR_BODY: &str = r#"{"error":"internal error"}"#;

/// Fixed mapping from error classification to HTTP status
pub fn status_for(key: ErrorKey) -> StatusCode {
    match key {
        ErrorKey::InvalidRequestBody | ErrorKey::InvalidId => StatusCode::BAD_REQUEST,
        ErrorKey::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKey::NotFound | ErrorKey::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn encode_response<T: Serialize>(outcome: Outcome<T>) -> Response {
    match outcome {
        Ok(payload) => match json_response(StatusCode::OK, &payload) {
            Ok(response) => response,
            Err(err) => {
                error!("Failed to serialize response payload: {}", err);
                encode_error(&ClassifiedError::internal(INTERNAL_ERROR_MESSAGE))
            }
        },
        Err(err) => encode_error(&err),
    }
}

pub fn encode_error(err: &ClassifiedError) -> Response {
    encode_status_error(status_for(err.key()), err.message())
}

/// Error body with an explicit status, for rejections made before dispatch
pub fn encode_status_error(status: StatusCode, message: &str) -> Response {
    let body = ErrorResponse::new(message);

    match json_response(status, &body) {
        Ok(response) => response,
        Err(serialize_err) => {
            error!("Failed to serialize error body: {}", serialize_err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
                FALLBACK_ERROR_BODY,
            )
                .into_response()
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> serde_json::Result<Response> {
    let bytes = serde_json::to_vec(payload)?;
    Ok((status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], bytes).into_response())
}

impl IntoResponse for ClassifiedError {
    fn into_response(self) -> Response {
        encode_error(&self)
    }
}
