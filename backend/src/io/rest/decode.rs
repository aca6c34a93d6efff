//! Wire → request decoding.
//!
//! Decoders only turn path segments and JSON bodies into request types; they
//! never validate. A body that is not valid JSON for the request type yields
//! `InvalidRequestBody`, an identifier that is not a canonical UUID yields
//! `InvalidId`. Extractor rejections (undecodable path segments, bodies that
//! cannot be buffered) are classified the same way, so axum's own rejection
//! text never reaches the client.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path,
    },
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    CreateModelRequest, DeleteModelRequest, GetModelRequest, ListModelsRequest,
    UpdateModelRequest,
};
use tracing::debug;

use crate::domain::error::{ClassifiedError, Outcome};
use crate::domain::identifier::{self, INVALID_ID_MESSAGE};

pub const INVALID_REQUEST_BODY_MESSAGE: &str = "invalid request body";

/// Raw `:id` segment, or `InvalidId` when axum could not extract it
pub fn path_id(path: Result<Path<String>, PathRejection>) -> Outcome<String> {
    match path {
        Ok(Path(raw_id)) => Ok(raw_id),
        Err(rejection) => {
            debug!("Rejected path id: {}", rejection.body_text());
            Err(ClassifiedError::invalid_id(INVALID_ID_MESSAGE))
        }
    }
}

/// Buffered body, or `InvalidRequestBody` when it could not be read
pub fn request_body(body: Result<Bytes, BytesRejection>) -> Outcome<Bytes> {
    match body {
        Ok(bytes) => Ok(bytes),
        Err(rejection) => {
            debug!(
                "Rejected request body ({}): {}",
                rejection.status(),
                rejection.body_text()
            );
            Err(ClassifiedError::invalid_request_body(
                INVALID_REQUEST_BODY_MESSAGE,
            ))
        }
    }
}

pub fn decode_create_request(body: &[u8]) -> Outcome<CreateModelRequest> {
    decode_json(body)
}

pub fn decode_get_request(raw_id: &str) -> Outcome<GetModelRequest> {
    let id = identifier::parse(raw_id)?;
    Ok(GetModelRequest { id })
}

/// List takes no wire input; query parameters are ignored
pub fn decode_list_request() -> Outcome<ListModelsRequest> {
    Ok(ListModelsRequest::default())
}

pub fn decode_update_request(body: &[u8]) -> Outcome<UpdateModelRequest> {
    decode_json(body)
}

pub fn decode_delete_request(raw_id: &str) -> Outcome<DeleteModelRequest> {
    let id = identifier::parse(raw_id)?;
    Ok(DeleteModelRequest { id })
}

// Bodies must be JSON objects; serde would otherwise accept a positional
// array for a struct.
fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Outcome<T> {
    let value: Value = serde_json::from_slice(body).map_err(rejected)?;
    if !value.is_object() {
        debug!("Rejected request body: not a JSON object");
        return Err(ClassifiedError::invalid_request_body(
            INVALID_REQUEST_BODY_MESSAGE,
        ));
    }
    serde_json::from_value(value).map_err(rejected)
}

fn rejected(err: serde_json::Error) -> ClassifiedError {
    debug!("Rejected request body: {}", err);
    ClassifiedError::invalid_request_body(INVALID_REQUEST_BODY_MESSAGE)
}
