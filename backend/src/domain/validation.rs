//! # Request Validation
//!
//! Structural checks run on a freshly decoded request before anything else
//! touches it. Validators are pure: they hand the request back untouched or
//! fail with an `InvalidRequestBody` / `InvalidId` error. Normalization is
//! left to [`conformance`](super::conformance).

use shared::{
    CreateModelRequest, DeleteModelRequest, GetModelRequest, ListModelsRequest,
    UpdateModelRequest,
};
use uuid::Uuid;

use super::error::{ClassifiedError, Outcome};
use super::identifier::INVALID_ID_MESSAGE;

pub const EMPTY_NAME_MESSAGE: &str = "Model name cannot be empty";

pub fn validate_create(request: CreateModelRequest) -> Outcome<CreateModelRequest> {
    require_name(&request.name)?;
    Ok(request)
}

pub fn validate_get(request: GetModelRequest) -> Outcome<GetModelRequest> {
    require_id(&request.id)?;
    Ok(request)
}

/// No filters exist yet, so there is nothing to check
pub fn validate_list(request: ListModelsRequest) -> Outcome<ListModelsRequest> {
    Ok(request)
}

pub fn validate_update(request: UpdateModelRequest) -> Outcome<UpdateModelRequest> {
    require_id(&request.id)?;
    require_name(&request.name)?;
    Ok(request)
}

pub fn validate_delete(request: DeleteModelRequest) -> Outcome<DeleteModelRequest> {
    require_id(&request.id)?;
    Ok(request)
}

fn require_name(name: &str) -> Outcome<()> {
    if name.trim().is_empty() {
        return Err(ClassifiedError::invalid_request_body(EMPTY_NAME_MESSAGE));
    }
    Ok(())
}

// The nil UUID is what an absent id decodes to.
fn require_id(id: &Uuid) -> Outcome<()> {
    if id.is_nil() {
        return Err(ClassifiedError::invalid_id(INVALID_ID_MESSAGE));
    }
    Ok(())
}
