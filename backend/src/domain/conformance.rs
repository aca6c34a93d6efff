//! # Request Conformance
//!
//! Normalizes validated requests before they reach the business operations:
//! names and descriptions are trimmed, blank descriptions dropped, and list
//! pagination defaulted. Every normalizer is idempotent.

use shared::{
    CreateModelRequest, DeleteModelRequest, GetModelRequest, ListModelsRequest,
    UpdateModelRequest,
};

use super::error::Outcome;

/// Page size used when the caller did not ask for one
pub const DEFAULT_LIST_LIMIT: u32 = 100;
/// Upper bound on a single list page
pub const MAX_LIST_LIMIT: u32 = 1000;

pub fn conform_create(request: CreateModelRequest) -> Outcome<CreateModelRequest> {
    Ok(CreateModelRequest {
        name: request.name.trim().to_string(),
        description: conform_description(request.description),
    })
}

/// Identifiers are typed values, already canonical
pub fn conform_get(request: GetModelRequest) -> Outcome<GetModelRequest> {
    Ok(request)
}

pub fn conform_list(request: ListModelsRequest) -> Outcome<ListModelsRequest> {
    let limit = match request.limit {
        None | Some(0) => DEFAULT_LIST_LIMIT,
        Some(limit) => limit.min(MAX_LIST_LIMIT),
    };
    Ok(ListModelsRequest { limit: Some(limit) })
}

pub fn conform_update(request: UpdateModelRequest) -> Outcome<UpdateModelRequest> {
    Ok(UpdateModelRequest {
        id: request.id,
        name: request.name.trim().to_string(),
        description: conform_description(request.description),
    })
}

pub fn conform_delete(request: DeleteModelRequest) -> Outcome<DeleteModelRequest> {
    Ok(request)
}

fn conform_description(description: Option<String>) -> Option<String> {
    description
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
