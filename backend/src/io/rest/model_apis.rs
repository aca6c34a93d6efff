//! # REST API for Model Management
//!
//! Endpoints for creating, retrieving, listing, updating, and deleting
//! models. Each handler decodes its input, runs the matching endpoint
//! pipeline, and encodes the outcome.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    response::Response,
    routing::{get, post},
    Router,
};
use tracing::info;

use super::decode;
use super::encode::encode_response;
use super::method_not_allowed;
use crate::AppState;

type PathId = Result<Path<String>, PathRejection>;
type RawBody = Result<Bytes, BytesRejection>;

/// Collection path; create, list and update live here
pub const MODEL_API_PATH: &str = "/api/model/v1";
/// Item path; get and delete address a single model by id
pub const MODEL_ITEM_PATH: &str = "/api/model/v1/:id";

/// Create a router for model related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            MODEL_API_PATH,
            post(create_model)
                .get(list_models)
                .put(update_model)
                .fallback(method_not_allowed),
        )
        .route(
            MODEL_ITEM_PATH,
            get(get_model)
                .delete(delete_model)
                .fallback(method_not_allowed),
        )
}

/// Create a new model
pub async fn create_model(State(state): State<AppState>, body: RawBody) -> Response {
    info!("POST {}", MODEL_API_PATH);

    let request = decode::request_body(body)
        .and_then(|body| decode::decode_create_request(&body));
    let outcome = match request {
        Ok(request) => state.endpoints.create(request).await,
        Err(err) => Err(err),
    };
    encode_response(outcome)
}

/// Get a model by ID
pub async fn get_model(State(state): State<AppState>, path: PathId) -> Response {
    info!("GET {}", MODEL_ITEM_PATH);

    let request = decode::path_id(path)
        .and_then(|raw_id| decode::decode_get_request(&raw_id));
    let outcome = match request {
        Ok(request) => state.endpoints.get(request).await,
        Err(err) => Err(err),
    };
    encode_response(outcome)
}

/// List models
pub async fn list_models(State(state): State<AppState>) -> Response {
    info!("GET {}", MODEL_API_PATH);

    let outcome = match decode::decode_list_request() {
        Ok(request) => state.endpoints.list(request).await,
        Err(err) => Err(err),
    };
    encode_response(outcome)
}

/// Update a model; the id travels in the body
pub async fn update_model(State(state): State<AppState>, body: RawBody) -> Response {
    info!("PUT {}", MODEL_API_PATH);

    let request = decode::request_body(body)
        .and_then(|body| decode::decode_update_request(&body));
    let outcome = match request {
        Ok(request) => state.endpoints.update(request).await,
        Err(err) => Err(err),
    };
    encode_response(outcome)
}

/// Delete a model
pub async fn delete_model(State(state): State<AppState>, path: PathId) -> Response {
    info!("DELETE {}", MODEL_ITEM_PATH);

    let request = decode::path_id(path)
        .and_then(|raw_id| decode::decode_delete_request(&raw_id));
    let outcome = match request {
        Ok(request) => state.endpoints.delete(request).await,
        Err(err) => Err(err),
    };
    encode_response(outcome)
}
