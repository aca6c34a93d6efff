//! # REST API Interface Layer
//!
//! - **decode**: path segments and JSON bodies → request types
//! - **encode**: outcomes → JSON responses, error keys → status codes
//! - **model_apis**: the handlers and their routing table
//!
//! No business logic lives here.

pub mod decode;
pub mod encode;
pub mod model_apis;

use axum::{
    http::{Method, StatusCode, Uri},
    response::Response,
};
use tracing::warn;

pub use encode::{
    encode_error, encode_response, encode_status_error, status_for, JSON_CONTENT_TYPE,
};
pub use model_apis::{MODEL_API_PATH, MODEL_ITEM_PATH};

pub const ROUTE_NOT_FOUND_MESSAGE: &str = "route not found";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "method not allowed";

/// Fallback for paths outside the routing table
pub async fn route_not_found(method: Method, uri: Uri) -> Response {
    warn!("No route for {} {}", method, uri);
    encode_status_error(StatusCode::NOT_FOUND, ROUTE_NOT_FOUND_MESSAGE)
}

/// Fallback for a known path reached with a method it does not serve
pub async fn method_not_allowed(method: Method, uri: Uri) -> Response {
    warn!("Method {} not allowed on {}", method, uri);
    encode_status_error(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
}
