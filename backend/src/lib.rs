//! # Model CRUD Backend
//!
//! Exposes create/get/list/update/delete for a single resource type over
//! HTTP. Every request runs the same pipeline:
//!
//! ```text
//! decode → validate → conform → dispatch → encode
//! ```
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST decode/encode, routing)
//!     ↓
//! Domain Layer (validation, conformance, endpoint dispatch, business operations)
//!     ↓
//! Storage Layer (model repository)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use axum::{http::Method, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::domain::{Endpoints, ModelOperations, ModelService};
use crate::storage::InMemoryModelRepository;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub endpoints: Endpoints,
}

impl AppState {
    /// Put the standard pipelines in front of `operations`
    pub fn new(operations: Arc<dyn ModelOperations>) -> Self {
        Self::from_endpoints(Endpoints::new(operations))
    }

    pub fn from_endpoints(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

/// Initialize the backend with the in-memory repository
pub fn initialize_backend() -> AppState {
    info!("Setting up storage");
    let storage = Arc::new(InMemoryModelRepository::new());

    info!("Setting up domain model");
    let model_service = ModelService::new(storage);

    info!("Setting up application state");
    AppState::new(Arc::new(model_service))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.clone())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Router::new()
        .merge(io::model_apis::router())
        .fallback(io::route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
