//! # Domain Module
//!
//! Everything between a decoded request and its result:
//!
//! - **error**: the classified error every stage reports failures with
//! - **identifier**: generation and parsing of model ids
//! - **validation**: structural checks on freshly decoded requests
//! - **conformance**: idempotent normalization of validated requests
//! - **endpoints**: the per-operation pipeline and the business trait it dispatches to
//! - **model_service**: the storage-backed business operations
//!
//! Nothing here knows about HTTP. The REST layer decodes into the request
//! types from the `shared` crate and maps [`ClassifiedError`] keys to status
//! codes.

pub mod conformance;
pub mod endpoints;
pub mod error;
pub mod identifier;
pub mod model_service;
pub mod validation;

pub use endpoints::{Endpoints, ModelOperations, Operation, Pipeline, PipelineStage};
pub use error::{ClassifiedError, ErrorKey, Outcome};
pub use model_service::ModelService;
