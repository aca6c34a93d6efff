//! # Endpoint Dispatch
//!
//! Wraps each business operation in a fixed pipeline:
//!
//! ```text
//! Decoded → Validated → Conformed → Dispatched → { Succeeded | Failed }
//! ```
//!
//! A request that fails validation never reaches conformance, and one that
//! fails either stage never reaches the business operation. The operation's
//! own outcome is passed back untouched. Nothing is retried.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use shared::{
    CreateModelRequest, DeleteModelRequest, DeleteModelResponse, GetModelRequest,
    ListModelsRequest, Model, UpdateModelRequest,
};
use tracing::{debug, warn};

use super::conformance;
use super::error::{ClassifiedError, Outcome};
use super::validation;

/// The business operations behind the endpoints, one per CRUD verb.
///
/// Implementations receive requests that have already been validated and
/// conformed, and are expected to classify their own failures. Anything they
/// cannot classify should be reported as `Internal`.
#[async_trait]
pub trait ModelOperations: Send + Sync {
    async fn create(&self, request: CreateModelRequest) -> Outcome<Model>;

    async fn get(&self, request: GetModelRequest) -> Outcome<Model>;

    async fn list(&self, request: ListModelsRequest) -> Outcome<Vec<Model>>;

    async fn update(&self, request: UpdateModelRequest) -> Outcome<Model>;

    async fn delete(&self, request: DeleteModelRequest) -> Outcome<DeleteModelResponse>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Get,
    List,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create",
            Operation::Get => "get",
            Operation::List => "list",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Where a request currently is in its pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Decoded,
    Validated,
    Conformed,
    Dispatched,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Decoded => "decoded",
            PipelineStage::Validated => "validated",
            PipelineStage::Conformed => "conformed",
            PipelineStage::Dispatched => "dispatched",
        };
        f.write_str(name)
    }
}

/// A single pure transform applied before dispatch
pub type Stage<R> = fn(R) -> Outcome<R>;

/// Validation followed by conformance for one request type
pub struct Pipeline<R> {
    validate: Stage<R>,
    conform: Stage<R>,
}

impl<R> Clone for Pipeline<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Pipeline<R> {}

impl<R> Pipeline<R> {
    pub const fn new(validate: Stage<R>, conform: Stage<R>) -> Self {
        Self { validate, conform }
    }

    /// Run the request through both stages, then hand it to `call`
    pub async fn run<T, F, Fut>(&self, operation: Operation, request: R, call: F) -> Outcome<T>
    where
        F: FnOnce(R) -> Fut,
        Fut: Future<Output = Outcome<T>>,
    {
        debug!("{} request {}", operation, PipelineStage::Decoded);

        let request = (self.validate)(request)
            .map_err(|err| failed(operation, PipelineStage::Decoded, err))?;
        debug!("{} request {}", operation, PipelineStage::Validated);

        let request = (self.conform)(request)
            .map_err(|err| failed(operation, PipelineStage::Validated, err))?;
        debug!("{} request {}", operation, PipelineStage::Conformed);

        let outcome = call(request).await;
        debug!("{} request {}", operation, PipelineStage::Dispatched);

        match outcome {
            Ok(response) => {
                debug!("{} request succeeded", operation);
                Ok(response)
            }
            Err(err) => Err(failed(operation, PipelineStage::Dispatched, err)),
        }
    }
}

fn failed(operation: Operation, stage: PipelineStage, err: ClassifiedError) -> ClassifiedError {
    warn!(
        "{} request failed after stage {}: {} ({})",
        operation,
        stage,
        err,
        err.key()
    );
    err
}

/// One pipeline per operation, all dispatching into the same business layer
#[derive(Clone)]
pub struct Endpoints {
    operations: Arc<dyn ModelOperations>,
    create: Pipeline<CreateModelRequest>,
    get: Pipeline<GetModelRequest>,
    list: Pipeline<ListModelsRequest>,
    update: Pipeline<UpdateModelRequest>,
    delete: Pipeline<DeleteModelRequest>,
}

impl Endpoints {
    /// Wire the standard validation and conformance stages around `operations`
    pub fn new(operations: Arc<dyn ModelOperations>) -> Self {
        Self {
            operations,
            create: Pipeline::new(validation::validate_create, conformance::conform_create),
            get: Pipeline::new(validation::validate_get, conformance::conform_get),
            list: Pipeline::new(validation::validate_list, conformance::conform_list),
            update: Pipeline::new(validation::validate_update, conformance::conform_update),
            delete: Pipeline::new(validation::validate_delete, conformance::conform_delete),
        }
    }

    pub fn with_create_pipeline(mut self, pipeline: Pipeline<CreateModelRequest>) -> Self {
        self.create = pipeline;
        self
    }

    pub fn with_get_pipeline(mut self, pipeline: Pipeline<GetModelRequest>) -> Self {
        self.get = pipeline;
        self
    }

    pub fn with_list_pipeline(mut self, pipeline: Pipeline<ListModelsRequest>) -> Self {
        self.list = pipeline;
        self
    }

    pub fn with_update_pipeline(mut self, pipeline: Pipeline<UpdateModelRequest>) -> Self {
        self.update = pipeline;
        self
    }

    pub fn with_delete_pipeline(mut self, pipeline: Pipeline<DeleteModelRequest>) -> Self {
        self.delete = pipeline;
        self
    }

    pub async fn create(&self, request: CreateModelRequest) -> Outcome<Model> {
        let operations = &self.operations;
        self.create
            .run(Operation::Create, request, |request| operations.create(request))
            .await
    }

    pub async fn get(&self, request: GetModelRequest) -> Outcome<Model> {
        let operations = &self.operations;
        self.get
            .run(Operation::Get, request, |request| operations.get(request))
            .await
    }

    pub async fn list(&self, request: ListModelsRequest) -> Outcome<Vec<Model>> {
        let operations = &self.operations;
        self.list
            .run(Operation::List, request, |request| operations.list(request))
            .await
    }

    pub async fn update(&self, request: UpdateModelRequest) -> Outcome<Model> {
        let operations = &self.operations;
        self.update
            .run(Operation::Update, request, |request| operations.update(request))
            .await
    }

    pub async fn delete(&self, request: DeleteModelRequest) -> Outcome<DeleteModelResponse> {
        let operations = &self.operations;
        self.delete
            .run(Operation::Delete, request, |request| operations.delete(request))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ErrorKey;
    use crate::domain::identifier;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use uuid::Uuid;

    /// Records every request it receives and answers with a canned model
    #[derive(Default)]
    struct SpyOperations {
        calls: AtomicUsize,
        last_create: Mutex<Option<CreateModelRequest>>,
        last_list: Mutex<Option<ListModelsRequest>>,
        fail_with: Option<ClassifiedError>,
    }

    impl SpyOperations {
        fn failing(err: ClassifiedError) -> Self {
            Self {
                fail_with: Some(err),
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn answer(&self, id: Uuid, name: &str) -> Outcome<Model> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            Ok(Model {
                id,
                name: name.to_string(),
                description: None,
                created_at: "2025-06-14T10:30:00+00:00".to_string(),
                updated_at: "2025-06-14T10:30:00+00:00".to_string(),
            })
        }
    }

    #[async_trait]
    impl ModelOperations for SpyOperations {
        async fn create(&self, request: CreateModelRequest) -> Outcome<Model> {
            let name = request.name.clone();
            *self.last_create.lock().unwrap() = Some(request);
            self.answer(identifier::generate(), &name)
        }

        async fn get(&self, request: GetModelRequest) -> Outcome<Model> {
            self.answer(request.id, "fetched")
        }

        async fn list(&self, request: ListModelsRequest) -> Outcome<Vec<Model>> {
            *self.last_list.lock().unwrap() = Some(request);
            self.answer(identifier::generate(), "listed").map(|model| vec![model])
        }

        async fn update(&self, request: UpdateModelRequest) -> Outcome<Model> {
            self.answer(request.id, &request.name)
        }

        async fn delete(&self, request: DeleteModelRequest) -> Outcome<DeleteModelResponse> {
            self.answer(request.id, "deleted").map(|model| DeleteModelResponse {
                id: model.id,
                success_message: "deleted".to_string(),
            })
        }
    }

    fn endpoints(spy: &Arc<SpyOperations>) -> Endpoints {
        Endpoints::new(spy.clone())
    }

    fn reject_everything<R>(_: R) -> Outcome<R> {
        Err(ClassifiedError::invalid_request_body("conformance rejected request"))
    }

    #[tokio::test]
    async fn test_create_dispatches_conformed_request() {
        let spy = Arc::new(SpyOperations::default());
        let request = CreateModelRequest {
            name: "  widget  ".to_string(),
            description: Some("   ".to_string()),
        };

        let model = endpoints(&spy).create(request).await.unwrap();

        assert_eq!(model.name, "widget");
        assert_eq!(spy.calls(), 1);
        let seen = spy.last_create.lock().unwrap().clone().unwrap();
        assert_eq!(seen.name, "widget");
        assert_eq!(seen.description, None);
    }

    #[tokio::test]
    async fn test_validation_failure_skips_business_call() {
        let spy = Arc::new(SpyOperations::default());
        let endpoints = endpoints(&spy);

        let err = endpoints
            .create(CreateModelRequest {
                name: String::new(),
                description: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.key(), ErrorKey::InvalidRequestBody);

        let err = endpoints
            .get(GetModelRequest { id: Uuid::nil() })
            .await
            .unwrap_err();
        assert_eq!(err.key(), ErrorKey::InvalidId);

        let err = endpoints
            .delete(DeleteModelRequest { id: Uuid::nil() })
            .await
            .unwrap_err();
        assert_eq!(err.key(), ErrorKey::InvalidId);

        assert_eq!(spy.calls(), 0);
    }

    #[tokio::test]
    async fn test_conformance_failure_skips_business_call() {
        let spy = Arc::new(SpyOperations::default());
        let endpoints = endpoints(&spy).with_update_pipeline(Pipeline::new(
            validation::validate_update,
            reject_everything,
        ));

        let err = endpoints
            .update(UpdateModelRequest {
                id: identifier::generate(),
                name: "widget".to_string(),
                description: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.message(), "conformance rejected request");
        assert_eq!(spy.calls(), 0);
    }

    #[tokio::test]
    async fn test_validation_runs_before_conformance() {
        let spy = Arc::new(SpyOperations::default());
        let endpoints = endpoints(&spy)
            .with_get_pipeline(Pipeline::new(validation::validate_get, reject_everything));

        let err = endpoints
            .get(GetModelRequest { id: Uuid::nil() })
            .await
            .unwrap_err();

        assert_eq!(err.key(), ErrorKey::InvalidId);
        assert_eq!(spy.calls(), 0);
    }

    #[tokio::test]
    async fn test_business_error_is_returned_unchanged() {
        let denied = ClassifiedError::unauthorized("not your model");
        let spy = Arc::new(SpyOperations::failing(denied.clone()));

        let err = endpoints(&spy)
            .get(GetModelRequest {
                id: identifier::generate(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, denied);
        assert_eq!(spy.calls(), 1);
    }

    #[tokio::test]
    async fn test_list_receives_default_limit() {
        let spy = Arc::new(SpyOperations::default());

        let models = endpoints(&spy)
            .list(ListModelsRequest::default())
            .await
            .unwrap();

        assert_eq!(models.len(), 1);
        let seen = spy.last_list.lock().unwrap().unwrap();
        assert_eq!(seen.limit, Some(conformance::DEFAULT_LIST_LIMIT));
    }

    #[tokio::test]
    async fn test_delete_passes_through_acknowledgment() {
        let spy = Arc::new(SpyOperations::default());
        let id = identifier::generate();

        let ack = endpoints(&spy)
            .delete(DeleteModelRequest { id })
            .await
            .unwrap();

        assert_eq!(ack.id, id);
        assert_eq!(spy.calls(), 1);
    }

    #[test]
    fn test_operation_and_stage_names() {
        assert_eq!(Operation::Update.to_string(), "update");
        assert_eq!(PipelineStage::Conformed.to_string(), "conformed");
    }
}
