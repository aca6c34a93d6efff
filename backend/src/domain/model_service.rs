use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use shared::{
    CreateModelRequest, DeleteModelRequest, DeleteModelResponse, GetModelRequest,
    ListModelsRequest, Model, UpdateModelRequest,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::conformance::DEFAULT_LIST_LIMIT;
use super::endpoints::ModelOperations;
use super::error::{ClassifiedError, Outcome};
use super::identifier;
use crate::storage::ModelStorage;

pub const MODEL_NOT_FOUND_MESSAGE: &str = "model not found";

/// Business operations for models, backed by a [`ModelStorage`]
#[derive(Clone)]
pub struct ModelService {
    storage: Arc<dyn ModelStorage>,
}

impl ModelService {
    /// Create a new ModelService
    pub fn new(storage: Arc<dyn ModelStorage>) -> Self {
        Self { storage }
    }

    async fn existing_model(&self, model_id: &Uuid) -> Outcome<Model> {
        match self.storage.get_model(model_id).await? {
            Some(model) => Ok(model),
            None => {
                warn!("Model not found: {}", model_id);
                Err(ClassifiedError::not_found(MODEL_NOT_FOUND_MESSAGE))
            }
        }
    }
}

#[async_trait]
impl ModelOperations for ModelService {
    async fn create(&self, request: CreateModelRequest) -> Outcome<Model> {
        let now = Utc::now().to_rfc3339();
        let model = Model {
            id: identifier::generate(),
            name: request.name,
            description: request.description,
            created_at: now.clone(),
            updated_at: now,
        };

        self.storage.store_model(&model).await?;

        info!("Created model: {} with ID: {}", model.name, model.id);
        Ok(model)
    }

    async fn get(&self, request: GetModelRequest) -> Outcome<Model> {
        info!("Getting model: {}", request.id);
        self.existing_model(&request.id).await
    }

    async fn list(&self, request: ListModelsRequest) -> Outcome<Vec<Model>> {
        let limit = request.limit.unwrap_or(DEFAULT_LIST_LIMIT);
        let models = self.storage.list_models(limit).await?;

        info!("Found {} models", models.len());
        Ok(models)
    }

    async fn update(&self, request: UpdateModelRequest) -> Outcome<Model> {
        let mut model = self.existing_model(&request.id).await?;

        model.name = request.name;
        model.description = request.description;
        model.updated_at = Utc::now().to_rfc3339();

        // The model may have been deleted since it was read.
        if !self.storage.update_model(&model).await? {
            return Err(ClassifiedError::not_found(MODEL_NOT_FOUND_MESSAGE));
        }

        info!("Updated model: {} with ID: {}", model.name, model.id);
        Ok(model)
    }

    async fn delete(&self, request: DeleteModelRequest) -> Outcome<DeleteModelResponse> {
        if !self.storage.delete_model(&request.id).await? {
            warn!("Model not found: {}", request.id);
            return Err(ClassifiedError::not_found(MODEL_NOT_FOUND_MESSAGE));
        }

        info!("Deleted model with ID: {}", request.id);
        Ok(DeleteModelResponse {
            id: request.id,
            success_message: "Model deleted successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{ErrorKey, INTERNAL_ERROR_MESSAGE};
    use crate::storage::InMemoryModelRepository;

    fn create_test_service() -> ModelService {
        ModelService::new(Arc::new(InMemoryModelRepository::new()))
    }

    fn create_request(name: &str) -> CreateModelRequest {
        CreateModelRequest {
            name: name.to_string(),
            description: Some("a test model".to_string()),
        }
    }

    /// Storage whose every call fails
    struct BrokenStorage;

    #[async_trait]
    impl ModelStorage for BrokenStorage {
        async fn store_model(&self, _model: &Model) -> anyhow::Result<()> {
            anyhow::bail!("connection refused by 10.0.0.7")
        }

        async fn get_model(&self, _model_id: &Uuid) -> anyhow::Result<Option<Model>> {
            anyhow::bail!("connection refused by 10.0.0.7")
        }

        async fn list_models(&self, _limit: u32) -> anyhow::Result<Vec<Model>> {
            anyhow::bail!("connection refused by 10.0.0.7")
        }

        async fn update_model(&self, _model: &Model) -> anyhow::Result<bool> {
            anyhow::bail!("connection refused by 10.0.0.7")
        }

        async fn delete_model(&self, _model_id: &Uuid) -> anyhow::Result<bool> {
            anyhow::bail!("connection refused by 10.0.0.7")
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let service = create_test_service();

        let model = service.create(create_request("widget")).await.unwrap();

        assert!(!model.id.is_nil());
        assert_eq!(model.name, "widget");
        assert_eq!(model.description.as_deref(), Some("a test model"));
        assert_eq!(model.created_at, model.updated_at);
        assert!(chrono::DateTime::parse_from_rfc3339(&model.created_at).is_ok());
    }

    #[tokio::test]
    async fn test_get_created_model() {
        let service = create_test_service();
        let created = service.create(create_request("widget")).await.unwrap();

        let fetched = service.get(GetModelRequest { id: created.id }).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_model_is_not_found() {
        let service = create_test_service();

        let err = service
            .get(GetModelRequest {
                id: identifier::generate(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.key(), ErrorKey::NotFound);
        assert_eq!(err.message(), MODEL_NOT_FOUND_MESSAGE);
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let service = create_test_service();
        for name in ["alpha", "bravo", "charlie"] {
            service.create(create_request(name)).await.unwrap();
        }

        let models = service.list(ListModelsRequest { limit: Some(2) }).await.unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].name, "alpha");

        let models = service.list(ListModelsRequest::default()).await.unwrap();
        assert_eq!(models.len(), 3);
    }

    #[tokio::test]
    async fn test_update_existing_model() {
        let service = create_test_service();
        let created = service.create(create_request("widget")).await.unwrap();

        let updated = service
            .update(UpdateModelRequest {
                id: created.id,
                name: "gadget".to_string(),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "gadget");
        assert_eq!(updated.description, None);
        assert_eq!(updated.created_at, created.created_at);

        let fetched = service.get(GetModelRequest { id: created.id }).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_missing_model_is_not_found() {
        let service = create_test_service();

        let err = service
            .update(UpdateModelRequest {
                id: identifier::generate(),
                name: "gadget".to_string(),
                description: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.key(), ErrorKey::NotFound);
    }

    #[tokio::test]
    async fn test_delete_model() {
        let service = create_test_service();
        let created = service.create(create_request("widget")).await.unwrap();

        let ack = service.delete(DeleteModelRequest { id: created.id }).await.unwrap();
        assert_eq!(ack.id, created.id);

        let err = service
            .delete(DeleteModelRequest { id: created.id })
            .await
            .unwrap_err();
        assert_eq!(err.key(), ErrorKey::NotFound);
    }

    #[tokio::test]
    async fn test_storage_failures_are_internal_and_coarse() {
        let service = ModelService::new(Arc::new(BrokenStorage));

        let err = service.create(create_request("widget")).await.unwrap_err();
        assert_eq!(err.key(), ErrorKey::Internal);
        assert_eq!(err.message(), INTERNAL_ERROR_MESSAGE);

        let err = service.list(ListModelsRequest::default()).await.unwrap_err();
        assert_eq!(err.key(), ErrorKey::Internal);
        assert!(!err.message().contains("10.0.0.7"));
    }
}
