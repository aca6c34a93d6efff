//! # Storage Traits
//!
//! The storage abstraction the model service is written against, so that
//! different backends can be swapped in without touching the domain layer.

use anyhow::Result;
use async_trait::async_trait;
use shared::Model;
use uuid::Uuid;

/// Trait defining the interface for model storage operations
#[async_trait]
pub trait ModelStorage: Send + Sync {
    /// Store a new model; fails if the id is already taken
    async fn store_model(&self, model: &Model) -> Result<()>;

    /// Retrieve a specific model by ID
    async fn get_model(&self, model_id: &Uuid) -> Result<Option<Model>>;

    /// List up to `limit` models, oldest first
    async fn list_models(&self, limit: u32) -> Result<Vec<Model>>;

    /// Replace an existing model.
    /// Returns false if no model with that id exists
    async fn update_model(&self, model: &Model) -> Result<bool>;

    /// Delete a model by ID.
    /// Returns true if the model was found and deleted, false otherwise
    async fn delete_model(&self, model_id: &Uuid) -> Result<bool>;
}
