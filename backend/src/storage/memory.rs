//! In-memory model repository.
//!
//! Keeps models in a map guarded by a `tokio` read/write lock, with a
//! separate insertion log so listings come back in creation order.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;
use shared::Model;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::traits::ModelStorage;

#[derive(Default)]
struct Inner {
    models: HashMap<Uuid, Model>,
    insertion_order: Vec<Uuid>,
}

/// Repository that lives for as long as the process does
#[derive(Clone, Default)]
pub struct InMemoryModelRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryModelRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ModelStorage for InMemoryModelRepository {
    async fn store_model(&self, model: &Model) -> Result<()> {
        let mut inner = self.inner.write().await;
        if inner.models.contains_key(&model.id) {
            bail!("model {} already exists", model.id);
        }

        inner.insertion_order.push(model.id);
        inner.models.insert(model.id, model.clone());
        debug!("Stored model {}", model.id);
        Ok(())
    }

    async fn get_model(&self, model_id: &Uuid) -> Result<Option<Model>> {
        let inner = self.inner.read().await;
        Ok(inner.models.get(model_id).cloned())
    }

    async fn list_models(&self, limit: u32) -> Result<Vec<Model>> {
        let inner = self.inner.read().await;
        let models = inner
            .insertion_order
            .iter()
            .filter_map(|id| inner.models.get(id))
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(models)
    }

    async fn update_model(&self, model: &Model) -> Result<bool> {
        let mut inner = self.inner.write().await;
        match inner.models.get_mut(&model.id) {
            Some(existing) => {
                *existing = model.clone();
                debug!("Updated model {}", model.id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_model(&self, model_id: &Uuid) -> Result<bool> {
        let mut inner = self.inner.write().await;
        if inner.models.remove(model_id).is_none() {
            return Ok(false);
        }

        inner.insertion_order.retain(|id| id != model_id);
        debug!("Deleted model {}", model_id);
        Ok(true)
    }
}
