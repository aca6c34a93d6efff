use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A model resource as it appears on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Canonical hyphenated UUID assigned on creation
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Last modification timestamp (RFC 3339)
    pub updated_at: String,
}

/// Body of `POST /api/model/v1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateModelRequest {
    /// Required; a missing field decodes as empty and is rejected by validation
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Path input of `GET /api/model/v1/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetModelRequest {
    pub id: Uuid,
}

/// Input of `GET /api/model/v1`.
///
/// Nothing is decoded from the wire yet; `limit` is filled in by conformance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListModelsRequest {
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Body of `PUT /api/model/v1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateModelRequest {
    /// A missing id decodes as the nil UUID and is rejected by validation
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Path input of `DELETE /api/model/v1/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteModelRequest {
    pub id: Uuid,
}

/// Acknowledgment returned by a successful delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteModelResponse {
    pub id: Uuid,
    pub success_message: String,
}

/// Body of every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
