//! Client side of the hosted Morph service.
//!
//! The rest of the backend talks to the service only through [`MorphApi`], so
//! handlers can be exercised against the in-memory fake in tests while
//! `main.rs` wires in [`http::HttpMorphClient`].

pub mod http;

#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use common::model::field::{CreateFieldConfig, FieldFilters, FieldMeta};
use common::requests::{
    CreateSessionRequest, ListParams, ListResponse, SessionResponse, UpdateRequest, UpdateResponse,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MorphError {
    /// The request never produced a response.
    #[error("hosted service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with an `{ error }` body or a failure status.
    #[error("hosted service error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("unexpected response from hosted service: {0}")]
    Decode(#[from] serde_json::Error),
    /// The configured API URL cannot carry path segments.
    #[error("invalid hosted service url '{0}'")]
    InvalidUrl(String),
}

impl MorphError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        MorphError::Api {
            status,
            message: message.into(),
        }
    }

    /// Status of an API error, if the service sent one.
    pub fn status(&self) -> Option<u16> {
        match self {
            MorphError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[async_trait]
pub trait MorphApi: Send + Sync {
    /// `sessions.create`, authenticated with the project keys.
    async fn create_session(&self, request: &CreateSessionRequest) -> Result<SessionResponse, MorphError>;

    /// `resources(model).list`.
    async fn list_resources(
        &self,
        session_token: &str,
        model: &str,
        params: &ListParams,
    ) -> Result<ListResponse, MorphError>;

    /// `resources(model).update(id, fields)`.
    async fn update_resource(
        &self,
        session_token: &str,
        model: &str,
        record_id: &str,
        request: &UpdateRequest,
    ) -> Result<UpdateResponse, MorphError>;

    /// `fields.list({ filters })`.
    async fn list_fields(&self, session_token: &str, filters: &FieldFilters) -> Result<Vec<FieldMeta>, MorphError>;

    /// `fields.create(config)`.
    async fn create_field(&self, session_token: &str, config: &CreateFieldConfig) -> Result<FieldMeta, MorphError>;
}
