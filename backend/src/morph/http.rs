//! `MorphApi` over the hosted REST endpoints.
//!
//! Session creation authenticates with the project's public and secret keys
//! (HTTP basic auth); every resource and field call carries the session token
//! as a bearer token. Model and record ids are pushed as individual path
//! segments, so characters such as `?`, `#` or `/` inside an id stay part of
//! that segment.

use super::{MorphApi, MorphError};
use crate::config::AppConfig;
use async_trait::async_trait;
use common::model::field::{CreateFieldConfig, FieldFilters, FieldMeta};
use common::requests::{
    ApiError, CreateSessionRequest, ListParams, ListResponse, SessionResponse, UpdateRequest, UpdateResponse,
};
use log::debug;
use reqwest::Url;
use serde::de::DeserializeOwned;

pub struct HttpMorphClient {
    client: reqwest::Client,
    base_url: Url,
    public_key: String,
    secret_key: String,
}

impl HttpMorphClient {
    pub fn new(config: &AppConfig) -> Result<Self, MorphError> {
        let base_url = Url::parse(&config.api_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| MorphError::InvalidUrl(config.api_url.clone()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            public_key: config.public_key.clone(),
            secret_key: config.secret_key.clone(),
        })
    }

    /// Endpoint URL with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, MorphError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| MorphError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Decodes a response body, turning `{ error }` bodies and failure statuses
/// into `MorphError::Api`.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, MorphError> {
    let status = response.status();
    let body = response.bytes().await?;

    if let Ok(ApiError { error }) = serde_json::from_slice::<ApiError>(&body) {
        return Err(MorphError::api(status.as_u16(), error));
    }
    if !status.is_success() {
        let message = String::from_utf8_lossy(&body).trim().to_string();
        let message = if message.is_empty() {
            status.canonical_reason().unwrap_or("request failed").to_string()
        } else {
            message
        };
        return Err(MorphError::api(status.as_u16(), message));
    }
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl MorphApi for HttpMorphClient {
    async fn create_session(&self, request: &CreateSessionRequest) -> Result<SessionResponse, MorphError> {
        debug!("creating session for connector {}", request.connection.connector_id);
        let response = self
            .client
            .post(self.endpoint(&["sessions"])?)
            .basic_auth(&self.public_key, Some(&self.secret_key))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn list_resources(
        &self,
        session_token: &str,
        model: &str,
        params: &ListParams,
    ) -> Result<ListResponse, MorphError> {
        debug!("listing {} (limit {}, cursor {:?})", model, params.limit, params.cursor);
        let response = self
            .client
            .get(self.endpoint(&["resources", model])?)
            .bearer_auth(session_token)
            .query(params)
            .send()
            .await?;
        decode(response).await
    }

    async fn update_resource(
        &self,
        session_token: &str,
        model: &str,
        record_id: &str,
        request: &UpdateRequest,
    ) -> Result<UpdateResponse, MorphError> {
        debug!("updating {} {}", model, record_id);
        let response = self
            .client
            .patch(self.endpoint(&["resources", model, record_id])?)
            .bearer_auth(session_token)
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    async fn list_fields(&self, session_token: &str, filters: &FieldFilters) -> Result<Vec<FieldMeta>, MorphError> {
        let response = self
            .client
            .get(self.endpoint(&["fields"])?)
            .bearer_auth(session_token)
            .query(filters)
            .send()
            .await?;
        decode(response).await
    }

    async fn create_field(&self, session_token: &str, config: &CreateFieldConfig) -> Result<FieldMeta, MorphError> {
        let response = self
            .client
            .post(self.endpoint(&["fields"])?)
            .bearer_auth(session_token)
            .json(config)
            .send()
            .await?;
        decode(response).await
    }
}
