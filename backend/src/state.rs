//! Shared application state injected into every handler as `web::Data`.

use crate::config::AppConfig;
use crate::morph::{MorphApi, MorphError};
use common::requests::{CreateSessionRequest, SessionConnection};
use std::sync::Arc;

/// Cloned into each actix worker; both members are shared behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub morph: Arc<dyn MorphApi>,
}

impl AppState {
    pub fn new(config: AppConfig, morph: Arc<dyn MorphApi>) -> Self {
        Self {
            config: Arc::new(config),
            morph,
        }
    }

    /// Creates a session for `connector_id` on behalf of the configured owner
    /// and returns its token.
    pub async fn create_session(
        &self,
        connector_id: &str,
        operations: Option<Vec<String>>,
    ) -> Result<String, MorphError> {
        let request = CreateSessionRequest {
            connection: SessionConnection {
                connector_id: connector_id.to_string(),
                owner_id: self.config.owner_id.clone(),
                operations,
            },
        };
        let response = self.morph.create_session(&request).await?;
        Ok(response.session_token)
    }
}
