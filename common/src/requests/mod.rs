//! Request and response payloads of the hosted service and of the backend API
//! that proxies it for the browser app.

use crate::model::record::{FieldValue, ResourceRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Connection scope of a session: which connector, on behalf of which owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConnection {
    pub connector_id: String,
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<String>>,
}

/// Payload of the hosted `sessions.create` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub connection: SessionConnection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_token: String,
}

/// Body the browser app posts to `/api/session`. The owner is filled in by
/// the backend from its configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSessionRequest {
    pub connector_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<String>>,
}

/// Query of a resource list call. `fields` is comma separated on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListParams {
    pub fields: String,
    pub limit: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl ListParams {
    pub fn new<'a>(fields: impl IntoIterator<Item = &'a str>, limit: u32) -> Self {
        Self {
            fields: fields.into_iter().collect::<Vec<_>>().join(","),
            limit,
            q: None,
            cursor: None,
        }
    }

    /// Sets the search term; blank terms are dropped.
    pub fn with_search(mut self, q: &str) -> Self {
        let q = q.trim();
        self.q = (!q.is_empty()).then(|| q.to_string());
        self
    }

    pub fn with_cursor(mut self, cursor: Option<String>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn field_list(&self) -> Vec<&str> {
        self.fields.split(',').filter(|f| !f.is_empty()).collect()
    }

    /// Key/value pairs for building a query string.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("fields", self.fields.clone()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(q) = &self.q {
            pairs.push(("q", q.clone()));
        }
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor", cursor.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    pub data: Vec<ResourceRecord>,
    #[serde(default)]
    pub next: Option<String>,
}

/// Body of an update call: the changed fields only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub fields: BTreeMap<String, FieldValue>,
}

/// The service answers an update with an empty object, or with the confirmed
/// record when it has one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResourceRecord>,
}

/// Error body, both from the hosted service and from the backend API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Path under `/api` of the backend, with every segment percent-encoded so
/// record ids keep characters like `?`, `#` and `/` inside their segment.
pub fn api_path(segments: &[&str]) -> String {
    segments.iter().fold(String::from("/api"), |mut path, segment| {
        path.push('/');
        path.push_str(&urlencoding::encode(segment));
        path
    })
}
