//! Calls from the browser app to the backend API. Every resource and field
//! call carries the session token as a bearer token.

use common::model::field::{CreateFieldConfig, FieldMeta};
use common::requests::{
    api_path, ApiError, ListParams, ListResponse, SessionResponse, StartSessionRequest, UpdateRequest, UpdateResponse,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

fn authorized(builder: RequestBuilder, session_token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", session_token))
}

/// Decodes a successful body, or turns an error body into its message.
async fn read<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let status = response.status();
    if response.ok() {
        return response.json::<T>().await.map_err(|e| e.to_string());
    }
    match response.json::<ApiError>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(format!("request failed with status {}", status)),
    }
}

pub async fn start_session(connector_id: &str) -> Result<String, String> {
    let body = StartSessionRequest {
        connector_id: connector_id.to_string(),
        operations: None,
    };
    let response = Request::post("/api/session")
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read::<SessionResponse>(response).await.map(|s| s.session_token)
}

pub async fn list_resources(session_token: &str, model: &str, params: &ListParams) -> Result<ListResponse, String> {
    let pairs = params.pairs();
    let response = authorized(Request::get(&api_path(&["resources", model])), session_token)
        .query(pairs.iter().map(|(k, v)| (*k, v)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read(response).await
}

pub async fn update_resource(
    session_token: &str,
    model: &str,
    record_id: &str,
    body: &UpdateRequest,
) -> Result<UpdateResponse, String> {
    let response = authorized(
        Request::patch(&api_path(&["resources", model, record_id])),
        session_token,
    )
    .json(body)
    .map_err(|e| e.to_string())?
    .send()
    .await
    .map_err(|e| e.to_string())?;
    read(response).await
}

pub async fn list_fields(session_token: &str, model: &str) -> Result<Vec<FieldMeta>, String> {
    let response = authorized(Request::get(&api_path(&["fields", model])), session_token)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read(response).await
}

pub async fn create_field(session_token: &str, config: &CreateFieldConfig) -> Result<FieldMeta, String> {
    let response = authorized(Request::post("/api/fields"), session_token)
        .json(config)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read(response).await
}
