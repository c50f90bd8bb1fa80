//! # Resource Update Service
//!
//! Backend side of an inline cell edit: `PATCH /api/resources/{model}/{id}`
//! forwards the changed fields to the hosted `resources(model).update` call.
//!
//! The record id arrives percent-decoded from the path and is handed to the
//! hosted client, which encodes it again as a single path segment.

use crate::services::{bearer_token, error_response, json_error, missing_session};
use crate::state::AppState;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::registry;
use common::requests::UpdateRequest;
use log::info;

/// Actix web handler for `PATCH /api/resources/{model}/{record_id}`.
///
/// # Arguments
///
/// * `req` - Carries the bearer session token.
/// * `path` - Model id and record id.
/// * `payload` - The changed fields; an empty set is rejected with `400`.
/// * `state` - Shared application state.
///
/// # Returns
///
/// `200 OK` with the `UpdateResponse`; the confirmed record is included when
/// the service sends one.
pub(crate) async fn process(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    payload: web::Json<UpdateRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let Some(token) = bearer_token(&req) else {
        return missing_session();
    };
    let (model_id, record_id) = path.into_inner();
    let Some(model) = registry::model(&model_id) else {
        return json_error(StatusCode::NOT_FOUND, format!("unknown model '{}'", model_id));
    };
    if payload.fields.is_empty() {
        return json_error(StatusCode::BAD_REQUEST, "no fields to update");
    }

    match state
        .morph
        .update_resource(&token, model.id, &record_id, &payload)
        .await
    {
        Ok(response) => {
            info!("updated {} {}", model.id, record_id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => error_response(&e),
    }
}
