//! Field metadata for one model: `GET /api/fields/{model}?remote=`.
//!
//! The browser app uses the answer to turn select fields into option lists
//! and to offer remote fields as extra table columns.

use crate::services::{bearer_token, error_response, json_error, missing_session};
use crate::state::AppState;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::field::FieldFilters;
use common::registry;
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct ListFieldsQuery {
    remote: Option<bool>,
}

/// Actix web handler for `GET /api/fields/{model}`.
///
/// # Returns
///
/// `200 OK` with the matching `FieldMeta` list, filtered to remote fields
/// when `remote=true`.
pub(crate) async fn process(
    req: HttpRequest,
    model_id: web::Path<String>,
    query: web::Query<ListFieldsQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let Some(token) = bearer_token(&req) else {
        return missing_session();
    };
    let Some(model) = registry::model(model_id.as_str()) else {
        return json_error(StatusCode::NOT_FOUND, format!("unknown model '{}'", model_id.as_str()));
    };

    let filters = FieldFilters {
        model: model.id.to_string(),
        remote: query.remote,
    };
    match state.morph.list_fields(&token, &filters).await {
        Ok(fields) => HttpResponse::Ok().json(fields),
        Err(e) => error_response(&e),
    }
}
