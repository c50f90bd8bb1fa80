//! # Field Creation Service
//!
//! `POST /api/fields` creates a custom field through the hosted
//! `fields.create` call.
//!
//! ## Workflow
//!
//! 1.  **Authentication**: bearer session token, `401` without one.
//! 2.  **Validation**: `validate` checks the model against the registry, the
//!     label for content and select fields for at least one option. Failures
//!     are answered with `400` before anything is sent upstream.
//! 3.  **HTTP Response**: the created `FieldMeta`, or the hosted error.

use crate::services::{bearer_token, error_response, json_error, missing_session};
use crate::state::AppState;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::model::field::{CreateFieldConfig, FieldKind};
use common::registry;
use log::info;

/// Actix web handler for `POST /api/fields`.
///
/// # Arguments
///
/// * `req` - Carries the bearer session token.
/// * `payload` - The `CreateFieldConfig` built by the fields panel.
/// * `state` - Shared application state.
pub(crate) async fn process(
    req: HttpRequest,
    payload: web::Json<CreateFieldConfig>,
    state: web::Data<AppState>,
) -> impl Responder {
    let Some(token) = bearer_token(&req) else {
        return missing_session();
    };
    let config = payload.into_inner();
    if let Err(message) = validate(&config) {
        return json_error(StatusCode::BAD_REQUEST, message);
    }

    match state.morph.create_field(&token, &config).await {
        Ok(field) => {
            info!("created field {} on {}", field.id, field.model);
            HttpResponse::Ok().json(field)
        }
        Err(e) => error_response(&e),
    }
}

fn validate(config: &CreateFieldConfig) -> Result<(), String> {
    if registry::model(&config.model).is_none() {
        return Err(format!("unknown model '{}'", config.model));
    }
    if config.label.trim().is_empty() {
        return Err("field label must not be empty".to_string());
    }
    let has_options = config.options.as_ref().is_some_and(|o| !o.is_empty());
    if config.kind == FieldKind::Select && !has_options {
        return Err("select fields need at least one option".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::morph::fake::{FakeMorph, FAKE_TOKEN};
    use crate::services::{self, testing};
    use actix_web::{test, web, App};
    use common::model::field::{FieldKind, FieldMeta};
    use serde_json::json;

    #[actix_web::test]
    async fn created_field_is_listed() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(FakeMorph::default())))
                .configure(services::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/fields")
            .insert_header(("Authorization", format!("Bearer {}", FAKE_TOKEN)))
            .set_json(json!({
                "model": "genericContact",
                "label": "Tier",
                "type": "select",
                "options": [{ "value": "gold", "label": "Gold" }]
            }))
            .to_request();
        let created: FieldMeta = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.kind, FieldKind::Select);

        let req = test::TestRequest::get()
            .uri("/api/fields/genericContact")
            .insert_header(("Authorization", format!("Bearer {}", FAKE_TOKEN)))
            .to_request();
        let listed: Vec<FieldMeta> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![created]);

        let req = test::TestRequest::get()
            .uri("/api/fields/genericCompany")
            .insert_header(("Authorization", format!("Bearer {}", FAKE_TOKEN)))
            .to_request();
        let other: Vec<FieldMeta> = test::call_and_read_body_json(&app, req).await;
        assert!(other.is_empty());
    }

    #[actix_web::test]
    async fn select_without_options_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(FakeMorph::default())))
                .configure(services::configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/fields")
            .insert_header(("Authorization", format!("Bearer {}", FAKE_TOKEN)))
            .set_json(json!({ "model": "genericContact", "label": "Tier", "type": "select" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
