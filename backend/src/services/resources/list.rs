//! # Resource Listing Service
//!
//! Proxies `GET /api/resources/{model}` to the hosted `resources(model).list`
//! call for the client-mode table.
//!
//! ## Workflow
//!
//! 1.  **Authentication**: the session token is read from the bearer header;
//!     without one the call ends with `401`.
//! 2.  **Model Lookup**: only models of the registry are forwarded.
//! 3.  **Forwarding**: `fields`, `q` and `cursor` pass through unchanged and
//!     `limit` is clamped to `1..=100`.
//! 4.  **HTTP Response**: the page (`{ data, next }`) is returned as is.

use crate::services::{bearer_token, error_response, json_error, missing_session};
use crate::state::AppState;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use common::registry;
use common::requests::ListParams;

/// Largest page the proxy forwards.
const MAX_LIMIT: u32 = 100;

/// Actix web handler for `GET /api/resources/{model}`.
///
/// # Arguments
///
/// * `req` - Carries the `Authorization: Bearer` session token.
/// * `model_id` - Unified model id from the path.
/// * `params` - Field list, page size, search term and cursor.
/// * `state` - Shared application state.
///
/// # Returns
///
/// `200 OK` with a `ListResponse`, or an `{ error }` body.
pub(crate) async fn process(
    req: HttpRequest,
    model_id: web::Path<String>,
    params: web::Query<ListParams>,
    state: web::Data<AppState>,
) -> impl Responder {
    let Some(token) = bearer_token(&req) else {
        return missing_session();
    };
    let Some(model) = registry::model(model_id.as_str()) else {
        return json_error(StatusCode::NOT_FOUND, format!("unknown model '{}'", model_id.as_str()));
    };

    let mut params = params.into_inner();
    params.limit = params.limit.clamp(1, MAX_LIMIT);

    match state.morph.list_resources(&token, model.id, &params).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use crate::morph::fake::{FakeMorph, FAKE_TOKEN};
    use crate::services::{self, testing};
    use actix_web::{test, web, App};
    use common::model::record::ResourceRecord;
    use common::requests::ListResponse;

    fn contacts(n: usize) -> FakeMorph {
        FakeMorph::with_records(
            "genericContact",
            (0..n)
                .map(|i| ResourceRecord::new(format!("r{}", i)).with_field("firstName", format!("name{}", i).as_str()))
                .collect(),
        )
    }

    #[actix_web::test]
    async fn pages_through_records() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(contacts(25))))
                .configure(services::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/resources/genericContact?fields=firstName&limit=20")
            .insert_header(("Authorization", format!("Bearer {}", FAKE_TOKEN)))
            .to_request();
        let first: ListResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(first.data.len(), 20);
        assert_eq!(first.next.as_deref(), Some("20"));

        let req = test::TestRequest::get()
            .uri("/api/resources/genericContact?fields=firstName&limit=20&cursor=20")
            .insert_header(("Authorization", format!("Bearer {}", FAKE_TOKEN)))
            .to_request();
        let second: ListResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(second.data.len(), 5);
        assert_eq!(second.next, None);
    }

    #[actix_web::test]
    async fn requires_session_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(contacts(1))))
                .configure(services::configure),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/resources/genericContact?fields=firstName&limit=20")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn hosted_server_errors_become_bad_gateway() {
        let fake = FakeMorph {
            fail_list: true,
            ..contacts(1)
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(fake)))
                .configure(services::configure),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/resources/genericContact?fields=firstName&limit=20")
            .insert_header(("Authorization", format!("Bearer {}", FAKE_TOKEN)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 502);
    }
}
