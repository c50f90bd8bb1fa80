//! # Session Start Service
//!
//! Backend logic for `POST /api/session`, the first call the browser app makes
//! on a client-mode page.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: `process` receives a `StartSessionRequest` with the
//!     connector id and, optionally, the operations the session may perform.
//! 2.  **Connector Lookup**: the id must name a connector of the registry;
//!     anything else is answered with `404 Not Found`.
//! 3.  **Session Creation**: `AppState::create_session` asks the hosted service
//!     for a session scoped to that connector and the configured owner.
//! 4.  **HTTP Response**: the token is returned as `{ "sessionToken": ... }`.
//!     Hosted failures go through `error_response`.

use crate::services::{error_response, json_error};
use crate::state::AppState;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use common::registry;
use common::requests::{SessionResponse, StartSessionRequest};
use log::info;

/// Actix web handler for `POST /api/session`.
///
/// # Arguments
///
/// * `state` - Shared application state holding the hosted-service client.
/// * `payload` - The connector to open a session for.
///
/// # Returns
///
/// `200 OK` with a `SessionResponse`, `404` for an unknown connector, or the
/// hosted service's error status.
pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<StartSessionRequest>,
) -> impl Responder {
    let request = payload.into_inner();
    let Some(connector) = registry::connector(&request.connector_id) else {
        return json_error(
            StatusCode::NOT_FOUND,
            format!("unknown connector '{}'", request.connector_id),
        );
    };

    match state.create_session(connector.id, request.operations).await {
        Ok(session_token) => {
            info!("session created for {}", connector.id);
            HttpResponse::Ok().json(SessionResponse { session_token })
        }
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use crate::morph::fake::{FakeMorph, FAKE_TOKEN};
    use crate::services::{self, testing};
    use actix_web::{test, web, App};
    use common::requests::SessionResponse;
    use serde_json::json;

    #[actix_web::test]
    async fn returns_session_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(FakeMorph::default())))
                .configure(services::configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/session")
            .set_json(json!({ "connectorId": "hubspot" }))
            .to_request();
        let body: SessionResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.session_token, FAKE_TOKEN);
    }

    #[actix_web::test]
    async fn unknown_connector_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(FakeMorph::default())))
                .configure(services::configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/session")
            .set_json(json!({ "connectorId": "acme" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn hosted_failure_is_reported() {
        let fake = FakeMorph {
            fail_session: true,
            ..FakeMorph::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(testing::state(fake)))
                .configure(services::configure),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/session")
            .set_json(json!({ "connectorId": "hubspot" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
