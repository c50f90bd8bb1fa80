//! # Server-rendered Pages
//!
//! Request-scoped renders with no client-side state. Each page resolves the
//! connector and model from its path, talks to the hosted service once and
//! answers with a complete HTML document. Any failure on the way renders the
//! not-found page.

mod connection;
pub(crate) mod layout;
mod resources;

use crate::morph::MorphError;
use actix_web::http::header;
use actix_web::web::{get, scope, ServiceConfig};
use actix_web::HttpResponse;
use common::nav::connection_route;
use common::registry;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum PageError {
    #[error("unknown connector")]
    UnknownConnector,
    #[error("unknown model")]
    UnknownModel,
    #[error(transparent)]
    Morph(#[from] MorphError),
}

/// # Registered Routes:
///
/// *   **`GET /`**, **`GET /server`**: redirect to the default connector's connection page.
/// *   **`GET /server/{connector}/connection`**: `connection::process`.
/// *   **`GET /server/{connector}/resources/{model}?q=&remoteFields=`**: `resources::process`.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("/", get().to(home)).service(
        scope("/server")
            .route("", get().to(home))
            .route("/", get().to(home))
            .route("/{connector}/connection", get().to(connection::process))
            .route("/{connector}/resources/{model}", get().to(resources::process)),
    );
}

async fn home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, connection_route(registry::default_connector().id)))
        .finish()
}
