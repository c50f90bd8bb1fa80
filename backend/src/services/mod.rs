//! HTTP surface of the dashboard.
//!
//! - `session`, `resources`, `fields`: JSON API used by the browser app. Each
//!   call is forwarded to the hosted service with the caller's session token.
//! - `pages`: server-rendered connection and resource pages.
//! - `assets`: the embedded browser app, served for every other path.

pub mod assets;
mod fields;
mod pages;
mod resources;
mod session;

use crate::morph::MorphError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use common::requests::ApiError;
use log::warn;

/// Registers every route except the asset fallback.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(session::configure_routes())
        .service(resources::configure_routes())
        .service(fields::configure_routes());
    pages::configure_routes(cfg);
}

/// Session token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

pub(crate) fn json_error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ApiError::new(message))
}

pub(crate) fn missing_session() -> HttpResponse {
    json_error(StatusCode::UNAUTHORIZED, "missing session token")
}

/// Client errors reported by the hosted service keep their status; anything
/// else becomes `502 Bad Gateway`.
pub(crate) fn error_response(err: &MorphError) -> HttpResponse {
    warn!("hosted service call failed: {}", err);
    let status = err
        .status()
        .filter(|s| (400..500).contains(s))
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(StatusCode::BAD_GATEWAY);
    let message = match err {
        MorphError::Api { message, .. } => message.clone(),
        other => other.to_string(),
    };
    json_error(status, message)
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::config::test_config;
    use crate::morph::fake::FakeMorph;
    use crate::state::AppState;
    use std::sync::Arc;

    pub fn state(fake: FakeMorph) -> AppState {
        AppState::new(test_config(), Arc::new(fake))
    }
}
