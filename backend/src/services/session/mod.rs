//! # Session Service
//!
//! Issues hosted-service session tokens to the browser app. The project keys
//! never leave the backend: the app posts the connector it wants and receives
//! a short-lived token scoped to that connector and the configured owner.

mod start;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/session";

/// # Registered Routes:
///
/// *   **`POST /api/session`**:
///     - **Handler**: `start::process`
///     - **Description**: Expects a `StartSessionRequest` (`connectorId`, optional
///       `operations`) and answers `{ "sessionToken": ... }`. Unknown connectors
///       get `404`; hosted-service failures are passed on as JSON errors.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(start::process))
}
