//! # Resource Service
//!
//! JSON proxy for record reads and writes made by the client resource table.
//! Every route requires `Authorization: Bearer <sessionToken>`.

mod list;
mod update;

use actix_web::web::{get, patch, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/resources";

/// # Registered Routes:
///
/// *   **`GET /{model}?fields=&limit=&q=&cursor=`**:
///     - **Handler**: `list::process`
///     - **Description**: One page of records, answered as `{ data, next }`.
///
/// *   **`PATCH /{model}/{record_id}`**:
///     - **Handler**: `update::process`
///     - **Description**: Applies `{ fields: { id: value } }` to one record and
///       answers with the confirmed record when the service returns one.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/{model}", get().to(list::process))
        .route("/{model}/{record_id}", patch().to(update::process))
}
