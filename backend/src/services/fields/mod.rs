//! # Field Service
//!
//! Field metadata for the fields panel of the client page: which unified and
//! remote fields a model has, and creation of new custom fields.

mod create;
mod list;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/fields";

/// # Registered Routes:
///
/// *   **`GET /{model}?remote=`**:
///     - **Handler**: `list::process`
///     - **Description**: `FieldMeta` list for the model, optionally only remote fields.
///
/// *   **`POST /`**:
///     - **Handler**: `create::process`
///     - **Description**: Creates a field from a `CreateFieldConfig` and answers
///       with its `FieldMeta`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("/{model}", get().to(list::process))
}
