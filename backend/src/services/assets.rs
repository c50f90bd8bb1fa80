//! The browser app, embedded at build time from `static/dist` (copied from
//! `frontend/dist` by `build.rs`).
//!
//! Unknown paths fall back to `index.html`, which is how `/client/...` routes
//! reach the app.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use log::debug;
use mime_guess::from_path;
use std::path::Path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

fn file_response(file: &File, content_type: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(content_type)
        .body(file.contents().to_vec())
}

/// Default service: an embedded file, or the app shell for navigation paths.
///
/// A missing path with a file extension is a missing asset and gets `404`
/// rather than the HTML shell, so a stale bundle reference fails loudly.
pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let asset = if path.is_empty() { "index.html" } else { path };

    if let Some(file) = STATIC_DIR.get_file(asset) {
        let mime = from_path(asset).first_or_octet_stream();
        return file_response(file, mime.as_ref());
    }
    if Path::new(asset).extension().is_some() {
        debug!("no embedded asset at /{}", asset);
        return HttpResponse::NotFound().body("Not Found");
    }
    match STATIC_DIR.get_file("index.html") {
        Some(index) => file_response(index, "text/html; charset=utf-8"),
        None => {
            debug!("app shell missing from the embedded assets");
            HttpResponse::NotFound().body("Not Found")
        }
    }
}
