mod config;
mod morph;
mod services;
mod state;

use crate::config::AppConfig;
use crate::morph::http::HttpMorphClient;
use crate::morph::MorphApi;
use crate::state::AppState;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::sync::Arc;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let url = config.local_url();

    if config.open_browser {
        let url_clone = url.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            let _ = webbrowser::open(&url_clone);
        });
    }

    let bind = (config.host.clone(), config.port);
    let morph: Arc<dyn MorphApi> = match HttpMorphClient::new(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let state = AppState::new(config, morph);

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(services::configure)
            .default_service(web::route().to(services::assets::serve_embedded))
    })
    .bind(bind)?
    .run()
    .await
}
