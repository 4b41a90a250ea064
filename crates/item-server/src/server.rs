use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::io;

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::handlers;
use crate::middleware::TracingMiddleware;
use crate::state::AppState;

/// Malformed or mistyped JSON bodies are reported as `AppError::BadRequest`.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route(
            "/extract_item_name",
            web::post().to(handlers::extract::handler),
        )
        .route("/health", web::get().to(handlers::health::handler))
        .route("/info", web::get().to(handlers::info::handler));
}

pub async fn run_server(config: ServerConfig) -> io::Result<()> {
    let state = web::Data::new(AppState::from_config(&config));

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(TracingMiddleware)
            .configure(app_config)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    tracing::info!(
        "Starting item name extractor on http://{}:{}",
        config.host,
        config.port
    );

    server
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
