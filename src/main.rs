mod api_docs;
mod config;
mod controllers;
mod errors;
mod models;
mod routes;
mod services;
mod shared_state;

use std::net::SocketAddr;

use axum::{Router, response::Html, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::api_docs::ApiDoc;
use crate::config::Config;
use crate::routes::api_routes::api_routes;
use crate::shared_state::SharedState;

#[tokio::main]
async fn main() {
    // 1. Load configuration
    let config_path = std::env::var("SOLAR360_CONFIG").unwrap_or_else(|_| "config.json".to_string());
    let config = match Config::load_or_default(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load {}: {}", config_path, e);
            return;
        }
    };

    // 2. Logging; RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    if std::path::Path::new(&config_path).exists() {
        tracing::info!(
            "Configuration loaded from {} (simulated delay: {})",
            config_path, config.presentation.simulate_delay
        );
    } else {
        tracing::warn!("{} not found, using built-in defaults", config_path);
    }

    // 3. Shared state
    let shared = SharedState::new(config.clone());

    // 4. HTTP server
    let mut app = Router::new()
        .nest("/api", api_routes(shared))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http());
    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    let addr: SocketAddr = match format!("{}:{}", config.server.host, config.server.port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Invalid listen address {}:{}: {}", config.server.host, config.server.port, e);
            return;
        }
    };
    tracing::info!("API Server listening on http://{}", addr);
    tracing::info!("Scalar UI: http://{}/scalar", addr);
    tracing::info!("Static site served from {}", config.static_dir);

    if let Err(e) = axum_server::bind(addr).serve(app.into_make_service()).await {
        tracing::error!("HTTP server error: {}", e);
    }
}
