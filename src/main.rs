//! Service entry point: configuration, tracing, process-scoped stores,
//! HTTP server.

use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use style_compass::adapters::http::api_router;
use style_compass::adapters::memory::{InMemoryResultLog, InMemorySessionStore};
use style_compass::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server.log_level);

    // Process-scoped stores: created here, reset only on restart,
    // injected into the pipeline rather than reached for globally.
    let session_store = Arc::new(InMemorySessionStore::new());
    let result_log = Arc::new(InMemoryResultLog::new());

    let cors = build_cors(&config);
    let app = api_router(session_store, result_log, config.admin.secret.clone())
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, environment = ?config.server.environment, "style-compass listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn build_cors(config: &AppConfig) -> CorsLayer {
    let origins = config.server.cors_origins_list();
    if origins.is_empty() {
        // Development default: the form is typically served elsewhere.
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<http::HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(parsed)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
