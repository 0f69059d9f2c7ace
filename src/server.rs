//! HTTP Server
//!
//! Axum server exposing the pull-based metrics endpoint.
//!
//! # Endpoints
//!
//! - `GET /` - HTML landing page with links to metrics and health
//! - `GET /metrics` - Runs one full collection cycle across all configured
//!   controllers and returns the assembled families in text format
//! - `GET /health` - Liveness check (always 200 once the listener is up)
//!
//! # Collection Model
//!
//! Collection is scrape-triggered, not loop-driven: each `/metrics` request
//! computes a fresh snapshot. Overlapping scrape requests are serialized
//! through a single mutex so at most one collection cycle (and one session
//! per controller credential) is in flight at a time.

use crate::collectors;
use crate::config::Config;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
    scrape_lock: Arc<Mutex<()>>,
}

pub async fn start(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.addr, config.server.port);

    let state = AppState {
        config: Arc::new(config),
        scrape_lock: Arc::new(Mutex::new(())),
    };

    let app = Router::new()
        .route("/", get(root_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Metrics server listening on {}", addr);
    info!("Metrics available at http://{}/metrics", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn root_handler() -> impl IntoResponse {
    axum::response::Html(
        r#"<html>
<head><title>SmartZone Exporter</title></head>
<body>
<h1>Ruckus SmartZone Prometheus Exporter</h1>
<p><a href="/metrics">Metrics</a></p>
<p><a href="/health">Health</a></p>
</body>
</html>"#,
    )
}

async fn metrics_handler(State(state): State<AppState>) -> Response {
    // One in-flight collection at a time; concurrent scrapes queue here.
    let _guard = state.scrape_lock.lock().await;

    match collectors::collect_cycle(&state.config).await {
        Ok(body) => body.into_response(),
        Err(e) => {
            error!("Failed to collect metrics: {}", e);
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error collecting metrics: {}", e),
            )
                .into_response()
        }
    }
}

async fn health_handler() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "OK")
}
