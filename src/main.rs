//! Stair Engineer - Rust/Axum staircase geometry service
//!
//! Synthesizes code-aware stair layouts for the estimating wizard and keeps
//! the list of stair designs committed to the current report.

use axum::{
    extract::State,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
pub mod report;
pub mod stair;

use config::Config;
use report::StairReport;

/// Application state shared across all handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub report: StairReport,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = AppState {
        report: StairReport::new(),
    };
    let app = build_router(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Stair design API (called by the wizard on every edit)
        .nest("/api/stairs", stair::router())
        // Saved designs for the report
        .nest("/api/report", report::router())
        .with_state(state)
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "stair-engineer",
        "saved_designs": state.report.len().await,
    }))
}
