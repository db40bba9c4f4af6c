//! Trail Finder - Backend Server
//!
//! A hiking-trail discovery API: trail search backed by a places provider,
//! current weather with a hiking-suitability verdict, trail photo
//! discovery and proxying, and an assistant chat endpoint.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use services::photos::PhotoUrlCache;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Shared HTTP client for all upstream calls
    pub http: reqwest::Client,
    /// Resolved image URLs, cached to avoid repeated search quota use
    pub photo_cache: PhotoUrlCache,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trailfinder_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Trail Finder Server");
    tracing::info!("Environment: {}", config.environment);

    if !config.google.is_configured() {
        tracing::warn!("Places API key not configured; serving built-in trail fixtures");
    }
    if !config.weather.is_configured() {
        tracing::warn!("Weather API key not configured; serving synthetic weather");
    }

    let port = config.server.port;
    let state = AppState {
        config: Arc::new(config),
        http: reqwest::Client::new(),
        photo_cache: PhotoUrlCache::new(),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Trail Finder API v1.0"
}
