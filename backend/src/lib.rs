//! DataViz Platform - Backend
//!
//! Forwards dashboard requests to the weather and GitHub providers and
//! serves the static dashboard pages.

use std::sync::Arc;

use axum::{http::Method, routing::get, Router};
use reqwest::Client;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;

pub use config::Config;
pub use error::{AppError, AppResult};

use external::{GitHubClient, WeatherClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: WeatherClient,
    pub github: GitHubClient,
}

impl AppState {
    /// Build the provider clients around one shared connection pool
    pub fn from_config(config: Config) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent(config.client.user_agent.clone())
            .build()
            .map_err(|e| AppError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            weather: WeatherClient::new(http.clone(), &config.weather)?,
            github: GitHubClient::new(http, &config.github)?,
            config: Arc::new(config),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // The dashboard may be served from another origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes());

    let router = match &state.config.server.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.route("/", get(handlers::root)),
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
