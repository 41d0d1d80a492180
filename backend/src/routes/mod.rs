//! Route definitions for the DataViz Platform

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(weather_routes())
        .merge(github_routes())
}

/// Weather forwarding routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/weather", get(handlers::get_current_weather))
        .route("/weather/forecast", get(handlers::get_forecast))
}

/// GitHub forwarding routes
fn github_routes() -> Router<AppState> {
    Router::new()
        .route("/github/user", get(handlers::get_github_user))
        .route("/github/repos", get(handlers::get_github_repos))
}
