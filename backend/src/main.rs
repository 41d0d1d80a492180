//! DataViz Platform - Backend Server
//!
//! Browser dashboard charting public weather and GitHub data.

use dataviz_backend::{create_app, AppState, Config};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    // Load configuration
    let config = Config::load()?;
    config.validate()?;

    tracing::info!("Starting DataViz Platform server");
    tracing::info!("Environment: {}", config.environment);
    if let Some(dir) = &config.server.static_dir {
        tracing::info!("Serving static pages from {}", dir.display());
    }

    let state = AppState::from_config(config.clone())?;
    let app = create_app(state);

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Plain text logs by default, JSON lines with `DATAVIZ_LOG_FORMAT=json`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "dataviz_server=debug,dataviz_backend=debug,tower_http=debug".into()
    });
    let json = std::env::var("DATAVIZ_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(fmt::layer))
        .init();
}
