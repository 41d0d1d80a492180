//! Configuration management for the DataViz Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with DATAVIZ_ prefix
//!
//! Provider credentials have no default and must come from a file or the
//! environment (`DATAVIZ_WEATHER__API_KEY`).

use std::fmt;
use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Outbound HTTP client configuration
    pub client: ClientConfig,

    /// Weather provider configuration
    pub weather: WeatherConfig,

    /// GitHub provider configuration
    pub github: GitHubConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,

    /// Directory with the dashboard and tutorial pages, served for any
    /// path the API does not handle
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// User-Agent sent with every upstream request
    pub user_agent: String,
}

#[derive(Deserialize, Clone)]
pub struct WeatherConfig {
    /// OpenWeatherMap API base URL
    pub base_url: String,

    /// OpenWeatherMap API key
    pub api_key: String,

    /// Unit system requested from the provider
    pub units: String,
}

// Keeps the key out of startup logs and panics.
impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"***")
            .field("units", &self.units)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GitHubConfig {
    /// GitHub REST API base URL
    pub base_url: String,

    /// Repositories requested per listing (GitHub caps this at 100)
    pub per_page: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("DATAVIZ_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("client.user_agent", "DataViz-Platform/1.0")?
            .set_default("weather.base_url", "https://api.openweathermap.org/data/2.5")?
            .set_default("weather.units", "metric")?
            .set_default("github.base_url", "https://api.github.com")?
            .set_default("github.per_page", 30)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (DATAVIZ_ prefix)
            .add_source(
                Environment::with_prefix("DATAVIZ")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject settings the endpoints cannot work with
    pub fn validate(&self) -> AppResult<()> {
        if self.weather.api_key.trim().is_empty() {
            return Err(AppError::Configuration(
                "weather.api_key must be set (DATAVIZ_WEATHER__API_KEY)".to_string(),
            ));
        }
        if self.client.user_agent.trim().is_empty() {
            return Err(AppError::Configuration(
                "client.user_agent must not be empty".to_string(),
            ));
        }
        if self.github.per_page == 0 || self.github.per_page > 100 {
            return Err(AppError::Configuration(format!(
                "github.per_page must be between 1 and 100, got {}",
                self.github.per_page
            )));
        }
        if let Some(dir) = &self.server.static_dir {
            if !dir.is_dir() {
                return Err(AppError::Configuration(format!(
                    "server.static_dir {} is not a directory",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
            static_dir: None,
        }
    }
}
