//! Weather API client for fetching weather data
//!
//! Integrates with the OpenWeatherMap 2.5 API for current conditions and the
//! 5 day / 3 hour forecast, looked up by city name.

use reqwest::{Client, Url};
use serde_json::Value;
use shared::UpstreamResource;

use super::{endpoint_url, forward_json, parse_base_url};
use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: Url,
    units: String,
}

impl WeatherClient {
    /// Create a new WeatherClient on a shared HTTP client
    pub fn new(client: Client, config: &WeatherConfig) -> AppResult<Self> {
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: parse_base_url("weather.base_url", &config.base_url)?,
            units: config.units.clone(),
        })
    }

    /// Fetch current weather conditions for a city
    pub async fn get_current_weather(&self, city: &str) -> AppResult<Value> {
        self.fetch(UpstreamResource::CurrentWeather, "weather", city)
            .await
    }

    /// Fetch the 5 day forecast for a city
    pub async fn get_forecast(&self, city: &str) -> AppResult<Value> {
        self.fetch(UpstreamResource::Forecast, "forecast", city).await
    }

    async fn fetch(&self, resource: UpstreamResource, endpoint: &str, city: &str) -> AppResult<Value> {
        tracing::info!(%resource, city, "Fetching weather data");

        let url = endpoint_url(&self.base_url, &[endpoint])?;
        let request = self
            .client
            .get(url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
            ])
            .build()
            .map_err(|e| AppError::transport(resource, e))?;

        forward_json(&self.client, request, resource, Some(&self.api_key)).await
    }
}
