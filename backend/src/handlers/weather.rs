//! HTTP handlers for the weather forwarding endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use shared::{require_parameter, UpstreamResource};

use super::{first_value, QueryPairs};
use crate::error::AppResult;
use crate::AppState;

/// Current weather for a city, passed through from the provider
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> AppResult<Json<Value>> {
    let city = require_parameter(UpstreamResource::CurrentWeather, first_value(&query, "city"))?;
    let data = state.weather.get_current_weather(city).await?;

    let location = data
        .get("name")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    tracing::info!(city, location, "Fetched current weather");
    Ok(Json(data))
}

/// Forecast for a city, passed through from the provider
pub async fn get_forecast(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> AppResult<Json<Value>> {
    let city = require_parameter(UpstreamResource::Forecast, first_value(&query, "city"))?;
    let data = state.weather.get_forecast(city).await?;

    tracing::info!(city, "Fetched forecast");
    Ok(Json(data))
}
